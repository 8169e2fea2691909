use std::str::FromStr;

use clap::ValueEnum;

/// Shared output mode across all commands.
#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
    Raw,
}

impl FromStr for OutputFormat {
    type Err = String;

    /// Parses the `general.format` config value the same way `--format` does.
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        <Self as ValueEnum>::from_str(value.trim(), true)
            .map_err(|_| format!("unknown output format '{value}' (expected json, table or raw)"))
    }
}

/// Global flags available before or after subcommands, with config defaults
/// already applied.
#[derive(Clone, Debug)]
pub struct GlobalFlags {
    pub format: OutputFormat,
    pub quiet: bool,
    pub verbose: bool,
    pub backend_url: Option<String>,
}
