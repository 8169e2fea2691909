use clap::Parser;
use hunter_config::GeneralConfig;

pub mod global;
pub mod root_commands;
pub mod subcommands;

pub use global::{GlobalFlags, OutputFormat};
pub use root_commands::Commands;

/// Top-level CLI parser for the `claimhunt` binary.
#[derive(Debug, Parser)]
#[command(
    name = "claimhunt",
    version,
    about = "Claim Hunter - check text for misinformation signals"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format: json, table, raw [default: json, or general.format]
    #[arg(short, long, global = true)]
    pub format: Option<OutputFormat>,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Backend base URL (overrides backend.url)
    #[arg(long, global = true, value_name = "URL")]
    pub backend_url: Option<String>,
}

impl Cli {
    /// Resolve global flags, falling back to the `[general]` config section.
    ///
    /// # Errors
    ///
    /// Fails if `general.format` is not a known output format.
    pub fn global_flags(&self, general: &GeneralConfig) -> anyhow::Result<GlobalFlags> {
        let format = match self.format {
            Some(format) => format,
            None => general
                .format
                .parse::<OutputFormat>()
                .map_err(|error| anyhow::anyhow!("general.format: {error}"))?,
        };
        Ok(GlobalFlags {
            format,
            quiet: self.quiet,
            verbose: self.verbose,
            backend_url: self.backend_url.clone(),
        })
    }
}
