use std::path::PathBuf;

use clap::{Args, Subcommand, ValueEnum};

use crate::cli::subcommands::{AuthCommands, HistoryCommands, SignInArgs};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Register, log in, log out, or show who is logged in.
    Auth {
        #[command(subcommand)]
        action: AuthCommands,
    },
    /// Analyze text for misinformation signals.
    Analyze(AnalyzeArgs),
    /// Past analyses of the logged-in user.
    History {
        #[command(subcommand)]
        action: HistoryCommands,
    },
    /// Interactive session: log in once, then analyze and browse history.
    Shell,
    /// Print the JSON Schema of a response type.
    Schema(SchemaArgs),
}

#[derive(Clone, Debug, Args)]
pub struct AnalyzeArgs {
    /// Text to analyze (reads stdin when neither TEXT nor --file is given).
    pub text: Option<String>,
    /// Read the text from a file.
    #[arg(long, value_name = "PATH", conflicts_with = "text")]
    pub file: Option<PathBuf>,
    #[command(flatten)]
    pub sign_in: SignInArgs,
}

#[derive(Clone, Debug, Args)]
pub struct SchemaArgs {
    #[arg(value_enum)]
    pub type_name: SchemaType,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum SchemaType {
    User,
    AnalysisResult,
    HistoryEntry,
}
