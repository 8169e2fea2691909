use clap::Subcommand;

use super::SignInArgs;

/// History commands.
#[derive(Clone, Debug, Subcommand)]
pub enum HistoryCommands {
    /// List past analyses, newest first.
    List {
        /// Max entries to show (0 for all) [default: general.history_limit]
        #[arg(long)]
        limit: Option<u32>,
        #[command(flatten)]
        sign_in: SignInArgs,
    },
    /// Show one past analysis.
    Get {
        /// History entry ID.
        id: String,
        #[command(flatten)]
        sign_in: SignInArgs,
    },
}
