pub mod auth;
pub mod history;

pub use auth::AuthCommands;
pub use history::HistoryCommands;

use clap::Args;

/// Log in before running a one-shot command. The session lasts only as long
/// as the process.
#[derive(Clone, Debug, Default, Args)]
pub struct SignInArgs {
    /// Log in as this email first.
    #[arg(long, env = "HUNTER_EMAIL", requires = "password")]
    pub email: Option<String>,
    /// Password for --email.
    #[arg(long, env = "HUNTER_PASSWORD", hide_env_values = true)]
    pub password: Option<String>,
}
