use clap::{Args, Subcommand};

/// Authentication commands.
#[derive(Clone, Debug, Subcommand)]
pub enum AuthCommands {
    /// Create an account.
    Register(AuthRegisterArgs),
    /// Check credentials and show the user they belong to.
    Login(AuthLoginArgs),
    /// End the backend session.
    Logout,
    /// Show whether the backend recognizes a session.
    Status,
}

#[derive(Clone, Debug, Args)]
pub struct AuthRegisterArgs {
    #[arg(long)]
    pub name: String,
    #[arg(long)]
    pub email: String,
    #[arg(long, env = "HUNTER_PASSWORD", hide_env_values = true)]
    pub password: String,
    /// Must match --password.
    #[arg(long)]
    pub confirm_password: String,
}

#[derive(Clone, Debug, Args)]
pub struct AuthLoginArgs {
    #[arg(long, env = "HUNTER_EMAIL")]
    pub email: String,
    #[arg(long, env = "HUNTER_PASSWORD", hide_env_values = true)]
    pub password: String,
}
