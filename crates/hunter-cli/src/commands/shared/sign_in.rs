use anyhow::Context;
use hunter_core::Credentials;

use crate::cli::subcommands::SignInArgs;
use crate::context::AppContext;

/// Hint appended to "log in" errors from one-shot commands.
pub const ONE_SHOT_LOGIN_HINT: &str =
    "pass --email and --password (or set HUNTER_EMAIL and HUNTER_PASSWORD), or use `claimhunt shell`";

/// Log in first when `--email`/`--password` were given.
pub async fn sign_in_if_requested(ctx: &AppContext, args: &SignInArgs) -> anyhow::Result<()> {
    let (Some(email), Some(password)) = (&args.email, &args.password) else {
        return Ok(());
    };
    let user = ctx
        .store
        .login(&Credentials::new(email.as_str(), password.as_str()))
        .await
        .with_context(|| format!("login as {email} failed"))?;
    tracing::debug!(user = %user.id, "signed in for this command");
    Ok(())
}
