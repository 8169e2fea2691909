mod login;
mod logout;
mod register;
mod status;

pub use login::login;
pub use logout::logout;
pub use register::register;
pub use status::status;

use hunter_core::{Credentials, SignupForm};

use crate::cli::GlobalFlags;
use crate::cli::subcommands::AuthCommands;
use crate::context::AppContext;

/// Handle `claimhunt auth <subcommand>`.
pub async fn handle(action: &AuthCommands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match action {
        AuthCommands::Register(args) => {
            let form = SignupForm {
                name: args.name.clone(),
                email: args.email.clone(),
                password: args.password.clone(),
                confirm_password: args.confirm_password.clone(),
            };
            register(form, ctx, flags).await
        }
        AuthCommands::Login(args) => {
            login(&Credentials::new(args.email.as_str(), args.password.as_str()), ctx, flags).await
        }
        AuthCommands::Logout => logout(ctx, flags).await,
        AuthCommands::Status => status(ctx, flags).await,
    }
}
