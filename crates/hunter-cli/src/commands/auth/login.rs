use hunter_core::{Credentials, User};
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

#[derive(Serialize)]
struct AuthLoginResponse {
    authenticated: bool,
    user: User,
}

pub async fn login(credentials: &Credentials, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let user = ctx.store.login(credentials).await?;
    output(
        &AuthLoginResponse {
            authenticated: true,
            user,
        },
        flags.format,
    )
}
