use hunter_core::{SignupForm, User};
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

#[derive(Serialize)]
struct AuthRegisterResponse {
    registered: bool,
    authenticated: bool,
    user: Option<User>,
    note: Option<String>,
}

pub async fn register(form: SignupForm, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let user = ctx.store.register(form).await?;
    let note = user
        .is_none()
        .then(|| "account created; log in to start a session".to_string());
    output(
        &AuthRegisterResponse {
            registered: true,
            authenticated: user.is_some(),
            user,
            note,
        },
        flags.format,
    )
}
