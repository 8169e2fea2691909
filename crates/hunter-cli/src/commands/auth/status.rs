use hunter_core::User;
use hunter_session::SessionState;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

#[derive(Serialize)]
struct AuthStatusResponse {
    state: &'static str,
    authenticated: bool,
    user: Option<User>,
    backend: String,
}

impl AuthStatusResponse {
    fn new(state: &SessionState, backend: &str) -> Self {
        let label = match state {
            SessionState::Initializing => "initializing",
            SessionState::Anonymous => "anonymous",
            SessionState::Authenticated(_) => "authenticated",
        };
        Self {
            state: label,
            authenticated: state.is_authenticated(),
            user: state.user().cloned(),
            backend: backend.to_string(),
        }
    }
}

/// Runs the startup check unless the store already finished it.
pub async fn status(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let state = if ctx.store.is_loading() {
        ctx.store.init().await
    } else {
        ctx.store.state()
    };
    output(
        &AuthStatusResponse::new(&state, ctx.store.backend().base_url()),
        flags.format,
    )
}
