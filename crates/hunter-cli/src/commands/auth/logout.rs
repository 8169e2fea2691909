use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::{notice, output};

#[derive(Serialize)]
struct AuthLogoutResponse {
    cleared: bool,
    warning: Option<String>,
}

/// The local session is cleared even when the backend call fails; the
/// failure is reported as a warning, not an error.
pub async fn logout(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let warning = ctx.store.logout().await.err().map(|error| {
        let message = format!("logout request failed: {error}");
        notice(&format!("warning: {message}"), flags.quiet);
        message
    });
    output(
        &AuthLogoutResponse {
            cleared: true,
            warning,
        },
        flags.format,
    )
}
