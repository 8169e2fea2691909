use hunter_core::{AnalysisResult, RiskBand};
use hunter_session::{AnalysisFailure, submit_analysis};
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::AnalyzeArgs;
use crate::commands::shared::input::read_text;
use crate::commands::shared::sign_in::{ONE_SHOT_LOGIN_HINT, sign_in_if_requested};
use crate::context::AppContext;
use crate::output::output;

/// An analysis result with its display label resolved.
#[derive(Debug, Serialize)]
pub struct AnalysisView {
    pub risk_label: String,
    pub band: RiskBand,
    #[serde(flatten)]
    pub result: AnalysisResult,
}

impl From<AnalysisResult> for AnalysisView {
    fn from(result: AnalysisResult) -> Self {
        Self {
            risk_label: result.risk_label(),
            band: result.band(),
            result,
        }
    }
}

/// Handle `claimhunt analyze`.
pub async fn handle(args: &AnalyzeArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    sign_in_if_requested(ctx, &args.sign_in).await?;
    let text = read_text(args.text.as_deref(), args.file.as_deref()).await?;
    let view = run(ctx, &text, ONE_SHOT_LOGIN_HINT).await?;
    output(&view, flags.format)
}

/// Submit `text` and turn a failure into a printable error.
///
/// `login_hint` tells the user how to log in from wherever they are.
pub async fn run(ctx: &AppContext, text: &str, login_hint: &str) -> anyhow::Result<AnalysisView> {
    let had_session = ctx.store.is_authenticated();
    match submit_analysis(&ctx.store, text).await {
        Ok(result) => Ok(result.into()),
        Err(AnalysisFailure::LoginRequired) if had_session => Err(anyhow::anyhow!(
            "{} ({login_hint})",
            AnalysisFailure::LoginRequired
        )),
        Err(AnalysisFailure::LoginRequired) => {
            Err(anyhow::anyhow!("Please log in to analyze text ({login_hint})"))
        }
        Err(failure) => Err(failure.into()),
    }
}
