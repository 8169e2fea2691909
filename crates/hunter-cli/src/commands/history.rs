use anyhow::Context;
use hunter_client::ClientError;
use hunter_core::{HistoryEntry, RecordId};
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::HistoryCommands;
use crate::commands::analyze::AnalysisView;
use crate::commands::shared::sign_in::{ONE_SHOT_LOGIN_HINT, sign_in_if_requested};
use crate::context::AppContext;
use crate::output::output;

/// Characters of the analyzed text shown per row in `history list`.
const PREVIEW_CHARS: usize = 60;

#[derive(Debug, Serialize)]
struct HistoryRow {
    id: Option<RecordId>,
    created_at: Option<String>,
    risk_score: Option<f64>,
    risk_label: Option<String>,
    text: Option<String>,
}

impl From<&HistoryEntry> for HistoryRow {
    fn from(entry: &HistoryEntry) -> Self {
        let analysis = entry.analysis().ok();
        Self {
            id: entry.id.clone(),
            created_at: entry.created_at.clone(),
            risk_score: analysis.as_ref().and_then(|a| a.risk_score),
            risk_label: analysis.as_ref().map(hunter_core::AnalysisResult::risk_label),
            text: entry.text.as_deref().map(preview),
        }
    }
}

#[derive(Debug, Serialize)]
struct HistoryDetail {
    id: Option<RecordId>,
    created_at: Option<String>,
    text: Option<String>,
    analysis: AnalysisView,
}

/// Handle `claimhunt history <subcommand>`.
pub async fn handle(
    action: &HistoryCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        HistoryCommands::List { limit, sign_in } => {
            sign_in_if_requested(ctx, sign_in).await?;
            list(ctx, flags, *limit, ONE_SHOT_LOGIN_HINT).await
        }
        HistoryCommands::Get { id, sign_in } => {
            sign_in_if_requested(ctx, sign_in).await?;
            get(ctx, flags, id, ONE_SHOT_LOGIN_HINT).await
        }
    }
}

/// `limit` falls back to `general.history_limit`; zero lists everything.
pub async fn list(
    ctx: &AppContext,
    flags: &GlobalFlags,
    limit: Option<u32>,
    login_hint: &str,
) -> anyhow::Result<()> {
    let entries = ctx
        .store
        .backend()
        .history()
        .await
        .map_err(|e| explain(ctx, e, login_hint))?;

    let limit = limit.unwrap_or(ctx.config.general.history_limit);
    let rows = entries
        .iter()
        .take(if limit == 0 { usize::MAX } else { limit as usize })
        .map(HistoryRow::from)
        .collect::<Vec<_>>();
    output(&rows, flags.format)
}

pub async fn get(
    ctx: &AppContext,
    flags: &GlobalFlags,
    id: &str,
    login_hint: &str,
) -> anyhow::Result<()> {
    let id = RecordId::from(id);
    let entry = ctx
        .store
        .backend()
        .history_entry(&id)
        .await
        .map_err(|e| explain(ctx, e, login_hint))?;
    let analysis = entry
        .analysis()
        .with_context(|| format!("history entry {id} has an unreadable analysis"))?;

    output(
        &HistoryDetail {
            id: entry.id,
            created_at: entry.created_at,
            text: entry.text,
            analysis: analysis.into(),
        },
        flags.format,
    )
}

fn explain(ctx: &AppContext, err: ClientError, login_hint: &str) -> anyhow::Error {
    let err = ctx.store.observe(err);
    if err.is_unauthorized() {
        anyhow::anyhow!("Please log in to see your history ({login_hint})")
    } else {
        anyhow::Error::new(err).context("failed to fetch history")
    }
}

fn preview(text: &str) -> String {
    let flat = text.split_whitespace().collect::<Vec<_>>().join(" ");
    if flat.chars().count() <= PREVIEW_CHARS {
        return flat;
    }
    let mut out = flat.chars().take(PREVIEW_CHARS - 1).collect::<String>();
    out.push('…');
    out
}
