//! Submit text for analysis and explain failures to the user.

use hunter_client::{ClientError, ErrorKind};
use hunter_core::{AnalysisRequest, AnalysisResult, InputError};
use thiserror::Error;

use crate::backend::Backend;
use crate::store::SessionStore;

/// Shown for a rejection that carries no server detail.
const ANALYSIS_FAILED: &str = "Analysis failed. Please try again.";

/// Why an analysis produced no result. `Display` is the message to show.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AnalysisFailure {
    /// The text was rejected before anything was sent.
    #[error(transparent)]
    InvalidInput(#[from] InputError),

    /// The backend rejected the session; the store is already anonymous.
    #[error("Your session has expired. Please log in again.")]
    LoginRequired,

    #[error("Too many requests. Please wait a moment and try again.")]
    RateLimited,

    #[error("AI service unavailable. Please try again later.")]
    ServiceUnavailable,

    /// Any other non-success status.
    #[error("{message}")]
    Rejected { status: u16, message: String },

    #[error("Could not reach the analysis service. Check your connection and try again.")]
    Unreachable,

    #[error("Received an unexpected response from the analysis service.")]
    UnexpectedResponse,
}

impl AnalysisFailure {
    fn from_client(err: &ClientError) -> Self {
        match err.kind() {
            ErrorKind::Unauthorized => Self::LoginRequired,
            ErrorKind::RateLimited => Self::RateLimited,
            ErrorKind::ServiceUnavailable => Self::ServiceUnavailable,
            ErrorKind::Http => {
                let (status, message) = match err {
                    ClientError::Api(api) => (api.status, api.data.server_message()),
                    _ => (0, None),
                };
                Self::Rejected {
                    status,
                    message: message.unwrap_or_else(|| ANALYSIS_FAILED.to_string()),
                }
            }
            ErrorKind::Transport | ErrorKind::InvalidUrl => Self::Unreachable,
            ErrorKind::Decode => Self::UnexpectedResponse,
        }
    }
}

/// Validate `text`, send it through the store's backend and classify the
/// outcome.
///
/// A 401 invalidates the session before [`AnalysisFailure::LoginRequired`]
/// is returned.
///
/// # Errors
///
/// Returns an [`AnalysisFailure`] naming what went wrong.
pub async fn submit_analysis<B: Backend>(
    store: &SessionStore<B>,
    text: &str,
) -> Result<AnalysisResult, AnalysisFailure> {
    let request = AnalysisRequest::new(text)?;
    tracing::debug!(chars = request.text.chars().count(), "submitting analysis");

    store
        .backend()
        .analyze(&request)
        .await
        .map_err(|err| {
            let err = store.observe(err);
            let failure = AnalysisFailure::from_client(&err);
            tracing::warn!(error = %err, "analysis failed");
            failure
        })
}
