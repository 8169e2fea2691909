use hunter_client::ClientError;
use hunter_core::FormError;
use thiserror::Error;

/// Errors from session operations.
#[derive(Debug, Error)]
pub enum SessionError {
    /// The form was rejected before anything was sent.
    #[error(transparent)]
    Form(#[from] FormError),

    #[error(transparent)]
    Client(#[from] ClientError),
}

impl SessionError {
    #[must_use]
    pub const fn is_unauthorized(&self) -> bool {
        match self {
            Self::Form(_) => false,
            Self::Client(err) => err.is_unauthorized(),
        }
    }
}
