//! Client error types.

use thiserror::Error;

use crate::body::Body;

/// Message used when the server does not supply one.
pub const FALLBACK_MESSAGE: &str = "Something went wrong";

/// Errors returned by [`crate::ApiClient`].
#[derive(Debug, Error)]
pub enum ClientError {
    /// The request never produced an HTTP response (connection refused, DNS,
    /// TLS, timeout). The transport error is passed through unchanged.
    #[error("HTTP transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The backend answered with a non-success status.
    #[error(transparent)]
    Api(#[from] ApiError),

    /// A success response whose body could not be read as the expected type.
    #[error("unexpected response body: {0}")]
    Decode(String),

    /// The endpoint could not be joined onto the base URL.
    #[error("invalid request URL: {0}")]
    InvalidUrl(String),
}

impl ClientError {
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Transport(_) => ErrorKind::Transport,
            Self::Api(api) => api.kind(),
            Self::Decode(_) => ErrorKind::Decode,
            Self::InvalidUrl(_) => ErrorKind::InvalidUrl,
        }
    }

    /// The HTTP status, if the backend answered at all.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Api(api) => Some(api.status),
            _ => None,
        }
    }

    #[must_use]
    pub const fn is_unauthorized(&self) -> bool {
        matches!(self.kind(), ErrorKind::Unauthorized)
    }
}

/// Classification callers branch on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    Transport,
    /// 401: the session is missing or no longer valid.
    Unauthorized,
    /// 429
    RateLimited,
    /// 503
    ServiceUnavailable,
    /// Any other non-success status.
    Http,
    Decode,
    InvalidUrl,
}

/// A non-success response from the backend.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{message} (HTTP {status})")]
pub struct ApiError {
    /// HTTP status code.
    pub status: u16,
    /// Server `detail`, else server `message`, else [`FALLBACK_MESSAGE`].
    pub message: String,
    /// The parsed response body, for callers that need more than the message.
    pub data: Body,
}

impl ApiError {
    /// Synthesize the error for a failed response.
    #[must_use]
    pub fn from_response(status: u16, data: Body) -> Self {
        let message = data
            .server_message()
            .unwrap_or_else(|| FALLBACK_MESSAGE.to_string());
        Self {
            status,
            message,
            data,
        }
    }

    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self.status {
            401 => ErrorKind::Unauthorized,
            429 => ErrorKind::RateLimited,
            503 => ErrorKind::ServiceUnavailable,
            _ => ErrorKind::Http,
        }
    }
}
