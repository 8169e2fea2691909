//! # hunter-client
//!
//! HTTP client for the Claim Hunter analysis backend.
//!
//! Every backend call goes through [`ApiClient::request`], which:
//! - sends `Content-Type: application/json` unless the caller overrides it,
//! - keeps a cookie jar so the backend's session cookie rides along on every
//!   request (authentication is cookie-based, there is no bearer token),
//! - parses the response as JSON or text according to its content type,
//! - turns non-success statuses into [`ApiError`].
//!
//! A 401 is reported as [`ErrorKind::Unauthorized`]; what to do about it is up
//! to the caller. Cookie values are never read or logged here.

pub mod analysis;
pub mod auth;

mod body;
mod error;
mod http;

pub use body::Body;
pub use error::{ApiError, ClientError, ErrorKind, FALLBACK_MESSAGE};

use hunter_config::BackendConfig;
use reqwest::Method;
use reqwest::header::HeaderMap;
use serde_json::Value;

const USER_AGENT: &str = concat!("claim-hunter/", env!("CARGO_PKG_VERSION"));

// ── Request options ────────────────────────────────────────────────

/// Method, body and extra headers for one request.
#[derive(Debug, Clone, Default)]
pub struct RequestOptions {
    pub method: Method,
    pub body: Option<Value>,
    pub headers: HeaderMap,
}

impl RequestOptions {
    #[must_use]
    pub fn get() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn post() -> Self {
        Self {
            method: Method::POST,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn json(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }

    #[must_use]
    pub fn headers(mut self, headers: HeaderMap) -> Self {
        self.headers = headers;
        self
    }
}

// ── Client ─────────────────────────────────────────────────────────

/// Cookie-carrying client bound to one backend base URL.
///
/// Cloning is cheap and clones share the connection pool and cookie jar.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    /// Create a client for `base_url` with no request timeout.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::InvalidUrl`] if `base_url` does not parse, or
    /// [`ClientError::Transport`] if the HTTP client cannot be built.
    pub fn new(base_url: &str) -> Result<Self, ClientError> {
        Self::build(base_url, None)
    }

    /// Create a client from the `[backend]` configuration section.
    ///
    /// # Errors
    ///
    /// See [`ApiClient::new`].
    pub fn from_config(config: &BackendConfig) -> Result<Self, ClientError> {
        let base_url = config
            .base_url()
            .map_err(|e| ClientError::InvalidUrl(e.to_string()))?;
        Self::build(base_url, config.timeout())
    }

    fn build(base_url: &str, timeout: Option<std::time::Duration>) -> Result<Self, ClientError> {
        let base_url = base_url.trim().trim_end_matches('/').to_string();
        reqwest::Url::parse(&base_url)
            .map_err(|e| ClientError::InvalidUrl(format!("{base_url}: {e}")))?;

        let mut builder = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .cookie_store(true);
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            http: builder.build()?,
            base_url,
        })
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Send one request to `endpoint` (a path relative to the base URL).
    ///
    /// # Errors
    ///
    /// - [`ClientError::Transport`] when no response was received.
    /// - [`ClientError::Api`] for any non-success status.
    /// - [`ClientError::Decode`] when a body declared as JSON does not parse.
    /// - [`ClientError::InvalidUrl`] when `endpoint` cannot be joined.
    pub async fn request(
        &self,
        endpoint: &str,
        options: RequestOptions,
    ) -> Result<Body, ClientError> {
        let url = self.endpoint_url(endpoint)?;
        let RequestOptions {
            method,
            body,
            headers,
        } = options;

        tracing::debug!(%method, endpoint, "sending backend request");

        let mut builder = self
            .http
            .request(method.clone(), url)
            .headers(http::merged_headers(&headers));
        if let Some(body) = body {
            builder = builder.body(body.to_string());
        }

        let resp = builder.send().await?;
        tracing::debug!(%method, endpoint, status = resp.status().as_u16(), "backend responded");
        http::interpret(resp).await
    }

    fn endpoint_url(&self, endpoint: &str) -> Result<reqwest::Url, ClientError> {
        let url = if endpoint.starts_with('/') {
            format!("{}{endpoint}", self.base_url)
        } else {
            format!("{}/{endpoint}", self.base_url)
        };
        reqwest::Url::parse(&url).map_err(|e| ClientError::InvalidUrl(format!("{url}: {e}")))
    }
}

/// Serialize a request body.
fn json_body<T: serde::Serialize>(value: &T) -> Result<Value, ClientError> {
    serde_json::to_value(value).map_err(|e| ClientError::Decode(e.to_string()))
}
