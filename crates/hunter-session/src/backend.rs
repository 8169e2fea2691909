//! The backend calls a session depends on.

use hunter_client::{ApiClient, ClientError};
use hunter_core::{AnalysisRequest, AnalysisResult, Credentials, Registration, User};

/// Authentication and analysis operations.
///
/// [`ApiClient`] is the production implementation; tests substitute an
/// in-memory one.
#[async_trait::async_trait]
pub trait Backend: Send + Sync {
    async fn register(&self, registration: &Registration) -> Result<(), ClientError>;

    /// Establish a session. The session lives wherever the implementation
    /// keeps it (a cookie jar for [`ApiClient`]).
    async fn login(&self, credentials: &Credentials) -> Result<(), ClientError>;

    async fn logout(&self) -> Result<(), ClientError>;

    /// The user the current session belongs to.
    async fn current_user(&self) -> Result<User, ClientError>;

    async fn analyze(&self, request: &AnalysisRequest) -> Result<AnalysisResult, ClientError>;
}

#[async_trait::async_trait]
impl Backend for ApiClient {
    async fn register(&self, registration: &Registration) -> Result<(), ClientError> {
        ApiClient::register(self, registration).await.map(drop)
    }

    async fn login(&self, credentials: &Credentials) -> Result<(), ClientError> {
        ApiClient::login(self, credentials).await.map(drop)
    }

    async fn logout(&self) -> Result<(), ClientError> {
        ApiClient::logout(self).await.map(drop)
    }

    async fn current_user(&self) -> Result<User, ClientError> {
        ApiClient::current_user(self).await
    }

    async fn analyze(&self, request: &AnalysisRequest) -> Result<AnalysisResult, ClientError> {
        ApiClient::analyze(self, request).await
    }
}
