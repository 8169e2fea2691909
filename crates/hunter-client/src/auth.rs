//! Cookie-session authentication endpoints.
//!
//! The backend sets and clears the session cookie; these calls only carry it.

use hunter_core::{Credentials, Registration, User};

use crate::{ApiClient, Body, ClientError, RequestOptions, json_body};

impl ApiClient {
    /// `POST /auth/register`. Does not sign the user in by itself.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] on transport failure or a non-success status
    /// (e.g. the email is already registered).
    pub async fn register(&self, registration: &Registration) -> Result<Body, ClientError> {
        let body = json_body(registration)?;
        self.request("/auth/register", RequestOptions::post().json(body))
            .await
    }

    /// `POST /auth/login`. On success the backend's session cookie is stored
    /// in this client's jar.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] on transport failure or a non-success status.
    pub async fn login(&self, credentials: &Credentials) -> Result<Body, ClientError> {
        let body = json_body(credentials)?;
        self.request("/auth/login", RequestOptions::post().json(body))
            .await
    }

    /// `POST /auth/logout`.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] on transport failure or a non-success status.
    pub async fn logout(&self) -> Result<Body, ClientError> {
        self.request("/auth/logout", RequestOptions::post()).await
    }

    /// `GET /auth/me`: the user the current session cookie belongs to.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Api`] with status 401 when there is no valid
    /// session, and [`ClientError::Decode`] if the body is not a user.
    pub async fn current_user(&self) -> Result<User, ClientError> {
        self.request("/auth/me", RequestOptions::get())
            .await?
            .decode()
    }
}

