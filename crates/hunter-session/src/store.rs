//! The session state machine.
//!
//! ```text
//! Initializing ──init ok──▶ Authenticated(user)
//!      │                        ▲      │
//!   init err            login / │      │ logout (ok or err),
//!      ▼               register │      │ any 401
//!  Anonymous ───────────────────┘      ▼
//!      ▲◀──────────────────────────────┘
//! ```

use hunter_client::ClientError;
use hunter_core::{Credentials, SignupForm, User};
use tokio::sync::watch;

use crate::backend::Backend;
use crate::error::SessionError;

/// Who is logged in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionState {
    /// The startup check has not finished.
    Initializing,
    Anonymous,
    Authenticated(User),
}

impl SessionState {
    #[must_use]
    pub const fn user(&self) -> Option<&User> {
        match self {
            Self::Authenticated(user) => Some(user),
            Self::Initializing | Self::Anonymous => None,
        }
    }

    #[must_use]
    pub const fn is_authenticated(&self) -> bool {
        matches!(self, Self::Authenticated(_))
    }

    #[must_use]
    pub const fn is_loading(&self) -> bool {
        matches!(self, Self::Initializing)
    }
}

/// Owns the backend and the current [`SessionState`].
pub struct SessionStore<B> {
    backend: B,
    state: watch::Sender<SessionState>,
}

impl<B: Backend> SessionStore<B> {
    /// A store in [`SessionState::Initializing`]. Call [`Self::init`] next.
    #[must_use]
    pub fn new(backend: B) -> Self {
        let (state, _) = watch::channel(SessionState::Initializing);
        Self { backend, state }
    }

    #[must_use]
    pub const fn backend(&self) -> &B {
        &self.backend
    }

    /// Ask the backend who the session belongs to.
    ///
    /// Any failure, including an unreachable backend, leaves the store
    /// [`SessionState::Anonymous`]. The loading state ends either way.
    pub async fn init(&self) -> SessionState {
        let next = match self.backend.current_user().await {
            Ok(user) => {
                tracing::debug!(user = %user.id, "existing session found");
                SessionState::Authenticated(user)
            }
            Err(err) => {
                tracing::debug!(error = %err, "no usable session at startup");
                SessionState::Anonymous
            }
        };
        self.set(next.clone());
        next
    }

    /// Validate, log in, then fetch the user the new session belongs to.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Form`] without contacting the backend if either
    /// field is empty, and [`SessionError::Client`] if the login or the
    /// follow-up user fetch fails. The state is unchanged on error unless the
    /// backend answered 401.
    pub async fn login(&self, credentials: &Credentials) -> Result<User, SessionError> {
        credentials.validate()?;
        self.backend
            .login(credentials)
            .await
            .map_err(|e| self.observe(e))?;
        let user = self
            .backend
            .current_user()
            .await
            .map_err(|e| self.observe(e))?;

        tracing::info!(user = %user.id, "logged in");
        self.set(SessionState::Authenticated(user.clone()));
        Ok(user)
    }

    /// Validate and register, then try to pick up a session.
    ///
    /// Returns the user when the backend signed the new account in, `None`
    /// when registration succeeded but there is no session yet.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Form`] for an incomplete form or mismatched
    /// passwords, and [`SessionError::Client`] if registration fails.
    pub async fn register(&self, form: SignupForm) -> Result<Option<User>, SessionError> {
        let registration = form.validate()?;
        self.backend
            .register(&registration)
            .await
            .map_err(|e| self.observe(e))?;
        tracing::info!("registered");

        match self.backend.current_user().await {
            Ok(user) => {
                self.set(SessionState::Authenticated(user.clone()));
                Ok(Some(user))
            }
            Err(err) => {
                tracing::debug!(error = %err, "registered without a session");
                Ok(None)
            }
        }
    }

    /// End the session. Local state is cleared whatever the backend says.
    ///
    /// # Errors
    ///
    /// Returns the backend failure as a warning; the store is already
    /// [`SessionState::Anonymous`] when it does.
    pub async fn logout(&self) -> Result<(), SessionError> {
        let outcome = self.backend.logout().await;
        self.set(SessionState::Anonymous);
        if let Err(err) = outcome {
            tracing::warn!(error = %err, "logout request failed; local session cleared");
            return Err(err.into());
        }
        tracing::info!("logged out");
        Ok(())
    }

    /// Drop the local session after the backend rejected it.
    pub fn invalidate(&self) {
        let changed = self.state.send_if_modified(|state| {
            if *state == SessionState::Anonymous {
                return false;
            }
            *state = SessionState::Anonymous;
            true
        });
        if changed {
            tracing::info!("session rejected by backend; logged out locally");
        }
    }

    #[must_use]
    pub fn current(&self) -> Option<User> {
        self.state.borrow().user().cloned()
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.state.borrow().is_authenticated()
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.state.borrow().is_loading()
    }

    /// Snapshot of the current state.
    #[must_use]
    pub fn state(&self) -> SessionState {
        self.state.borrow().clone()
    }

    /// Receiver notified on every state change.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<SessionState> {
        self.state.subscribe()
    }

    /// Invalidate on 401, then hand the error back. Callers that talk to
    /// the backend directly pass their errors through here.
    pub fn observe(&self, err: ClientError) -> ClientError {
        if err.is_unauthorized() {
            self.invalidate();
        }
        err
    }

    fn set(&self, next: SessionState) {
        self.state.send_replace(next);
    }
}
