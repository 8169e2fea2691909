//! Test backends for the session store.

#![allow(dead_code)]

use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;

use hunter_client::{ApiError, Body, ClientError};
use hunter_core::{AnalysisRequest, AnalysisResult, Credentials, RecordId, Registration, User};
use hunter_session::Backend;
use serde_json::json;

pub fn user(id: i64, email: &str) -> User {
    User {
        id: RecordId::Number(id),
        email: email.to_string(),
        name: None,
        extra: serde_json::Map::new(),
    }
}

pub fn api_error(status: u16, detail: &str) -> ClientError {
    ApiError::from_response(status, Body::Json(json!({ "detail": detail }))).into()
}

/// What `analyze` answers with.
#[derive(Debug, Clone)]
pub enum AnalyzeReply {
    Result(AnalysisResult),
    Status(u16, Body),
    Garbled,
}

#[derive(Debug, Default)]
struct FakeState {
    accounts: Vec<(String, String, User)>,
    session: Option<User>,
    sign_in_on_register: bool,
    fail_logout: bool,
    analyze: Option<AnalyzeReply>,
    calls: Vec<&'static str>,
}

/// In-memory backend with a server-side session, like the real one.
#[derive(Debug, Default)]
pub struct FakeBackend {
    state: Mutex<FakeState>,
}

impl FakeBackend {
    pub fn with_account(self, email: &str, password: &str, user: User) -> Self {
        self.state
            .lock()
            .unwrap()
            .accounts
            .push((email.into(), password.into(), user));
        self
    }

    /// Start with `user` already signed in (a session cookie from a
    /// previous run).
    pub fn signed_in_as(self, user: User) -> Self {
        self.state.lock().unwrap().session = Some(user);
        self
    }

    pub fn sign_in_on_register(self) -> Self {
        self.state.lock().unwrap().sign_in_on_register = true;
        self
    }

    pub fn failing_logout(self) -> Self {
        self.state.lock().unwrap().fail_logout = true;
        self
    }

    pub fn analyze_reply(self, reply: AnalyzeReply) -> Self {
        self.state.lock().unwrap().analyze = Some(reply);
        self
    }

    /// Forget the server-side session, as an expired cookie would.
    pub fn expire_session(&self) {
        self.state.lock().unwrap().session = None;
    }

    pub fn calls(&self) -> Vec<&'static str> {
        self.state.lock().unwrap().calls.clone()
    }
}

#[async_trait::async_trait]
impl Backend for FakeBackend {
    async fn register(&self, registration: &Registration) -> Result<(), ClientError> {
        let mut state = self.state.lock().unwrap();
        state.calls.push("register");
        if state.accounts.iter().any(|(email, ..)| *email == registration.email) {
            return Err(api_error(400, "Email already registered"));
        }
        let id = i64::try_from(state.accounts.len()).unwrap() + 1;
        let mut new_user = user(id, &registration.email);
        new_user.name = Some(registration.name.clone());
        if state.sign_in_on_register {
            state.session = Some(new_user.clone());
        }
        state.accounts.push((
            registration.email.clone(),
            registration.password.clone(),
            new_user,
        ));
        Ok(())
    }

    async fn login(&self, credentials: &Credentials) -> Result<(), ClientError> {
        let mut state = self.state.lock().unwrap();
        state.calls.push("login");
        let found = state
            .accounts
            .iter()
            .find(|(email, password, _)| {
                *email == credentials.email && *password == credentials.password
            })
            .map(|(.., user)| user.clone());
        match found {
            Some(user) => {
                state.session = Some(user);
                Ok(())
            }
            None => Err(api_error(400, "Invalid credentials")),
        }
    }

    async fn logout(&self) -> Result<(), ClientError> {
        let mut state = self.state.lock().unwrap();
        state.calls.push("logout");
        if state.fail_logout {
            return Err(api_error(500, "logout exploded"));
        }
        state.session = None;
        Ok(())
    }

    async fn current_user(&self) -> Result<User, ClientError> {
        let mut state = self.state.lock().unwrap();
        state.calls.push("me");
        state
            .session
            .clone()
            .ok_or_else(|| api_error(401, "Not authenticated"))
    }

    async fn analyze(&self, _request: &AnalysisRequest) -> Result<AnalysisResult, ClientError> {
        let mut state = self.state.lock().unwrap();
        state.calls.push("analyze");
        if state.session.is_none() {
            return Err(api_error(401, "Not authenticated"));
        }
        match state.analyze.clone() {
            Some(AnalyzeReply::Result(result)) => Ok(result),
            Some(AnalyzeReply::Status(status, body)) => {
                Err(ApiError::from_response(status, body).into())
            }
            Some(AnalyzeReply::Garbled) => Err(ClientError::Decode("expected value".into())),
            None => Ok(AnalysisResult::default()),
        }
    }
}

/// A real HTTP backend answering every request with the same JSON reply.
pub struct FixedReplyServer {
    server: Arc<tiny_http::Server>,
    worker: Option<JoinHandle<()>>,
    pub url: String,
}

impl FixedReplyServer {
    pub fn start(status: u16, body: serde_json::Value) -> Self {
        let server = Arc::new(tiny_http::Server::http("127.0.0.1:0").unwrap());
        let port = server.server_addr().to_ip().unwrap().port();
        let worker = {
            let server = Arc::clone(&server);
            std::thread::spawn(move || {
                for request in server.incoming_requests() {
                    let header =
                        tiny_http::Header::from_bytes("Content-Type", "application/json").unwrap();
                    let response = tiny_http::Response::from_data(body.to_string().into_bytes())
                        .with_status_code(status)
                        .with_header(header);
                    let _ = request.respond(response);
                }
            })
        };
        Self {
            server,
            worker: Some(worker),
            url: format!("http://127.0.0.1:{port}"),
        }
    }
}

impl Drop for FixedReplyServer {
    fn drop(&mut self) {
        self.server.unblock();
        if let Some(worker) = self.worker.take() {
            let _ = worker.join();
        }
    }
}
