//! `ApiClient` against an in-process backend: headers, cookies, error
//! interpretation and URL building on the wire.

mod common;

use common::{MockBackend, Recorded, Reply, closed_port_url};
use hunter_client::{ApiClient, Body, ClientError, ErrorKind, FALLBACK_MESSAGE, RequestOptions};
use hunter_core::{AnalysisRequest, Credentials, RecordId, RiskBand};
use pretty_assertions::assert_eq;
use serde_json::json;

const SESSION_COOKIE: &str = "session=abc123";

/// Minimal cookie-session backend: login sets a cookie, `/auth/me` requires it.
fn session_backend(request: &Recorded) -> Reply {
    match (request.method.as_str(), request.url.as_str()) {
        ("POST", "/auth/login") => Reply::json(200, &json!({ "message": "Logged in" }))
            .with_header("Set-Cookie", &format!("{SESSION_COOKIE}; Path=/; HttpOnly")),
        ("GET", "/auth/me") => {
            let has_cookie = request
                .header("Cookie")
                .is_some_and(|cookie| cookie.contains(SESSION_COOKIE));
            if has_cookie {
                Reply::json(200, &json!({ "id": 1, "email": "a@b.com" }))
            } else {
                Reply::json(401, &json!({ "detail": "Not authenticated" }))
            }
        }
        _ => Reply::json(404, &json!({ "detail": "Not Found" })),
    }
}

fn single_reply(reply: Reply) -> MockBackend {
    MockBackend::start(move |_| reply.clone())
}

async fn failing_get(reply: Reply) -> ClientError {
    let backend = single_reply(reply);
    let client = ApiClient::new(backend.url()).unwrap();
    client
        .request("/anything", RequestOptions::get())
        .await
        .unwrap_err()
}

#[tokio::test]
async fn login_sends_json_and_cookie_rides_along() {
    let backend = MockBackend::start(session_backend);
    let client = ApiClient::new(backend.url()).unwrap();

    client
        .login(&Credentials::new("a@b.com", "x"))
        .await
        .unwrap();
    let user = client.current_user().await.unwrap();
    assert_eq!(user.email, "a@b.com");
    assert_eq!(user.id, RecordId::Number(1));

    let requests = backend.requests();
    assert_eq!(requests.len(), 2);
    assert_eq!(requests[0].header("Content-Type"), Some("application/json"));
    assert_eq!(
        requests[0].json(),
        json!({ "email": "a@b.com", "password": "x" })
    );
    assert_eq!(requests[1].header("Cookie"), Some(SESSION_COOKIE));
}

#[tokio::test]
async fn me_without_session_is_unauthorized() {
    let backend = MockBackend::start(session_backend);
    let client = ApiClient::new(backend.url()).unwrap();

    let err = client.current_user().await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Unauthorized);
    assert_eq!(err.status(), Some(401));
    assert!(err.is_unauthorized());
}

#[tokio::test]
async fn separate_clients_do_not_share_cookies() {
    let backend = MockBackend::start(session_backend);
    let signed_in = ApiClient::new(backend.url()).unwrap();
    signed_in
        .login(&Credentials::new("a@b.com", "x"))
        .await
        .unwrap();

    let stranger = ApiClient::new(backend.url()).unwrap();
    assert!(stranger.current_user().await.unwrap_err().is_unauthorized());
    assert!(signed_in.current_user().await.is_ok());
}

#[tokio::test]
async fn detail_is_preferred_for_the_message() {
    let err = failing_get(Reply::json(
        400,
        &json!({ "detail": "Invalid credentials", "message": "ignored" }),
    ))
    .await;
    let ClientError::Api(api) = err else {
        panic!("expected ApiError");
    };
    assert_eq!(api.status, 400);
    assert_eq!(api.message, "Invalid credentials");
    assert_eq!(
        api.data,
        Body::Json(json!({ "detail": "Invalid credentials", "message": "ignored" }))
    );
}

#[tokio::test]
async fn message_is_used_without_detail() {
    let err = failing_get(Reply::json(409, &json!({ "message": "Email already registered" }))).await;
    assert_eq!(err.kind(), ErrorKind::Http);
    assert_eq!(err.to_string(), "Email already registered (HTTP 409)");
}

#[tokio::test]
async fn plain_text_error_uses_fallback() {
    let err = failing_get(Reply::text(500, "Internal Server Error")).await;
    let ClientError::Api(api) = err else {
        panic!("expected ApiError");
    };
    assert_eq!(api.message, FALLBACK_MESSAGE);
    assert_eq!(api.data, Body::Text("Internal Server Error".into()));
}

#[tokio::test]
async fn rate_limit_and_unavailable_are_classified() {
    let limited = failing_get(Reply::json(429, &json!({ "detail": "Slow down" }))).await;
    assert_eq!(limited.kind(), ErrorKind::RateLimited);

    let unavailable = failing_get(Reply::text(503, "")).await;
    assert_eq!(unavailable.kind(), ErrorKind::ServiceUnavailable);
    assert_eq!(unavailable.status(), Some(503));
}

#[tokio::test]
async fn gateway_html_page_sent_as_json_is_still_unavailable() {
    let page = "<html><body>503 Service Temporarily Unavailable</body></html>";
    let err = failing_get(Reply {
        status: 503,
        headers: vec![("Content-Type".into(), "application/json".into())],
        body: page.to_string(),
    })
    .await;

    assert_eq!(err.kind(), ErrorKind::ServiceUnavailable);
    assert_eq!(err.status(), Some(503));
    let ClientError::Api(api) = err else {
        panic!("expected ApiError");
    };
    assert_eq!(api.data, Body::Text(page.into()));
}

#[tokio::test]
async fn text_success_body_is_returned_as_text() {
    let backend = single_reply(Reply::text(200, "pong"));
    let client = ApiClient::new(backend.url()).unwrap();
    let body = client
        .request("ping", RequestOptions::get())
        .await
        .unwrap();
    assert_eq!(body, Body::Text("pong".into()));
    assert_eq!(backend.requests()[0].url, "/ping");
}

#[tokio::test]
async fn unreachable_backend_is_a_transport_error() {
    let client = ApiClient::new(&closed_port_url()).unwrap();
    let err = client.logout().await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Transport);
    assert_eq!(err.status(), None);
}

#[tokio::test]
async fn analyze_posts_text_and_decodes_result() {
    let backend = single_reply(Reply::json(
        200,
        &json!({
            "risk_score": 85,
            "verdict": "Likely misleading.",
            "claims": [{ "claim": "Vaccines contain microchips", "reasoning": "No evidence." }],
            "emotional_tone": "fearful",
            "manipulation_score": 70,
            "logical_fallacies": [{ "name": "Appeal to fear" }],
        }),
    ));
    let client = ApiClient::new(backend.url()).unwrap();

    let request = AnalysisRequest::new("Vaccines contain microchips").unwrap();
    let result = client.analyze(&request).await.unwrap();
    assert_eq!(result.band(), RiskBand::HighlyMisleading);
    assert_eq!(result.claims()[0].reasoning(), Some("No evidence."));
    assert_eq!(result.fallacies()[0].name.as_deref(), Some("Appeal to fear"));

    let sent = &backend.requests()[0];
    assert_eq!(sent.method, "POST");
    assert_eq!(sent.url, "/analyze/");
    assert_eq!(sent.json(), json!({ "text": "Vaccines contain microchips" }));
}

#[tokio::test]
async fn history_entry_id_is_percent_encoded() {
    let backend = single_reply(Reply::json(200, &json!({ "id": "a b/c", "text": "t" })));
    let client = ApiClient::new(backend.url()).unwrap();

    let entry = client
        .history_entry(&RecordId::Text("a b/c".into()))
        .await
        .unwrap();
    assert_eq!(entry.id, Some(RecordId::Text("a b/c".into())));
    assert_eq!(backend.requests()[0].url, "/history/a%20b%2Fc");
}

#[tokio::test]
async fn history_lists_entries() {
    let backend = single_reply(Reply::json(
        200,
        &json!([
            { "id": 2, "input_text": "second", "result": { "risk_score": 40 } },
            { "id": 1, "input_text": "first", "risk_score": 10 },
        ]),
    ));
    let client = ApiClient::new(backend.url()).unwrap();

    let entries = client.history().await.unwrap();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].analysis().unwrap().band(), RiskBand::Suspicious);
    assert_eq!(entries[1].analysis().unwrap().band(), RiskBand::Low);
    assert_eq!(backend.requests()[0].url, "/history/");
}
