//! Shared request/response helpers.
//!
//! Centralizes header defaults and response interpretation (content-type
//! sniffing, non-success → [`ApiError`]) so the endpoint modules stay focused
//! on paths and types.

use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderValue};

use crate::body::Body;
use crate::error::{ApiError, ClientError};

/// Default headers with caller overrides applied on top.
///
/// `Content-Type: application/json` is always present unless the caller
/// supplies its own value.
pub fn merged_headers(overrides: &HeaderMap) -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    for name in overrides.keys() {
        headers.remove(name);
    }
    for (name, value) in overrides {
        headers.append(name.clone(), value.clone());
    }
    headers
}

/// Read a response into a [`Body`] and fail on non-success statuses.
///
/// - Bodies declared as JSON (`application/json` or a `+json` suffix) are
///   parsed; everything else is read as text.
/// - An empty body is empty text whatever its declared type.
/// - A non-2xx status becomes [`ClientError::Api`] carrying the parsed body.
///   A failure body that does not parse as declared (a proxy's HTML error
///   page sent as JSON) is kept as text; only success bodies fail to decode.
pub async fn interpret(resp: reqwest::Response) -> Result<Body, ClientError> {
    let status = resp.status();
    let json = is_json(resp.headers());
    let bytes = resp.bytes().await?;

    if !status.is_success() {
        let data = parse_body(&bytes, json)
            .unwrap_or_else(|_| Body::Text(String::from_utf8_lossy(&bytes).into_owned()));
        return Err(ApiError::from_response(status.as_u16(), data).into());
    }
    parse_body(&bytes, json)
}

fn is_json(headers: &HeaderMap) -> bool {
    headers
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(';').next())
        .map(|mime| mime.trim().to_ascii_lowercase())
        .is_some_and(|mime| mime == "application/json" || mime.ends_with("+json"))
}

fn parse_body(bytes: &[u8], json: bool) -> Result<Body, ClientError> {
    if bytes.is_empty() {
        return Ok(Body::Text(String::new()));
    }
    if json {
        return serde_json::from_slice(bytes)
            .map(Body::Json)
            .map_err(|e| ClientError::Decode(format!("invalid JSON body: {e}")));
    }
    Ok(Body::Text(String::from_utf8_lossy(bytes).into_owned()))
}
