//! Parsed response bodies.

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::ClientError;

/// Field names checked, in order, for a server-supplied error message.
const MESSAGE_FIELDS: &[&str] = &["detail", "message"];

/// A response body, parsed according to its content type.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Body {
    Json(Value),
    Text(String),
}

impl Body {
    #[must_use]
    pub const fn as_json(&self) -> Option<&Value> {
        match self {
            Self::Json(value) => Some(value),
            Self::Text(_) => None,
        }
    }

    /// Decode a JSON body into `T`.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Decode`] if the body is text or does not match `T`.
    pub fn decode<T: DeserializeOwned>(self) -> Result<T, ClientError> {
        serde_json::from_value(self.into_json()?)
            .map_err(|e| ClientError::Decode(e.to_string()))
    }

    /// The JSON value, or [`ClientError::Decode`] for a text body.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Decode`] if the body is not JSON.
    pub fn into_json(self) -> Result<Value, ClientError> {
        match self {
            Self::Json(value) => Ok(value),
            Self::Text(text) if text.is_empty() => {
                Err(ClientError::Decode("expected a JSON body, got an empty one".into()))
            }
            Self::Text(_) => Err(ClientError::Decode(
                "expected a JSON body, got plain text".into(),
            )),
        }
    }

    /// Best-effort human message supplied by the server.
    ///
    /// Strings are used as they are; other non-null values (such as a list of
    /// validation errors) are rendered as compact JSON. Empty strings and nulls
    /// are skipped.
    #[must_use]
    pub fn server_message(&self) -> Option<String> {
        let map = self.as_json()?.as_object()?;
        MESSAGE_FIELDS.iter().find_map(|field| match map.get(*field)? {
            Value::Null => None,
            Value::String(text) if text.is_empty() => None,
            Value::String(text) => Some(text.clone()),
            other => Some(other.to_string()),
        })
    }
}
