//! Analysis and history endpoints.

use hunter_core::analysis::is_legacy_shape;
use hunter_core::{AnalysisRequest, AnalysisResult, HistoryEntry, RecordId};
use serde_json::Value;

use crate::{ApiClient, ClientError, RequestOptions, json_body};

/// Keys a history listing may be wrapped in instead of a bare array.
const HISTORY_WRAPPER_KEYS: &[&str] = &["history", "items", "results"];

impl ApiClient {
    /// `POST /analyze/`.
    ///
    /// Accepts the result in either the canonical or the legacy shape.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] on transport failure, a non-success status, or
    /// a body that is not an analysis result.
    pub async fn analyze(&self, request: &AnalysisRequest) -> Result<AnalysisResult, ClientError> {
        let body = json_body(request)?;
        let value = self
            .request("/analyze/", RequestOptions::post().json(body))
            .await?
            .into_json()?;
        decode_result(value)
    }

    /// `GET /history/`: the signed-in user's past analyses, newest first as
    /// the backend orders them.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] on transport failure, a non-success status, or
    /// a body that is not a list of entries.
    pub async fn history(&self) -> Result<Vec<HistoryEntry>, ClientError> {
        let value = self
            .request("/history/", RequestOptions::get())
            .await?
            .into_json()?;
        decode_history(value)
    }

    /// `GET /history/{id}`.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] on transport failure, a non-success status
    /// (404 for an unknown id), or a body that is not an entry.
    pub async fn history_entry(&self, id: &RecordId) -> Result<HistoryEntry, ClientError> {
        let endpoint = format!("/history/{}", urlencoding::encode(&id.to_string()));
        self.request(&endpoint, RequestOptions::get())
            .await?
            .decode()
    }
}

fn decode_result(value: Value) -> Result<AnalysisResult, ClientError> {
    if is_legacy_shape(&value) {
        tracing::warn!("analysis result arrived in the legacy camelCase shape");
    }
    AnalysisResult::from_value(value).map_err(|e| ClientError::Decode(e.to_string()))
}

fn decode_history(value: Value) -> Result<Vec<HistoryEntry>, ClientError> {
    let list = match value {
        list @ Value::Array(_) => list,
        Value::Object(mut map) => HISTORY_WRAPPER_KEYS
            .iter()
            .find_map(|key| match map.remove(*key) {
                Some(list @ Value::Array(_)) => Some(list),
                _ => None,
            })
            .ok_or_else(|| ClientError::Decode("history response has no entry list".into()))?,
        other => {
            return Err(ClientError::Decode(format!(
                "expected a history list, got {other}"
            )));
        }
    };
    serde_json::from_value(list).map_err(|e| ClientError::Decode(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use hunter_core::RiskBand;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn canonical_result_decodes() {
        let result = decode_result(json!({
            "risk_score": 85,
            "risk_level": "high",
            "verdict": "Likely misleading.",
            "claims": ["The moon landing was staged"],
        }))
        .unwrap();
        assert_eq!(result.risk_score, Some(85.0));
        assert_eq!(result.risk_label(), "high");
        assert_eq!(result.claims()[0].text(), "The moon landing was staged");
    }

    #[test]
    fn legacy_result_is_converted() {
        let result = decode_result(json!({
            "riskScore": 72,
            "verdict": "Highly Misleading",
            "emotionalTriggers": ["fear", "urgency"],
        }))
        .unwrap();
        assert_eq!(result.risk_score, Some(72.0));
        assert_eq!(result.band(), RiskBand::HighlyMisleading);
        assert_eq!(result.emotional_tone.as_deref(), Some("fear, urgency"));
    }

    #[test]
    fn non_object_result_is_decode_error() {
        let err = decode_result(json!("not a result")).unwrap_err();
        assert!(matches!(err, ClientError::Decode(_)));
    }

    #[test]
    fn bare_history_array() {
        let entries = decode_history(json!([
            { "id": 2, "text": "b" },
            { "id": 1, "text": "a" },
        ]))
        .unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].id, Some(RecordId::Number(2)));
    }

    #[test]
    fn wrapped_history_array() {
        let entries = decode_history(json!({ "items": [{ "id": "x" }], "total": 1 })).unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].id, Some(RecordId::Text("x".into())));
    }

    #[test]
    fn history_without_list_is_decode_error() {
        assert!(matches!(
            decode_history(json!({ "total": 0 })),
            Err(ClientError::Decode(_))
        ));
        assert!(matches!(
            decode_history(json!("nope")),
            Err(ClientError::Decode(_))
        ));
    }
}
