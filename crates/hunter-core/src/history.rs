//! Past analyses returned by `GET /history/` and `GET /history/{id}`.

use schemars::JsonSchema;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

use crate::analysis::AnalysisResult;
use crate::ids::RecordId;

/// Keys under which the backend may nest the analysis of an entry.
const NESTED_RESULT_KEYS: &[&str] = &["result", "analysis"];

/// One stored analysis.
///
/// The backend either nests the result under `result`/`analysis` or flattens
/// it into the entry; [`HistoryEntry::analysis`] reads both.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct HistoryEntry {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<RecordId>,
    #[serde(
        default,
        alias = "input_text",
        deserialize_with = "display_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub text: Option<String>,
    /// As sent: an ISO 8601 string, or epoch seconds rendered as text.
    #[serde(
        default,
        deserialize_with = "display_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub created_at: Option<String>,
    #[serde(flatten)]
    pub rest: Map<String, Value>,
}

impl HistoryEntry {
    /// Decode the analysis stored with this entry.
    ///
    /// # Errors
    ///
    /// Returns the `serde_json` error if the stored result cannot be read as
    /// an object. Mistyped fields inside it read as absent.
    pub fn analysis(&self) -> Result<AnalysisResult, serde_json::Error> {
        for key in NESTED_RESULT_KEYS {
            if let Some(nested @ Value::Object(_)) = self.rest.get(*key) {
                return AnalysisResult::from_value(nested.clone());
            }
        }
        AnalysisResult::from_value(Value::Object(self.rest.clone()))
    }
}

/// Strings as is, numbers and booleans as their JSON text, anything else as
/// absent.
fn display_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::String(text)) => Some(text),
        Some(scalar @ (Value::Number(_) | Value::Bool(_))) => Some(scalar.to_string()),
        _ => None,
    })
}
