//! Analysis results returned by `POST /analyze/` and the history endpoints.
//!
//! The backend has emitted two incompatible shapes. [`AnalysisResult`] is the
//! canonical snake_case shape; [`LegacyAnalysisResult`] is the older camelCase
//! shape, accepted on input and converted on the way in. Every field is
//! optional in both.

use std::fmt;

use schemars::JsonSchema;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Keys that only appear in the canonical shape.
const CANONICAL_KEYS: &[&str] = &[
    "risk_score",
    "risk_level",
    "emotional_tone",
    "manipulation_score",
    "logical_fallacies",
];

/// Keys that only appear in the legacy shape.
const LEGACY_KEYS: &[&str] = &["riskScore", "emotionalTriggers", "logicalFallacies"];

/// Structured verdict on a piece of submitted text.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct AnalysisResult {
    /// 0-100, higher is riskier.
    #[serde(
        default,
        deserialize_with = "lenient_number",
        skip_serializing_if = "Option::is_none"
    )]
    #[schemars(with = "Option<f64>")]
    pub risk_score: Option<f64>,
    /// Backend-supplied qualitative label (e.g. "high").
    #[serde(
        default,
        deserialize_with = "lenient_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub risk_level: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub verdict: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient_claims",
        skip_serializing_if = "Option::is_none"
    )]
    pub claims: Option<Vec<Claim>>,
    /// A list of tones from the backend is joined with ", ".
    #[serde(
        default,
        deserialize_with = "lenient_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub emotional_tone: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient_number",
        skip_serializing_if = "Option::is_none"
    )]
    #[schemars(with = "Option<f64>")]
    pub manipulation_score: Option<f64>,
    /// Entries may be `{name, description}` objects or bare names.
    #[serde(
        default,
        deserialize_with = "lenient_fallacies",
        skip_serializing_if = "Option::is_none"
    )]
    pub logical_fallacies: Option<Vec<Fallacy>>,
}

impl AnalysisResult {
    /// Decode a response body in either shape.
    ///
    /// # Errors
    ///
    /// Returns the underlying `serde_json` error if the value is not an
    /// object. Fields of an unexpected type read as absent.
    pub fn from_value(value: Value) -> Result<Self, serde_json::Error> {
        if is_legacy_shape(&value) {
            let legacy: LegacyAnalysisResult = serde_json::from_value(value)?;
            return Ok(legacy.into());
        }
        serde_json::from_value(value)
    }

    /// Risk score, with a missing score counted as zero.
    #[must_use]
    pub fn score(&self) -> f64 {
        self.risk_score.unwrap_or(0.0)
    }

    #[must_use]
    pub fn band(&self) -> RiskBand {
        RiskBand::from_score(self.score())
    }

    /// Label to show next to the score: the backend's level when present,
    /// otherwise the band derived from the score.
    #[must_use]
    pub fn risk_label(&self) -> String {
        self.risk_level
            .clone()
            .filter(|level| !level.trim().is_empty())
            .unwrap_or_else(|| self.band().label().to_string())
    }

    #[must_use]
    pub fn claims(&self) -> &[Claim] {
        self.claims.as_deref().unwrap_or_default()
    }

    #[must_use]
    pub fn fallacies(&self) -> &[Fallacy] {
        self.logical_fallacies.as_deref().unwrap_or_default()
    }
}

/// Whether `value` looks like the legacy camelCase result.
#[must_use]
pub fn is_legacy_shape(value: &Value) -> bool {
    let Some(map) = value.as_object() else {
        return false;
    };
    LEGACY_KEYS.iter().any(|key| map.contains_key(*key))
        && !CANONICAL_KEYS.iter().any(|key| map.contains_key(*key))
}

/// An extracted factual assertion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(untagged)]
pub enum Claim {
    Text(String),
    Detailed {
        #[serde(alias = "text")]
        claim: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        reasoning: Option<String>,
    },
}

impl Claim {
    #[must_use]
    pub fn text(&self) -> &str {
        match self {
            Self::Text(text) | Self::Detailed { claim: text, .. } => text,
        }
    }

    #[must_use]
    pub fn reasoning(&self) -> Option<&str> {
        match self {
            Self::Text(_) => None,
            Self::Detailed { reasoning, .. } => reasoning.as_deref(),
        }
    }
}

/// A named logical fallacy found in the text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Fallacy {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// The deprecated camelCase result shape.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LegacyAnalysisResult {
    #[serde(default, deserialize_with = "lenient_number")]
    pub risk_score: Option<f64>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub verdict: Option<String>,
    #[serde(default, deserialize_with = "lenient_claims")]
    pub claims: Option<Vec<Claim>>,
    #[serde(default, deserialize_with = "lenient_strings")]
    pub emotional_triggers: Option<Vec<String>>,
    #[serde(default, deserialize_with = "lenient_fallacies")]
    pub logical_fallacies: Option<Vec<Fallacy>>,
}

impl From<LegacyAnalysisResult> for AnalysisResult {
    fn from(legacy: LegacyAnalysisResult) -> Self {
        let emotional_tone = legacy
            .emotional_triggers
            .filter(|triggers| !triggers.is_empty())
            .map(|triggers| triggers.join(", "));
        Self {
            risk_score: legacy.risk_score,
            risk_level: None,
            verdict: legacy.verdict,
            claims: legacy.claims,
            emotional_tone,
            manipulation_score: None,
            logical_fallacies: legacy.logical_fallacies,
        }
    }
}

/// Qualitative band for a risk score.
///
/// ```text
/// score <= 30       → low
/// 30 < score <= 70  → suspicious
/// score > 70        → highly misleading
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum RiskBand {
    Low,
    Suspicious,
    HighlyMisleading,
}

impl RiskBand {
    #[must_use]
    pub fn from_score(score: f64) -> Self {
        if score > 70.0 {
            Self::HighlyMisleading
        } else if score > 30.0 {
            Self::Suspicious
        } else {
            Self::Low
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Suspicious => "suspicious",
            Self::HighlyMisleading => "highly_misleading",
        }
    }

    /// Human-readable label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Low => "Low Risk",
            Self::Suspicious => "Suspicious",
            Self::HighlyMisleading => "Highly Misleading",
        }
    }
}

impl fmt::Display for RiskBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Accept numbers and numeric strings; anything else reads as absent.
fn lenient_number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value
        .and_then(|value| match value {
            Value::Number(number) => number.as_f64(),
            Value::String(text) => text.trim().parse::<f64>().ok(),
            _ => None,
        })
        .filter(|number| number.is_finite()))
}

/// A string, or a list of strings joined with ", ". Blank text and other
/// types read as absent.
fn lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::String(text)) => Some(text),
        Some(Value::Array(items)) => Some(strings(items).join(", ")),
        _ => None,
    }
    .filter(|text| !text.trim().is_empty()))
}

/// A list of strings; non-string items are dropped.
fn lenient_strings<'de, D>(deserializer: D) -> Result<Option<Vec<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::Array(items)) => Some(strings(items)),
        Some(Value::String(text)) => Some(vec![text]),
        _ => None,
    })
}

/// Claims that decode are kept; the rest are dropped.
fn lenient_claims<'de, D>(deserializer: D) -> Result<Option<Vec<Claim>>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    let Some(Value::Array(items)) = value else {
        return Ok(None);
    };
    Ok(Some(
        items
            .into_iter()
            .filter_map(|item| serde_json::from_value(item).ok())
            .collect(),
    ))
}

/// Fallacy objects, with a bare string read as the fallacy's name.
fn lenient_fallacies<'de, D>(deserializer: D) -> Result<Option<Vec<Fallacy>>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    let Some(Value::Array(items)) = value else {
        return Ok(None);
    };
    Ok(Some(
        items
            .into_iter()
            .filter_map(|item| match item {
                Value::String(name) => Some(Fallacy {
                    name: Some(name),
                    description: None,
                }),
                other => serde_json::from_value(other).ok(),
            })
            .collect(),
    ))
}

fn strings(items: Vec<Value>) -> Vec<String> {
    items
        .into_iter()
        .filter_map(|item| match item {
            Value::String(text) => Some(text),
            _ => None,
        })
        .collect()
}
