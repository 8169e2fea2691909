//! Decoding realistic backend bodies and generating schemas for the public
//! response types.

use hunter_core::{AnalysisResult, HistoryEntry, RiskBand, User};
use pretty_assertions::assert_eq;
use schemars::schema_for;
use serde_json::json;

const ANALYZE_BODY: &str = r#"{
    "risk_score": 85,
    "risk_level": "High",
    "verdict": "This text exhibits significant indicators of misinformation.",
    "claims": [
        {"claim": "5G towers are responsible for spreading recent viruses.", "reasoning": "No known mechanism links radio frequencies to viral spread."},
        {"claim": "A new study proves that water has memory."}
    ],
    "emotional_tone": "alarmist",
    "manipulation_score": 78.5,
    "logical_fallacies": [
        {"name": "False Cause", "description": "Presuming a relationship means causation."},
        {"name": "Appeal to Emotion"}
    ]
}"#;

#[test]
fn analyze_body_decodes_fully() {
    let value: serde_json::Value = serde_json::from_str(ANALYZE_BODY).unwrap();
    let result = AnalysisResult::from_value(value).unwrap();

    assert_eq!(result.band(), RiskBand::HighlyMisleading);
    assert_eq!(result.risk_label(), "High");
    assert_eq!(result.manipulation_score, Some(78.5));
    assert_eq!(result.claims().len(), 2);
    assert!(result.claims()[1].reasoning().is_none());
    assert!(result.fallacies()[1].description.is_none());
}

#[test]
fn canonical_result_reserializes_to_same_body() {
    let value: serde_json::Value = serde_json::from_str(ANALYZE_BODY).unwrap();
    let result = AnalysisResult::from_value(value.clone()).unwrap();
    let mut expected = value;
    expected["risk_score"] = json!(85.0);
    assert_eq!(serde_json::to_value(&result).unwrap(), expected);
}

#[test]
fn history_list_decodes_mixed_layouts() {
    let entries: Vec<HistoryEntry> = serde_json::from_value(json!([
        { "id": 1, "text": "first", "result": { "risk_score": 20 } },
        { "id": 2, "input_text": "second", "risk_score": 55 },
    ]))
    .unwrap();

    let bands: Vec<RiskBand> = entries
        .iter()
        .map(|entry| entry.analysis().unwrap().band())
        .collect();
    assert_eq!(bands, vec![RiskBand::Low, RiskBand::Suspicious]);
}

#[test]
fn history_list_tolerates_epoch_timestamps() {
    let entries: Vec<HistoryEntry> = serde_json::from_value(json!([
        { "id": 1, "text": "a", "created_at": 1_700_000_000 },
        { "id": 2, "text": "b", "created_at": "2025-02-02T08:00:00Z" },
        { "id": 3, "text": "c", "created_at": null },
    ]))
    .unwrap();

    let stamps: Vec<Option<&str>> = entries
        .iter()
        .map(|entry| entry.created_at.as_deref())
        .collect();
    assert_eq!(
        stamps,
        vec![Some("1700000000"), Some("2025-02-02T08:00:00Z"), None]
    );
}

#[test]
fn schemas_generate_for_response_types() {
    for schema in [
        serde_json::to_value(schema_for!(User)).unwrap(),
        serde_json::to_value(schema_for!(AnalysisResult)).unwrap(),
        serde_json::to_value(schema_for!(HistoryEntry)).unwrap(),
    ] {
        assert!(schema.is_object(), "schema should be a JSON object");
    }

    let analysis = serde_json::to_value(schema_for!(AnalysisResult)).unwrap();
    let properties = analysis["properties"].as_object().expect("properties");
    for key in ["risk_score", "risk_level", "claims", "logical_fallacies"] {
        assert!(properties.contains_key(key), "missing property {key}");
    }
}
