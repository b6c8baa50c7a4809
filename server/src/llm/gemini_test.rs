use super::parse_response;
use crate::llm::types::{GroundingSource, LlmError};

fn grounded_body() -> String {
    serde_json::json!({
        "candidates": [{
            "content": {
                "parts": [{ "text": "{\"aiApiConcepts\":[]}" }]
            },
            "groundingMetadata": {
                "groundingAttributions": [
                    { "web": { "uri": "https://a.example", "title": "A" } },
                    { "web": { "uri": "https://b.example" } },
                    { "web": { "title": "no uri, skipped" } },
                    { "retrievedContext": { "uri": "not web, skipped" } }
                ]
            }
        }]
    })
    .to_string()
}

#[test]
fn parse_extracts_text_and_sources() {
    let answer = parse_response(&grounded_body()).unwrap();
    assert_eq!(answer.text, "{\"aiApiConcepts\":[]}");
    assert_eq!(
        answer.sources,
        vec![
            GroundingSource { uri: "https://a.example".into(), title: Some("A".into()) },
            GroundingSource { uri: "https://b.example".into(), title: None },
        ]
    );
}

#[test]
fn parse_without_grounding_metadata_yields_no_sources() {
    let body = serde_json::json!({
        "candidates": [{ "content": { "parts": [{ "text": "{}" }] } }]
    })
    .to_string();

    let answer = parse_response(&body).unwrap();
    assert_eq!(answer.text, "{}");
    assert!(answer.sources.is_empty());
}

#[test]
fn parse_rejects_empty_candidate_list() {
    let body = serde_json::json!({ "candidates": [] }).to_string();
    assert!(matches!(parse_response(&body), Err(LlmError::EmptyCandidates)));

    let body = serde_json::json!({}).to_string();
    assert!(matches!(parse_response(&body), Err(LlmError::EmptyCandidates)));
}

#[test]
fn parse_rejects_candidate_without_text() {
    let body = serde_json::json!({
        "candidates": [{ "content": { "parts": [] } }]
    })
    .to_string();
    assert!(matches!(parse_response(&body), Err(LlmError::MissingContent)));

    let body = serde_json::json!({
        "candidates": [{ "content": { "parts": [{ "text": "" }] } }]
    })
    .to_string();
    assert!(matches!(parse_response(&body), Err(LlmError::MissingContent)));
}

#[test]
fn parse_rejects_malformed_body() {
    assert!(matches!(parse_response("not json"), Err(LlmError::ApiParse(_))));
}
