use std::sync::{Arc, Mutex};

use super::*;
use crate::llm::{GroundedAnswer, GroundingSource, LlmError, LlmGenerate};

// =========================================================================
// MockLlm
// =========================================================================

struct MockLlm {
    answer: Result<GroundedAnswer, LlmError>,
    seen: Mutex<Option<(String, String)>>,
}

impl MockLlm {
    fn returning(answer: GroundedAnswer) -> Arc<dyn LlmGenerate> {
        Arc::new(Self { answer: Ok(answer), seen: Mutex::new(None) })
    }

    fn failing(err: LlmError) -> Arc<dyn LlmGenerate> {
        Arc::new(Self { answer: Err(err), seen: Mutex::new(None) })
    }
}

#[async_trait::async_trait]
impl LlmGenerate for MockLlm {
    async fn generate(
        &self,
        system: &str,
        prompt: &str,
        _response_schema: &serde_json::Value,
    ) -> Result<GroundedAnswer, LlmError> {
        *self.seen.lock().unwrap() = Some((system.to_owned(), prompt.to_owned()));
        match &self.answer {
            Ok(answer) => Ok(answer.clone()),
            Err(LlmError::ApiTimeout) => Err(LlmError::ApiTimeout),
            Err(e) => Err(LlmError::ApiRequest(e.to_string())),
        }
    }
}

fn answer_with(text: &str, sources: Vec<GroundingSource>) -> GroundedAnswer {
    GroundedAnswer { text: text.to_owned(), sources }
}

// =========================================================================
// run_research
// =========================================================================

#[tokio::test]
async fn research_maps_answer_and_sources() {
    let text = serde_json::json!({
        "aiApiConcepts": [{ "name": "Function Calling", "summary": "Let the model drive edits." }],
        "uiFrameworks": [
            { "name": "Svelte", "summary": "Compiled components." },
            { "name": "Tailwind CSS", "summary": "Utility styling." }
        ],
        "designPrinciples": []
    })
    .to_string();
    let sources = vec![
        GroundingSource { uri: "https://a.example".into(), title: Some("A".into()) },
        GroundingSource { uri: "https://b.example".into(), title: None },
    ];
    let llm = MockLlm::returning(answer_with(&text, sources));

    let response = run_research(&llm, "builder stack").await.unwrap();

    assert_eq!(response.research.ai_api_concepts.len(), 1);
    assert_eq!(response.research.ai_api_concepts[0].name, "Function Calling");
    assert_eq!(
        response.research.ui_frameworks,
        vec![
            ResearchItem { name: "Svelte".into(), summary: "Compiled components.".into() },
            ResearchItem { name: "Tailwind CSS".into(), summary: "Utility styling.".into() },
        ]
    );
    assert!(response.research.design_principles.is_empty());
    assert_eq!(
        response.sources,
        vec![
            Source { uri: "https://a.example".into(), title: Some("A".into()) },
            Source { uri: "https://b.example".into(), title: None },
        ]
    );
}

#[tokio::test]
async fn research_forwards_prompt_and_system_instruction() {
    let mock = Arc::new(MockLlm {
        answer: Ok(answer_with(
            r#"{"aiApiConcepts":[],"uiFrameworks":[],"designPrinciples":[]}"#,
            vec![],
        )),
        seen: Mutex::new(None),
    });
    let llm: Arc<dyn LlmGenerate> = mock.clone();

    run_research(&llm, "  exact user words  ").await.unwrap();

    let (system, prompt) = mock.seen.lock().unwrap().clone().unwrap();
    assert_eq!(system, SYSTEM_PROMPT);
    assert_eq!(prompt, "  exact user words  ");
}

#[tokio::test]
async fn research_rejects_non_schema_answer() {
    let llm = MockLlm::returning(answer_with("this is prose, not JSON", vec![]));

    let err = run_research(&llm, "p").await.unwrap_err();
    assert!(matches!(err, ResearchError::MalformedAnswer(_)));
    assert!(err.to_string().contains("Failed to parse JSON response"));
}

#[tokio::test]
async fn research_propagates_llm_timeout() {
    let llm = MockLlm::failing(LlmError::ApiTimeout);

    let err = run_research(&llm, "p").await.unwrap_err();
    assert!(matches!(err, ResearchError::Llm(ref e) if e.is_timeout()));
}

// =========================================================================
// response_schema
// =========================================================================

#[test]
fn schema_requires_all_three_categories() {
    let schema = response_schema();
    let required: Vec<&str> = schema["required"]
        .as_array()
        .unwrap()
        .iter()
        .filter_map(|v| v.as_str())
        .collect();
    assert_eq!(required, vec!["aiApiConcepts", "uiFrameworks", "designPrinciples"]);

    for key in ["aiApiConcepts", "uiFrameworks", "designPrinciples"] {
        let items = &schema["properties"][key]["items"];
        assert_eq!(items["required"], serde_json::json!(["name", "summary"]));
    }
}

#[test]
fn data_round_trips_wire_field_names() {
    let data: ResearchData = serde_json::from_str(
        r#"{"aiApiConcepts":[{"name":"A","summary":"B"}],"uiFrameworks":[],"designPrinciples":[]}"#,
    )
    .unwrap();
    assert_eq!(data.ai_api_concepts[0].name, "A");

    let value = serde_json::to_value(&data).unwrap();
    assert!(value.get("aiApiConcepts").is_some());
    assert!(value.get("ai_api_concepts").is_none());
}

#[test]
fn source_without_title_omits_the_field() {
    let value = serde_json::to_value(Source { uri: "https://x".into(), title: None }).unwrap();
    assert_eq!(value, serde_json::json!({ "uri": "https://x" }));
}
