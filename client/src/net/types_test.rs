use super::*;

#[test]
fn response_deserializes_realistic_payload() {
    let json = r#"{
        "research": {
            "aiApiConcepts": [
                { "name": "Function Calling", "summary": "Drive edits from the model." }
            ],
            "uiFrameworks": [
                { "name": "Svelte", "summary": "Compiled components." },
                { "name": "Tailwind CSS", "summary": "Utility styling." }
            ],
            "designPrinciples": []
        },
        "sources": [
            { "uri": "https://a.example", "title": "A" },
            { "uri": "https://b.example" }
        ]
    }"#;

    let response: ResearchResponse = serde_json::from_str(json).unwrap();
    assert_eq!(response.research.ai_api_concepts.len(), 1);
    assert_eq!(response.research.ui_frameworks[1].name, "Tailwind CSS");
    assert!(response.research.design_principles.is_empty());
    assert_eq!(response.sources[0].title.as_deref(), Some("A"));
    assert_eq!(response.sources[1].title, None);
}

#[test]
fn request_serializes_prompt_field() {
    let body = serde_json::to_value(ResearchRequest { prompt: "Test".into() }).unwrap();
    assert_eq!(body, serde_json::json!({ "prompt": "Test" }));
}

#[test]
fn category_order_is_preserved_within_each_list() {
    let json = r#"{
        "aiApiConcepts": [
            { "name": "B", "summary": "second alphabetically, first on the wire" },
            { "name": "A", "summary": "must stay second" }
        ],
        "uiFrameworks": [],
        "designPrinciples": []
    }"#;

    let data: ResearchData = serde_json::from_str(json).unwrap();
    let names: Vec<&str> = data.ai_api_concepts.iter().map(|i| i.name.as_str()).collect();
    assert_eq!(names, vec!["B", "A"]);
}
