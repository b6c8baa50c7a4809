//! Research service — prompt → grounded Gemini call → categorized results.
//!
//! DESIGN
//! ======
//! Owns the analyst system prompt and the structured-output schema, runs one
//! [`LlmGenerate::generate`] call, parses the schema-constrained JSON answer
//! into [`ResearchData`], and reshapes the provider's web citations into
//! [`Source`] records. Stateless: every request stands alone.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::info;

use crate::llm::{LlmError, LlmGenerate};

/// Instruction framing every research request sent to the provider.
pub const SYSTEM_PROMPT: &str = "\
You are a Senior UI/UX and AI Research Analyst focused on modern web application development. \
Your task is to perform web search using the provided tools and collect high-quality, up-to-date \
resources for building an AI-powered website builder with exceptional UI/UX. \
Analyze the user's request and provide the most relevant and powerful technologies and concepts. \
Your output MUST strictly adhere to the provided JSON schema. Do not include any introductory or \
concluding text outside of the JSON block. \
Ensure all entries are well-researched, current, and directly relate to building a modern, \
performant, and user-friendly web application.";

// =============================================================================
// WIRE TYPES
// =============================================================================

/// One recommended resource: a name plus a short rationale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResearchItem {
    pub name: String,
    pub summary: String,
}

/// The three fixed category lists, in wire (camelCase) field names.
/// Insertion order as returned by the provider; no dedup, no sort.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResearchData {
    pub ai_api_concepts: Vec<ResearchItem>,
    pub ui_frameworks: Vec<ResearchItem>,
    pub design_principles: Vec<ResearchItem>,
}

/// A citation returned alongside the generated content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Source {
    pub uri: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

/// Success payload of `POST /api/research`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResearchResponse {
    pub research: ResearchData,
    pub sources: Vec<Source>,
}

// =============================================================================
// ERROR
// =============================================================================

#[derive(Debug, thiserror::Error)]
pub enum ResearchError {
    #[error(transparent)]
    Llm(#[from] LlmError),

    /// The provider answered, but not with JSON matching the schema.
    #[error("Failed to parse JSON response from AI model. Check prompt/schema alignment.")]
    MalformedAnswer(#[source] serde_json::Error),
}

// =============================================================================
// RESPONSE SCHEMA
// =============================================================================

/// Structured-output schema forcing the three-list answer shape.
///
/// Field types use the provider's uppercase schema vocabulary.
#[must_use]
pub fn response_schema() -> serde_json::Value {
    let item_schema = |name_desc: &str, summary_desc: &str| {
        json!({
            "type": "OBJECT",
            "properties": {
                "name": { "type": "STRING", "description": name_desc },
                "summary": { "type": "STRING", "description": summary_desc }
            },
            "required": ["name", "summary"]
        })
    };

    json!({
        "type": "OBJECT",
        "properties": {
            "aiApiConcepts": {
                "type": "ARRAY",
                "description": "Concepts or specific API use cases for integrating the AI model into the builder workflow.",
                "items": item_schema(
                    "The name of the concept or API (e.g., Function Calling, Latent Space Image Generation).",
                    "A concise 1-2 sentence summary of how this concept can be applied to the website builder."
                )
            },
            "uiFrameworks": {
                "type": "ARRAY",
                "description": "Recommended modern component libraries, styling utilities, or frameworks for rapid UI development.",
                "items": item_schema(
                    "The name of the framework or tool (e.g., React, Svelte, Tailwind CSS).",
                    "A concise 1-2 sentence summary of why this resource is valuable for the project."
                )
            },
            "designPrinciples": {
                "type": "ARRAY",
                "description": "Key UI/UX design philosophies, methodologies, or libraries relevant to modern AI builders.",
                "items": item_schema(
                    "The name of the principle or library (e.g., Atomic Design, Shadcn UI).",
                    "A concise 1-2 sentence summary of why this resource is valuable for the project."
                )
            }
        },
        "required": ["aiApiConcepts", "uiFrameworks", "designPrinciples"]
    })
}

// =============================================================================
// MAIN ENTRY POINT
// =============================================================================

/// Run one research request end to end.
///
/// # Errors
///
/// Returns a [`ResearchError`] when the provider call fails or the answer
/// text is not valid JSON for [`ResearchData`].
pub async fn run_research(
    llm: &Arc<dyn LlmGenerate>,
    prompt: &str,
) -> Result<ResearchResponse, ResearchError> {
    info!(prompt_len = prompt.len(), "research: prompt received");

    let answer = llm.generate(SYSTEM_PROMPT, prompt, &response_schema()).await?;

    let research: ResearchData =
        serde_json::from_str(&answer.text).map_err(ResearchError::MalformedAnswer)?;

    let sources = answer
        .sources
        .into_iter()
        .map(|s| Source { uri: s.uri, title: s.title })
        .collect();

    Ok(ResearchResponse { research, sources })
}

#[cfg(test)]
#[path = "research_test.rs"]
mod tests;
