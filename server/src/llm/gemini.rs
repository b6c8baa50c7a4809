//! Gemini `generateContent` API client.
//!
//! Thin HTTP wrapper for `/models/{model}:generateContent` with search
//! grounding and a structured-output schema. Pure parsing in
//! `parse_response` for testability.

use std::time::Duration;

use super::config::{GeminiConfig, LlmTimeouts};
use super::types::{GroundedAnswer, GroundingSource, LlmError};

// =============================================================================
// CLIENT
// =============================================================================

pub struct GeminiClient {
    http: reqwest::Client,
    api_key: String,
    base_url: String,
    model: String,
}

impl GeminiClient {
    /// Build a client from environment variables. See [`GeminiConfig::from_env`].
    ///
    /// # Errors
    ///
    /// Returns an error if the API key is missing or the HTTP client fails.
    pub fn from_env() -> Result<Self, LlmError> {
        Self::from_config(GeminiConfig::from_env()?)
    }

    /// Build a client from a parsed typed config.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to build.
    pub fn from_config(config: GeminiConfig) -> Result<Self, LlmError> {
        let LlmTimeouts { request_secs, connect_secs } = config.timeouts;
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(request_secs))
            .connect_timeout(Duration::from_secs(connect_secs))
            .build()
            .map_err(|e| LlmError::HttpClientBuild(e.to_string()))?;
        Ok(Self {
            http,
            api_key: config.api_key,
            base_url: config.base_url,
            model: config.model,
        })
    }

    /// Return the configured model name (e.g. `"gemini-2.5-flash-preview-09-2025"`).
    #[must_use]
    pub fn model(&self) -> &str {
        &self.model
    }

    async fn generate_inner(
        &self,
        system: &str,
        prompt: &str,
        response_schema: &serde_json::Value,
    ) -> Result<GroundedAnswer, LlmError> {
        let body = ApiRequest {
            contents: vec![ContentIn { parts: vec![PartIn { text: prompt }] }],
            tools: vec![ToolIn { google_search: serde_json::Map::new() }],
            system_instruction: InstructionIn { parts: vec![PartIn { text: system }] },
            generation_config: GenerationConfigIn {
                response_mime_type: "application/json",
                response_schema,
            },
        };

        let url = format!("{}/models/{}:generateContent", self.base_url, self.model);
        let response = self
            .http
            .post(&url)
            .query(&[("key", self.api_key.as_str())])
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    LlmError::ApiTimeout
                } else {
                    LlmError::ApiRequest(e.to_string())
                }
            })?;

        let status = response.status().as_u16();
        let text = response
            .text()
            .await
            .map_err(|e| LlmError::ApiRequest(e.to_string()))?;

        if status != 200 {
            return Err(LlmError::ApiResponse { status, body: text });
        }

        parse_response(&text)
    }
}

#[async_trait::async_trait]
impl super::types::LlmGenerate for GeminiClient {
    async fn generate(
        &self,
        system: &str,
        prompt: &str,
        response_schema: &serde_json::Value,
    ) -> Result<GroundedAnswer, LlmError> {
        self.generate_inner(system, prompt, response_schema).await
    }
}

// =============================================================================
// WIRE TYPES
// =============================================================================

#[derive(serde::Serialize)]
struct ApiRequest<'a> {
    contents: Vec<ContentIn<'a>>,
    tools: Vec<ToolIn>,
    #[serde(rename = "systemInstruction")]
    system_instruction: InstructionIn<'a>,
    #[serde(rename = "generationConfig")]
    generation_config: GenerationConfigIn<'a>,
}

#[derive(serde::Serialize)]
struct ContentIn<'a> {
    parts: Vec<PartIn<'a>>,
}

#[derive(serde::Serialize)]
struct InstructionIn<'a> {
    parts: Vec<PartIn<'a>>,
}

#[derive(serde::Serialize)]
struct PartIn<'a> {
    text: &'a str,
}

/// `{"google_search": {}}` — enables the provider's search grounding tool.
#[derive(serde::Serialize)]
struct ToolIn {
    google_search: serde_json::Map<String, serde_json::Value>,
}

#[derive(serde::Serialize)]
struct GenerationConfigIn<'a> {
    #[serde(rename = "responseMimeType")]
    response_mime_type: &'a str,
    #[serde(rename = "responseSchema")]
    response_schema: &'a serde_json::Value,
}

#[derive(serde::Deserialize)]
struct ApiResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(serde::Deserialize)]
struct Candidate {
    #[serde(default)]
    content: Option<CandidateContent>,
    #[serde(rename = "groundingMetadata", default)]
    grounding_metadata: Option<GroundingMetadata>,
}

#[derive(serde::Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<PartOut>,
}

#[derive(serde::Deserialize)]
struct PartOut {
    #[serde(default)]
    text: Option<String>,
}

#[derive(serde::Deserialize)]
struct GroundingMetadata {
    #[serde(rename = "groundingAttributions", default)]
    grounding_attributions: Vec<GroundingAttribution>,
}

#[derive(serde::Deserialize)]
struct GroundingAttribution {
    #[serde(default)]
    web: Option<WebAttribution>,
}

#[derive(serde::Deserialize)]
struct WebAttribution {
    #[serde(default)]
    uri: Option<String>,
    #[serde(default)]
    title: Option<String>,
}

// =============================================================================
// PARSING
// =============================================================================

/// Extract the structured JSON text and web citations from a raw
/// `generateContent` response body.
fn parse_response(json: &str) -> Result<GroundedAnswer, LlmError> {
    let api: ApiResponse = serde_json::from_str(json).map_err(|e| LlmError::ApiParse(e.to_string()))?;

    let candidate = api.candidates.into_iter().next().ok_or(LlmError::EmptyCandidates)?;

    let text = candidate
        .content
        .and_then(|c| c.parts.into_iter().next())
        .and_then(|p| p.text)
        .filter(|t| !t.is_empty())
        .ok_or(LlmError::MissingContent)?;

    // Citations only count when the attribution names a web URI.
    let sources = candidate
        .grounding_metadata
        .map(|m| m.grounding_attributions)
        .unwrap_or_default()
        .into_iter()
        .filter_map(|a| a.web)
        .filter_map(|web| {
            let uri = web.uri.filter(|u| !u.is_empty())?;
            Some(GroundingSource { uri, title: web.title })
        })
        .collect();

    Ok(GroundedAnswer { text, sources })
}

#[cfg(test)]
#[path = "gemini_test.rs"]
mod tests;
