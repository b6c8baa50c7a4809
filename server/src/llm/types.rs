//! LLM types — provider-neutral generation types and errors.
//!
//! The research pipeline needs exactly one operation from the provider: a
//! single grounded, schema-constrained generation. The [`LlmGenerate`]
//! trait captures that seam so the service layer can be tested against a
//! mock provider.

use serde::{Deserialize, Serialize};

// =============================================================================
// ERROR
// =============================================================================

/// Errors produced by LLM client operations.
#[derive(Debug, thiserror::Error)]
pub enum LlmError {
    /// The required API key environment variable is not set.
    #[error("missing API key: env var {var} not set")]
    MissingApiKey { var: String },

    /// The HTTP request to the LLM provider failed.
    #[error("failed to communicate with the Gemini API: {0}")]
    ApiRequest(String),

    /// The HTTP request to the LLM provider timed out.
    #[error("the AI research request timed out")]
    ApiTimeout,

    /// The LLM provider returned a non-success HTTP status.
    #[error("API response error: status {status}")]
    ApiResponse { status: u16, body: String },

    /// The LLM provider response body could not be deserialized.
    #[error("API response parse failed: {0}")]
    ApiParse(String),

    /// The provider returned an empty candidate list.
    #[error("Gemini API returned an empty candidate list")]
    EmptyCandidates,

    /// The candidate carried no structured JSON text.
    #[error("Gemini API failed to return structured JSON content")]
    MissingContent,

    /// The underlying HTTP client could not be constructed.
    #[error("HTTP client build failed: {0}")]
    HttpClientBuild(String),
}

impl LlmError {
    /// `true` for failures that map to a gateway-timeout status upstream.
    #[must_use]
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::ApiTimeout)
    }
}

// =============================================================================
// GROUNDED ANSWER
// =============================================================================

/// A web citation the provider attached to a generated answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroundingSource {
    pub uri: String,
    pub title: Option<String>,
}

/// A schema-constrained generation plus the citations that ground it.
///
/// `text` is the raw JSON document produced under the response schema;
/// interpreting it is the caller's job.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroundedAnswer {
    pub text: String,
    pub sources: Vec<GroundingSource>,
}

// =============================================================================
// GENERATE TRAIT
// =============================================================================

/// Provider-neutral async trait for grounded generation. Enables mocking in
/// tests.
#[async_trait::async_trait]
pub trait LlmGenerate: Send + Sync {
    /// Run one schema-constrained generation with search grounding.
    ///
    /// # Errors
    ///
    /// Returns an [`LlmError`] if the request fails, the response is
    /// malformed, or the provider returns no usable content.
    async fn generate(
        &self,
        system: &str,
        prompt: &str,
        response_schema: &serde_json::Value,
    ) -> Result<GroundedAnswer, LlmError>;
}
