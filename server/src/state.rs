//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor.
//! Nothing is persisted and no request leaves state behind, so the only
//! shared piece is the LLM client handle.

use std::sync::Arc;

use crate::llm::LlmGenerate;

/// Shared application state, injected into Axum handlers via State extractor.
/// Clone is required by Axum — the inner client is Arc-wrapped.
#[derive(Clone)]
pub struct AppState {
    /// Optional LLM client. `None` if `GEMINI_API_KEY` is not configured.
    pub llm: Option<Arc<dyn LlmGenerate>>,
}

impl AppState {
    #[must_use]
    pub fn new(llm: Option<Arc<dyn LlmGenerate>>) -> Self {
        Self { llm }
    }
}
