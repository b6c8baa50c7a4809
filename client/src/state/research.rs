//! Research request state for the page.
//!
//! SYSTEM CONTEXT
//! ==============
//! One submission at a time: `Idle → Loading → {Success | Error} → Idle` on
//! the next submit. The submit control is disabled while `Loading`, which is
//! the sole guard against overlapping requests.

#[cfg(test)]
#[path = "research_test.rs"]
mod research_test;

use crate::net::types::ResearchResponse;

/// Shown when submit is pressed with an empty or whitespace-only prompt.
pub const EMPTY_PROMPT_MESSAGE: &str = "Please enter a research prompt.";

/// Status of the current (or last) research submission.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum PromptStatus {
    #[default]
    Idle,
    Loading,
    Success,
    Error,
}

/// State for the research page: current status plus the rendered payload or
/// failure message. Held in a single `RwSignal` provided via context.
#[derive(Clone, Debug, Default)]
pub struct ResearchState {
    pub status: PromptStatus,
    pub result: Option<ResearchResponse>,
    pub error: Option<String>,
}

impl ResearchState {
    /// Enter `Loading`, clearing any previously visible result or error.
    pub fn begin(&mut self) {
        self.status = PromptStatus::Loading;
        self.result = None;
        self.error = None;
    }

    /// Store a successful response and leave `Loading`.
    pub fn succeed(&mut self, response: ResearchResponse) {
        self.status = PromptStatus::Success;
        self.result = Some(response);
        self.error = None;
    }

    /// Store a failure message and leave `Loading`. The result region stays
    /// empty.
    pub fn fail(&mut self, message: impl Into<String>) {
        self.status = PromptStatus::Error;
        self.result = None;
        self.error = Some(message.into());
    }

    /// `true` while the one in-flight request is awaited; drives the
    /// disabled state of the submit control.
    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.status == PromptStatus::Loading
    }
}

/// Trim the prompt; `None` means the submission must be rejected locally
/// before any network call.
#[must_use]
pub fn normalized_prompt(input: &str) -> Option<String> {
    let trimmed = input.trim();
    if trimmed.is_empty() { None } else { Some(trimmed.to_owned()) }
}

/// User-visible message for a failed request: server/transport detail behind
/// a fixed local prefix.
#[must_use]
pub fn failure_message(detail: &str) -> String {
    format!("Research failed: {detail}")
}
