use super::*;
use crate::net::types::{ResearchData, ResearchResponse};

fn empty_response() -> ResearchResponse {
    ResearchResponse { research: ResearchData::default(), sources: vec![] }
}

// =============================================================
// status transitions
// =============================================================

#[test]
fn default_state_is_idle_with_nothing_visible() {
    let state = ResearchState::default();
    assert_eq!(state.status, PromptStatus::Idle);
    assert!(state.result.is_none());
    assert!(state.error.is_none());
    assert!(!state.is_loading());
}

#[test]
fn begin_clears_prior_result_and_error() {
    let mut state = ResearchState::default();
    state.succeed(empty_response());
    state.begin();
    assert_eq!(state.status, PromptStatus::Loading);
    assert!(state.result.is_none());
    assert!(state.error.is_none());

    state.fail("boom");
    state.begin();
    assert!(state.error.is_none());
    assert!(state.is_loading());
}

#[test]
fn succeed_stores_result_and_reenables_control() {
    let mut state = ResearchState::default();
    state.begin();
    state.succeed(empty_response());
    assert_eq!(state.status, PromptStatus::Success);
    assert!(state.result.is_some());
    assert!(state.error.is_none());
    assert!(!state.is_loading());
}

#[test]
fn fail_shows_error_and_hides_results() {
    let mut state = ResearchState::default();
    state.begin();
    state.succeed(empty_response());
    state.begin();
    state.fail("server said no");
    assert_eq!(state.status, PromptStatus::Error);
    assert_eq!(state.error.as_deref(), Some("server said no"));
    assert!(state.result.is_none(), "results stay hidden on failure");
    assert!(!state.is_loading(), "control is re-enabled after failure");
}

// =============================================================
// prompt validation
// =============================================================

#[test]
fn empty_and_whitespace_prompts_are_rejected_locally() {
    assert_eq!(normalized_prompt(""), None);
    assert_eq!(normalized_prompt("   \t\n"), None);
}

#[test]
fn valid_prompt_is_trimmed() {
    assert_eq!(normalized_prompt("  Test  ").as_deref(), Some("Test"));
}

#[test]
fn failure_message_adds_fixed_prefix() {
    assert_eq!(failure_message("timed out"), "Research failed: timed out");
}
