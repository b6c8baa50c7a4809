//! Research page: prompt capture, submission, and result/error regions.

use leptos::prelude::*;

use crate::net::api;
use crate::pages::research_prompt_bar::ResearchPromptBar;
use crate::pages::research_results::ResearchResults;
use crate::state::research::{
    EMPTY_PROMPT_MESSAGE, ResearchState, failure_message, normalized_prompt,
};

/// Research page: one prompt, one request, one rendered outcome.
///
/// Submitting while a request is in flight is a no-op (the trigger control
/// is disabled). Each new submission clears the visible result and error
/// regions before entering the loading state.
#[component]
pub fn ResearchPage() -> impl IntoView {
    let state = expect_context::<RwSignal<ResearchState>>();
    let prompt_input = RwSignal::new(String::new());

    let do_submit = move || {
        if state.get_untracked().is_loading() {
            return;
        }

        let Some(prompt) = normalized_prompt(&prompt_input.get_untracked()) else {
            state.update(|st| st.fail(EMPTY_PROMPT_MESSAGE));
            return;
        };

        state.update(|st| st.begin());
        leptos::task::spawn_local(async move {
            match api::submit_research(&prompt).await {
                Ok(response) => state.update(|st| st.succeed(response)),
                Err(detail) => {
                    #[cfg(feature = "hydrate")]
                    log::error!("research request failed: {detail}");
                    state.update(|st| st.fail(failure_message(&detail)));
                }
            }
        });
    };

    let on_submit = Callback::new(move |()| do_submit());

    view! {
        <div class="research-page">
            <header class="research-page__header">
                <h1>"Scout"</h1>
                <p class="research-page__tagline">
                    "AI-grounded technology research with cited sources."
                </p>
            </header>

            <ResearchPromptBar prompt_input state on_submit/>

            {move || {
                state
                    .get()
                    .error
                    .map(|message| view! { <div class="research-page__error" role="alert">{message}</div> })
            }}

            {move || {
                state
                    .get()
                    .is_loading()
                    .then(|| view! { <div class="research-page__loading">"Researching..."</div> })
            }}

            {move || {
                state
                    .get()
                    .result
                    .map(|response| view! { <ResearchResults response/> })
            }}
        </div>
    }
}
