//! Prompt input row with a status-aware submit button.

use leptos::prelude::*;

use crate::state::research::{PromptStatus, ResearchState};

/// Input line plus the single trigger control. The button is disabled while
/// a request is in flight (the only guard against duplicate submissions)
/// and its label and icon revert once the request settles.
#[component]
pub(crate) fn ResearchPromptBar(
    prompt_input: RwSignal<String>,
    state: RwSignal<ResearchState>,
    on_submit: Callback<()>,
) -> impl IntoView {
    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Enter" && !ev.shift_key() {
            ev.prevent_default();
            on_submit.run(());
        }
    };

    view! {
        <div class="research-page__prompt-bar">
            <input
                class="research-page__input"
                type="text"
                placeholder="What should I research?"
                prop:value=move || prompt_input.get()
                on:input=move |ev| prompt_input.set(event_target_value(&ev))
                on:keydown=on_keydown
            />
            <button
                class="btn btn--primary research-page__submit"
                disabled=move || state.get().is_loading()
                on:click=move |_| on_submit.run(())
            >
                {move || match state.get().status {
                    PromptStatus::Loading => view! {
                        <>
                            <span class="research-page__spinner" aria-hidden="true"></span>
                            "Researching..."
                        </>
                    }
                    .into_any(),
                    PromptStatus::Idle | PromptStatus::Success | PromptStatus::Error => view! {
                        <>
                            <svg class="research-page__submit-icon" viewBox="0 0 20 20" aria-hidden="true">
                                <circle cx="8.5" cy="8.5" r="5.5"></circle>
                                <line x1="12.5" y1="12.5" x2="17" y2="17"></line>
                            </svg>
                            "Research"
                        </>
                    }
                    .into_any(),
                }}
            </button>
        </div>
    }
}
