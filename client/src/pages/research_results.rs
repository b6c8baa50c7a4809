//! Research result rendering: category sections and the sources panel.
//!
//! ARCHITECTURE
//! ============
//! Pure view-model helpers (`category_sections`, `source_entries`) own the
//! ordering and fallback rules so rendering stays a dumb map and the
//! behavior is testable without a DOM.

#[cfg(test)]
#[path = "research_results_test.rs"]
mod research_results_test;

use leptos::prelude::*;

use crate::net::types::{ResearchData, ResearchItem, ResearchResponse, Source};

/// Label used for a source whose title is absent.
pub(crate) const FALLBACK_SOURCE_TITLE: &str = "No Title Available";

// =============================================================
// VIEW MODELS
// =============================================================

/// Which of the three fixed categories a section renders; picks the icon.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum CategoryKind {
    AiApiConcepts,
    UiFrameworks,
    DesignPrinciples,
}

pub(crate) struct CategorySection {
    pub kind: CategoryKind,
    pub heading: &'static str,
    pub items: Vec<ResearchItem>,
}

/// The three sections in fixed display order, one per category, kept even
/// when empty. Item order inside a section is wire order.
pub(crate) fn category_sections(data: &ResearchData) -> Vec<CategorySection> {
    vec![
        CategorySection {
            kind: CategoryKind::AiApiConcepts,
            heading: "AI API Concepts",
            items: data.ai_api_concepts.clone(),
        },
        CategorySection {
            kind: CategoryKind::UiFrameworks,
            heading: "UI Frameworks",
            items: data.ui_frameworks.clone(),
        },
        CategorySection {
            kind: CategoryKind::DesignPrinciples,
            heading: "Design Principles",
            items: data.design_principles.clone(),
        },
    ]
}

pub(crate) struct SourceEntry {
    /// `[1]`, `[2]`, … in wire order.
    pub marker: String,
    pub title: String,
    pub uri: String,
}

/// Numbered source links in wire order, with the placeholder title applied
/// where the server sent none.
pub(crate) fn source_entries(sources: &[Source]) -> Vec<SourceEntry> {
    sources
        .iter()
        .enumerate()
        .map(|(index, source)| SourceEntry {
            marker: format!("[{}]", index + 1),
            title: source
                .title
                .clone()
                .unwrap_or_else(|| FALLBACK_SOURCE_TITLE.to_owned()),
            uri: source.uri.clone(),
        })
        .collect()
}

// =============================================================
// COMPONENTS
// =============================================================

/// Full results region: the three category sections plus the sources panel.
/// The sources panel disappears entirely when there are no sources.
#[component]
pub fn ResearchResults(response: ResearchResponse) -> impl IntoView {
    let sections = category_sections(&response.research);
    let sources = source_entries(&response.sources);

    view! {
        <div class="research-results">
            {sections
                .into_iter()
                .map(|section| view! { <CategorySectionView section/> })
                .collect::<Vec<_>>()}
            {(!sources.is_empty())
                .then(|| view! { <SourcesPanel sources/> })}
        </div>
    }
}

#[component]
fn CategorySectionView(section: CategorySection) -> impl IntoView {
    view! {
        <section class="research-results__section">
            <h2 class="research-results__heading">
                <CategoryIcon kind=section.kind/>
                {section.heading}
            </h2>
            <div class="research-results__cards">
                {section
                    .items
                    .into_iter()
                    .map(|item| {
                        view! {
                            <article class="research-card">
                                <h3 class="research-card__name">{item.name}</h3>
                                <p class="research-card__summary">{item.summary}</p>
                            </article>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
        </section>
    }
}

#[component]
fn SourcesPanel(sources: Vec<SourceEntry>) -> impl IntoView {
    view! {
        <aside class="research-results__sources">
            <h2 class="research-results__heading">"Sources"</h2>
            <ul class="research-results__source-list">
                {sources
                    .into_iter()
                    .map(|entry| {
                        view! {
                            <li class="research-results__source">
                                <span class="research-results__source-marker">{entry.marker}</span>
                                <a
                                    class="research-results__source-link"
                                    href=entry.uri
                                    target="_blank"
                                    rel="noopener noreferrer"
                                >
                                    {entry.title}
                                </a>
                            </li>
                        }
                    })
                    .collect::<Vec<_>>()}
            </ul>
        </aside>
    }
}

#[component]
fn CategoryIcon(kind: CategoryKind) -> impl IntoView {
    match kind {
        CategoryKind::AiApiConcepts => view! {
            <svg class="research-results__icon" viewBox="0 0 20 20" aria-hidden="true">
                <rect x="5" y="5" width="10" height="10" rx="1.5"></rect>
                <line x1="10" y1="1.5" x2="10" y2="5"></line>
                <line x1="10" y1="15" x2="10" y2="18.5"></line>
                <line x1="1.5" y1="10" x2="5" y2="10"></line>
                <line x1="15" y1="10" x2="18.5" y2="10"></line>
            </svg>
        }
        .into_any(),
        CategoryKind::UiFrameworks => view! {
            <svg class="research-results__icon" viewBox="0 0 20 20" aria-hidden="true">
                <rect x="2.5" y="2.5" width="15" height="15" rx="1.5"></rect>
                <line x1="2.5" y1="7.5" x2="17.5" y2="7.5"></line>
                <line x1="7.5" y1="7.5" x2="7.5" y2="17.5"></line>
            </svg>
        }
        .into_any(),
        CategoryKind::DesignPrinciples => view! {
            <svg class="research-results__icon" viewBox="0 0 20 20" aria-hidden="true">
                <path d="M3.5 16.5 5 12l8.5-8.5a1.4 1.4 0 0 1 2 0l1 1a1.4 1.4 0 0 1 0 2L8 15l-4.5 1.5Z"></path>
            </svg>
        }
        .into_any(),
    }
}
