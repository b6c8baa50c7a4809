//! Reactive page state provided via Leptos context.

pub mod research;
