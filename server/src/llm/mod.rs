//! LLM — Gemini client behind a mockable generation trait.
//!
//! DESIGN
//! ======
//! One provider, one operation: a grounded, schema-constrained
//! `generateContent` call. [`GeminiClient`] is configured from environment
//! variables; the [`LlmGenerate`] trait is the seam the research service
//! depends on, so tests swap in a mock instead of the network.

pub mod config;
pub mod gemini;
pub mod types;

pub use gemini::GeminiClient;
pub use types::{GroundedAnswer, GroundingSource, LlmError, LlmGenerate};
