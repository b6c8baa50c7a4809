//! Shared wire DTOs for the client/server boundary.
//!
//! DESIGN
//! ======
//! These types intentionally mirror the server's research payloads so serde
//! round-trips stay lossless. Wire field names are camelCase
//! (`aiApiConcepts`, `uiFrameworks`, `designPrinciples`), fixed by the
//! provider-side response schema.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Body of `POST /api/research`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResearchRequest {
    /// Free-text description of the desired research subject.
    pub prompt: String,
}

/// One recommended resource: a name plus a short rationale.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResearchItem {
    pub name: String,
    pub summary: String,
}

/// The three fixed category lists. Insertion order as returned by the
/// server; never deduplicated or sorted locally.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResearchData {
    pub ai_api_concepts: Vec<ResearchItem>,
    pub ui_frameworks: Vec<ResearchItem>,
    pub design_principles: Vec<ResearchItem>,
}

/// A citation returned alongside the generated content.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Source {
    /// Link target.
    pub uri: String,
    /// Human-readable title; rendered with a fixed placeholder when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

/// Success payload of `POST /api/research`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResearchResponse {
    pub research: ResearchData,
    pub sources: Vec<Source>,
}
