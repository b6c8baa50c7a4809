//! Networking modules for the research HTTP API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` handles the REST call, `types` defines the shared wire schema.

pub mod api;
pub mod types;
