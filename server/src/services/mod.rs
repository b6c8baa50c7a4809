//! Service layer — domain logic between routes and the LLM client.

pub mod research;
