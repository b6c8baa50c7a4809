//! REST API helpers for communicating with the server.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stub returning an error since the endpoint is only
//! meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get a single `Result<_, String>`: the server's structured `error`
//! text when the body carries one, otherwise a generic status message or the
//! transport/parse error text. The page converts that one string into the
//! visible failure message.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::ResearchResponse;

pub const RESEARCH_ENDPOINT: &str = "/api/research";

#[cfg(any(test, feature = "hydrate"))]
fn research_failed_message(status: u16) -> String {
    format!("research request failed: {status}")
}

/// Pick the user-facing message for a non-ok response: the body's `error`
/// field when parseable, a generic status message otherwise.
#[cfg(any(test, feature = "hydrate"))]
fn error_from_body(status: u16, body: &str) -> String {
    #[derive(serde::Deserialize)]
    struct ErrorBody {
        error: String,
    }
    serde_json::from_str::<ErrorBody>(body)
        .map(|b| b.error)
        .unwrap_or_else(|_| research_failed_message(status))
}

/// Submit a research prompt via `POST /api/research`.
///
/// # Errors
///
/// Returns the user-facing error text if the request fails, the server
/// answers non-2xx, or the body cannot be parsed.
pub async fn submit_research(prompt: &str) -> Result<ResearchResponse, String> {
    #[cfg(feature = "hydrate")]
    {
        use super::types::ResearchRequest;

        let resp = gloo_net::http::Request::post(RESEARCH_ENDPOINT)
            .json(&ResearchRequest { prompt: prompt.to_owned() })
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;

        if !resp.ok() {
            let body = resp.text().await.unwrap_or_default();
            return Err(error_from_body(resp.status(), &body));
        }

        resp.json::<ResearchResponse>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = prompt;
        Err("not available on server".to_owned())
    }
}
