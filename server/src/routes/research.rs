//! Research endpoint.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Json;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::services::research::{self, ResearchError, ResearchResponse};
use crate::state::AppState;

/// Body of `POST /api/research`.
#[derive(Deserialize)]
pub struct ResearchRequest {
    /// Free-text description of the desired research subject.
    pub prompt: Option<String>,
}

/// JSON error payload; the client surfaces `error` verbatim.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

fn error_body(message: impl Into<String>) -> Json<ErrorBody> {
    Json(ErrorBody { error: message.into() })
}

/// `POST /api/research` — run one research request against the provider.
pub async fn run_research(
    State(state): State<AppState>,
    Json(body): Json<ResearchRequest>,
) -> Result<Json<ResearchResponse>, (StatusCode, Json<ErrorBody>)> {
    let prompt = body.prompt.as_deref().map(str::trim).unwrap_or_default();
    if prompt.is_empty() {
        return Err((StatusCode::BAD_REQUEST, error_body("Missing prompt in request data.")));
    }

    let Some(llm) = state.llm.as_ref() else {
        return Err((
            StatusCode::SERVICE_UNAVAILABLE,
            error_body("Server API Key is missing. Set GEMINI_API_KEY environment variable."),
        ));
    };

    match research::run_research(llm, prompt).await {
        Ok(response) => Ok(Json(response)),
        Err(err) => {
            warn!(error = %err, "research request failed");
            Err((research_error_to_status(&err), error_body(err.to_string())))
        }
    }
}

pub(crate) fn research_error_to_status(err: &ResearchError) -> StatusCode {
    match err {
        ResearchError::Llm(e) if e.is_timeout() => StatusCode::GATEWAY_TIMEOUT,
        ResearchError::Llm(_) | ResearchError::MalformedAnswer(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

#[cfg(test)]
#[path = "research_test.rs"]
mod tests;
