mod llm;
mod routes;
mod services;
mod state;

use std::sync::Arc;

use crate::llm::LlmGenerate;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let port: u16 = std::env::var("PORT")
        .unwrap_or_else(|_| "3000".into())
        .parse()
        .expect("invalid PORT");

    // Initialize LLM client (non-fatal: research disabled if config missing).
    let llm: Option<Arc<dyn LlmGenerate>> = match llm::GeminiClient::from_env() {
        Ok(client) => {
            tracing::info!(model = client.model(), "Gemini client initialized");
            Some(Arc::new(client))
        }
        Err(e) => {
            tracing::warn!(error = %e, "Gemini client not configured — research disabled");
            None
        }
    };

    let state = state::AppState::new(llm);

    let app = routes::app(state).expect("router init failed");
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .expect("failed to bind");

    tracing::info!(%port, "scout listening");
    axum::serve(listener, app).await.expect("server failed");
}
