use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::state::AppState;

/// GET /health
/// Returns a simple status object with service version and corpus size.
pub async fn health_handler(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "service": "cafe-rag-api",
        "context_blocks": state.context_blocks,
        "chat_enabled": state.completion.is_some()
    }))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;

    #[tokio::test]
    async fn test_health_reports_corpus_and_chat_status() {
        let state = AppState {
            completion: None,
            system_prompt: Arc::from(""),
            context_blocks: 3,
        };

        let Json(body) = health_handler(State(state)).await;

        assert_eq!(body["status"], "ok");
        assert_eq!(body["context_blocks"], 3);
        assert_eq!(body["chat_enabled"], false);
    }
}
