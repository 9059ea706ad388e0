//! Axum route handlers for the chat API.

use axum::{extract::rejection::JsonRejection, extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::state::AppState;

/// Sampling temperature for every chat completion.
pub const CHAT_TEMPERATURE: f32 = 0.2;

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    pub message: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub response: String,
}

/// GET /
pub async fn handle_root() -> &'static str {
    "Gemini RAG Server is Running!"
}

/// POST /chat
///
/// Answers one question using the precomputed system prompt. No history is kept.
pub async fn handle_chat(
    State(state): State<AppState>,
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> Result<Json<ChatResponse>, AppError> {
    let completion = state.completion.as_ref().ok_or(AppError::NotConfigured)?;

    let Json(request) = payload.map_err(|rejection| AppError::Validation(rejection.body_text()))?;
    let message = request
        .message
        .filter(|m| !m.is_empty())
        .ok_or_else(|| AppError::Validation("No message provided".to_string()))?;

    let response = completion
        .complete(&state.system_prompt, CHAT_TEMPERATURE, &message)
        .await?;

    Ok(Json(ChatResponse { response }))
}
