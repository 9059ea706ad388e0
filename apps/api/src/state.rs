use std::sync::Arc;

use crate::llm_client::CompletionClient;

/// Shared application state injected into all route handlers via Axum extractors.
/// Built once in `main`; read-only afterwards.
#[derive(Clone)]
pub struct AppState {
    /// `None` when no API key was configured. `/chat` then answers 500.
    pub completion: Option<Arc<dyn CompletionClient>>,
    /// System prompt with the corpus context embedded, sent with every chat call.
    pub system_prompt: Arc<str>,
    /// Number of corpus blocks in the context, reported by `/health`.
    pub context_blocks: usize,
}
