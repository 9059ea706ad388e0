mod chat;
mod config;
mod corpus;
mod errors;
mod llm_client;
mod routes;
mod state;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::chat::prompts::build_system_prompt;
use crate::config::Config;
use crate::corpus::aggregate::load_context;
use crate::llm_client::{CompletionClient, GeminiClient};
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Cafe RAG API v{}", env!("CARGO_PKG_VERSION"));

    // Build the corpus context once; it is never reloaded
    let corpus = load_context(&config.corpus_dir);
    let system_prompt: Arc<str> = build_system_prompt(&corpus.text).into();
    info!(
        "Context ready: {} blocks from {} files ({} bytes)",
        corpus.blocks_loaded,
        corpus.files_scanned,
        corpus.text.len()
    );

    // Initialize LLM client
    let completion = build_completion_client(&config);

    let state = AppState {
        completion,
        system_prompt,
        context_blocks: corpus.blocks_loaded,
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// A missing key or a client that fails to build leaves chat disabled rather
/// than stopping the server.
fn build_completion_client(config: &Config) -> Option<Arc<dyn CompletionClient>> {
    let Some(api_key) = config.google_api_key.clone() else {
        error!("GOOGLE_API_KEY is missing. Chat will not work.");
        return None;
    };

    match GeminiClient::new(api_key) {
        Ok(client) => {
            info!("LLM client initialized (model: {})", llm_client::MODEL);
            Some(Arc::new(client))
        }
        Err(e) => {
            error!("Error initializing Gemini client: {e}");
            None
        }
    }
}
