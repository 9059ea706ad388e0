use std::path::PathBuf;

use anyhow::{Context, Result};

/// Application configuration loaded from environment variables (and `.env`).
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory scanned for corpus JSON files. Defaults to the working directory.
    pub corpus_dir: PathBuf,
    /// Missing or empty leaves the server up with chat disabled.
    pub google_api_key: Option<String>,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let corpus_dir = match optional_env("CORPUS_DIR") {
            Some(dir) => PathBuf::from(dir),
            None => std::env::current_dir().context("Cannot determine working directory")?,
        };

        Ok(Config {
            corpus_dir,
            google_api_key: optional_env("GOOGLE_API_KEY"),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "5000".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

fn optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}
