//! Corpus loading: turns the interview and survey JSON files in the corpus
//! directory into one plain-text context for the system prompt.
//!
//! Loading runs once at startup. Every per-file failure is logged and the file
//! contributes nothing; building the context itself never fails.

pub mod aggregate;
pub mod discovery;
pub mod document;
pub mod render;

use std::path::PathBuf;

use thiserror::Error;

/// Why a single corpus file (or the corpus directory) produced no text.
///
/// A file whose JSON shape is simply not recognized is not an error; see
/// [`document::Document::Unrecognized`].
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("cannot list corpus directory {}: {source}", .path.display())]
    Discovery {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("cannot read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid JSON in {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("cannot render {}: {reason}", .path.display())]
    Render { path: PathBuf, reason: String },
}
