use std::path::Path;

use tracing::{debug, info, warn};

use crate::corpus::discovery::discover;
use crate::corpus::render::render_file;

const BLOCK_SEPARATOR: &str = "\n\n";

/// The rendered corpus, built once at startup.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CorpusContext {
    pub text: String,
    pub files_scanned: usize,
    pub blocks_loaded: usize,
}

/// Renders every corpus file under `root_dir` into a single context string.
///
/// Never fails: unreadable, malformed or unrecognized files are skipped, and
/// an unreadable directory yields an empty context.
pub fn load_context(root_dir: &Path) -> CorpusContext {
    info!("Scanning directory for JSON files: {}", root_dir.display());

    let paths = match discover(root_dir) {
        Ok(paths) => paths,
        Err(e) => {
            warn!("No corpus loaded: {e}");
            return CorpusContext::default();
        }
    };

    let blocks: Vec<String> = paths
        .iter()
        .filter_map(|path| match render_file(path) {
            Ok(Some(block)) if !block.is_empty() => Some(block),
            Ok(_) => {
                debug!("Ignoring {}: not an interview or survey file", path.display());
                None
            }
            Err(e) => {
                warn!("Skipping file: {e}");
                None
            }
        })
        .collect();

    info!(
        "Loaded {} JSON context blocks from {} files",
        blocks.len(),
        paths.len()
    );

    CorpusContext {
        text: blocks.join(BLOCK_SEPARATOR),
        files_scanned: paths.len(),
        blocks_loaded: blocks.len(),
    }
}
