use std::fs;
use std::path::{Path, PathBuf};

use tracing::warn;

use crate::corpus::LoadError;

const JSON_EXTENSION: &str = "json";

/// File-name fragments that mark dependency manifests (`package.json`,
/// `package-lock.json`, `*.lock.json`). Plain substring match.
const EXCLUDED_NAME_FRAGMENTS: [&str; 2] = ["package", "lock"];

/// Lists the corpus files directly inside `root_dir` (no recursion), sorted
/// by file name.
pub fn discover(root_dir: &Path) -> Result<Vec<PathBuf>, LoadError> {
    let entries = fs::read_dir(root_dir).map_err(|source| LoadError::Discovery {
        path: root_dir.to_path_buf(),
        source,
    })?;

    let mut paths: Vec<PathBuf> = entries
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry.path()),
            Err(e) => {
                warn!("Skipping unreadable entry in {}: {e}", root_dir.display());
                None
            }
        })
        .filter(|path| is_corpus_file(path) && path.is_file())
        .collect();

    paths.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(paths)
}

/// Matches what a `*.json` shell glob would pick up, minus manifest files.
fn is_corpus_file(path: &Path) -> bool {
    let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
        return false;
    };
    if name.starts_with('.') {
        return false;
    }
    if path.extension().and_then(|e| e.to_str()) != Some(JSON_EXTENSION) {
        return false;
    }
    !EXCLUDED_NAME_FRAGMENTS
        .iter()
        .any(|fragment| name.contains(fragment))
}
