//! Document source: an ordered list of (identifier, raw text) pairs.
//!
//! The engine assigns vector positions by list order and never derives
//! an identifier from content, so the loader keeps the order stable.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::EngineError;

/// One corpus document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Document {
    pub id: String,
    pub text: String,
}

impl Document {
    pub fn new(id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
        }
    }
}

/// Read every `*.txt` file directly under `dir`.
///
/// Files are sorted by path so the document order, and with it every
/// vector position, is reproducible across runs. The id is the file
/// stem. Empty files are skipped with a warning; an empty directory
/// yields an empty corpus, which the engine handles as the degenerate
/// case rather than an error.
pub fn read_directory(dir: impl AsRef<Path>) -> Result<Vec<Document>, EngineError> {
    let mut paths: Vec<_> = fs::read_dir(dir.as_ref())?
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| {
            path.is_file() && path.extension().map_or(false, |ext| ext == "txt")
        })
        .collect();
    paths.sort();

    let mut documents = Vec::with_capacity(paths.len());
    for path in paths {
        let text = fs::read_to_string(&path)?;
        if text.trim().is_empty() {
            warn!(path = %path.display(), "skipping empty document");
            continue;
        }
        let id = path
            .file_stem()
            .and_then(|stem| stem.to_str())
            .unwrap_or("unknown")
            .to_string();
        documents.push(Document { id, text });
    }
    debug!(count = documents.len(), "corpus loaded");
    Ok(documents)
}
