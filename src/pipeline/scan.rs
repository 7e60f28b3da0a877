//! Artifact discovery
//!
//! Finds .gguf files under a root directory. The scan only produces candidate
//! paths; all metadata interpretation happens in the extraction stage.

use crate::error::CardError;
use glob::{glob, Pattern};
use std::path::Path;

/// List every `.gguf` file under `root`, recursively, as normalized path
/// strings. Order follows the glob walk, which is stable for a given tree.
/// The root is escaped so directory names containing glob metacharacters
/// (`[`, `?`, `*`) scan literally.
pub fn scan_models(root: &Path) -> Result<Vec<String>, CardError> {
    let pattern = format!("{}/**/*.gguf", Pattern::escape(&root.to_string_lossy()));
    let entries = glob(&pattern)
        .map_err(|e| CardError::InvalidPath(format!("bad scan pattern: {e}")))?;

    let mut artifacts = Vec::new();
    for entry in entries {
        match entry {
            Ok(path) => artifacts.push(path.to_string_lossy().replace('\\', "/")),
            Err(e) => tracing::warn!("Skipping unreadable entry during scan: {}", e),
        }
    }

    tracing::debug!("Found {} artifact(s) under {}", artifacts.len(), root.display());
    Ok(artifacts)
}
