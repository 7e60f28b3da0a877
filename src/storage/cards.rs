//! Model card output
//!
//! Serializes canonical records to one JSON file per model, named after the
//! model. Existing cards are overwritten unconditionally (last write wins).

use crate::error::CardError;
use crate::types::MetadataRecord;
use std::fs;
use std::path::{Path, PathBuf};

/// Write a card for the record into `output_dir`, returning the card path.
///
/// The file is `<model_name>.json`, a flat field-to-string mapping with keys
/// in declaration order so cards diff cleanly between runs.
pub fn write_card(output_dir: &Path, record: &MetadataRecord) -> Result<PathBuf, CardError> {
    let path = output_dir.join(format!("{}.json", record.model_name));

    let json = serde_json::to_string_pretty(record)
        .map_err(|e| CardError::Write(format!("Failed to serialize card: {e}")))?;
    fs::write(&path, json).map_err(|e| CardError::Write(format!("{}: {}", path.display(), e)))?;

    tracing::info!("Model card for {} saved to {}", record.model_name, path.display());
    Ok(path)
}

/// Verify the output directory exists and accepts writes.
///
/// Run once before a batch: an unwritable output directory would fail every
/// artifact, so it aborts the whole run up front.
pub fn ensure_writable(output_dir: &Path) -> Result<(), CardError> {
    if !output_dir.is_dir() {
        return Err(CardError::Write(format!(
            "output directory does not exist: {}",
            output_dir.display()
        )));
    }

    let probe = output_dir.join(".cardrs-write-probe");
    fs::write(&probe, b"")
        .map_err(|e| CardError::Write(format!("{}: {}", output_dir.display(), e)))?;
    let _ = fs::remove_file(&probe);
    Ok(())
}
