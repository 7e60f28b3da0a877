//! README enrichment
//!
//! Pulls a short description out of a README.md sitting next to the artifact,
//! when one exists. Absence of a README is expected and is not an error.

use crate::types::MetadataRecord;
use std::fs;
use std::path::Path;

/// Conventional documentation filename, sibling to the artifact
pub const README_FILENAME: &str = "README.md";

/// Maximum description length taken from a README first line
pub const MAX_DESCRIPTION_LEN: usize = 100;

const TRUNCATION_MARKER: &str = "...";

/// Set the record's description from the first line of a README file.
///
/// The line is capped at [`MAX_DESCRIPTION_LEN`] characters with a marker
/// appended when truncation occurred. An empty README yields an empty
/// description, which is a concrete value and will not be re-resolved during
/// merge. If the file is missing or has the wrong extension the record passes
/// through unchanged.
pub fn enrich_from_readme(readme_path: &Path, mut record: MetadataRecord) -> MetadataRecord {
    if !readme_path.exists() {
        return record;
    }
    if readme_path.extension().and_then(|e| e.to_str()) != Some("md") {
        return record;
    }

    match fs::read_to_string(readme_path) {
        Ok(content) => {
            let first_line = content.lines().next().unwrap_or("");
            record.description = truncate_description(first_line);
            tracing::debug!(
                "Enriched {}/{} from {}",
                record.author,
                record.model_name,
                readme_path.display()
            );
        }
        Err(e) => {
            tracing::warn!("Failed to read {}: {}", readme_path.display(), e);
        }
    }

    record
}

fn truncate_description(line: &str) -> String {
    if line.chars().count() > MAX_DESCRIPTION_LEN {
        let truncated: String = line.chars().take(MAX_DESCRIPTION_LEN).collect();
        format!("{truncated}{TRUNCATION_MARKER}")
    } else {
        line.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::UNKNOWN;
    use std::fs;

    fn base_record() -> MetadataRecord {
        MetadataRecord::from_identity("bob", "tinyllama")
    }

    #[test]
    fn test_absent_readme_passes_through() {
        let dir = tempfile::tempdir().unwrap();
        let record = enrich_from_readme(&dir.path().join("README.md"), base_record());
        assert_eq!(record.description, UNKNOWN);
    }

    #[test]
    fn test_first_line_becomes_description() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("README.md");
        fs::write(&path, "A tiny chat model\n\nLong body text here.").unwrap();

        let record = enrich_from_readme(&path, base_record());
        assert_eq!(record.description, "A tiny chat model");
    }

    #[test]
    fn test_long_first_line_truncated_with_marker() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("README.md");
        let line = "x".repeat(250);
        fs::write(&path, &line).unwrap();

        let record = enrich_from_readme(&path, base_record());
        assert_eq!(record.description.chars().count(), MAX_DESCRIPTION_LEN + 3);
        assert!(record.description.ends_with("..."));
    }

    #[test]
    fn test_empty_readme_yields_empty_description() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("README.md");
        fs::write(&path, "").unwrap();

        let record = enrich_from_readme(&path, base_record());
        // Empty is concrete, not the sentinel
        assert_eq!(record.description, "");
        assert_ne!(record.description, UNKNOWN);
    }

    #[test]
    fn test_wrong_extension_ignored() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("README.txt");
        fs::write(&path, "Not markdown").unwrap();

        let record = enrich_from_readme(&path, base_record());
        assert_eq!(record.description, UNKNOWN);
    }
}
