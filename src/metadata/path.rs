//! Path-based metadata extraction
//!
//! Derives the baseline record for an artifact purely from its path, using the
//! `<...>/author/modelname` layout convention. No filesystem access.

use crate::error::CardError;
use crate::types::{MetadataRecord, GGUF_FORMAT};

/// Build a baseline record from an artifact path.
///
/// The author is the second-to-last path segment and the model name is the
/// last segment with everything after the first `.` stripped, so
/// `./bob/tinyllama.Q4_K_M.gguf` yields author `bob`, model name `tinyllama`.
/// `format` is set to the GGUF tag; every other field starts as the sentinel.
pub fn extract_from_path(path: &str) -> Result<MetadataRecord, CardError> {
    // Tolerate Windows-style separators from upstream scanners
    let normalized = path.replace('\\', "/");
    let trimmed = normalized.trim_matches('/');

    let parts: Vec<&str> = trimmed.split('/').collect();
    if parts.len() < 3 {
        return Err(CardError::InvalidPath(format!(
            "path must be in the form './author/modelname': {path}"
        )));
    }

    let author = parts[parts.len() - 2];
    let model_name = parts[parts.len() - 1]
        .split('.')
        .next()
        .unwrap_or_default();

    if author.is_empty() || model_name.is_empty() {
        return Err(CardError::InvalidPath(format!(
            "empty author or model name segment: {path}"
        )));
    }

    let mut record = MetadataRecord::from_identity(author, model_name);
    record.format = GGUF_FORMAT.to_string();
    Ok(record)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::UNKNOWN;

    #[test]
    fn test_extract_relative_path() {
        let record = extract_from_path("./bob/tinyllama").unwrap();
        assert_eq!(record.author, "bob");
        assert_eq!(record.model_name, "tinyllama");
        assert_eq!(record.format, GGUF_FORMAT);
    }

    #[test]
    fn test_extract_strips_extension_at_first_dot() {
        let record = extract_from_path("/models/bob/tinyllama.Q4_K_M.gguf").unwrap();
        assert_eq!(record.author, "bob");
        assert_eq!(record.model_name, "tinyllama");
    }

    #[test]
    fn test_identifiers_never_sentinel() {
        let record = extract_from_path("/data/models/thebloke/llama-2-7b.gguf").unwrap();
        assert_ne!(record.author, UNKNOWN);
        assert_ne!(record.model_name, UNKNOWN);
        // The non-structural fields start unresolved
        assert_eq!(record.description, UNKNOWN);
        assert_eq!(record.license, UNKNOWN);
        assert_eq!(record.parameters, UNKNOWN);
        assert_eq!(record.architecture, UNKNOWN);
    }

    #[test]
    fn test_too_few_segments() {
        assert!(matches!(
            extract_from_path("bob/tinyllama"),
            Err(CardError::InvalidPath(_))
        ));
        assert!(matches!(
            extract_from_path("/tinyllama.gguf"),
            Err(CardError::InvalidPath(_))
        ));
        assert!(matches!(extract_from_path(""), Err(CardError::InvalidPath(_))));
    }

    #[test]
    fn test_windows_separators() {
        let record = extract_from_path("C:\\models\\bob\\tinyllama.gguf").unwrap();
        assert_eq!(record.author, "bob");
        assert_eq!(record.model_name, "tinyllama");
    }
}
