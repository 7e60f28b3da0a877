//! Model card record
//!
//! Defines the canonical metadata record that flows through the pipeline and
//! ends up serialized as a model card.

use serde::{Deserialize, Serialize};

/// Placeholder for a field no source has resolved yet.
///
/// Distinct from an empty string: an empty description parsed from a README is
/// a concrete value and is never re-resolved.
pub const UNKNOWN: &str = "Unknown";

/// Classification tag for the artifact's binary format
pub const GGUF_FORMAT: &str = "GGUF";

/// Everything known about one model artifact.
///
/// `author` and `model_name` are structural identifiers derived from the
/// filesystem layout and are never the [`UNKNOWN`] sentinel. The remaining
/// fields start as the sentinel and get resolved by enrichment and merge.
///
/// Field declaration order is the serialization order of the card file, so it
/// must stay stable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetadataRecord {
    /// Publishing entity, from the parent directory name
    pub author: String,
    /// Artifact name within the author's namespace
    pub model_name: String,
    /// Free-text description
    pub description: String,
    /// License identifier
    pub license: String,
    /// Binary format tag
    pub format: String,
    /// Parameter count or textual scale descriptor
    pub parameters: String,
    /// Model architecture family
    pub architecture: String,
}

/// Names of the fields subject to merge, in serialization order.
/// `author` and `model_name` are excluded: they always come from the
/// filesystem scan.
pub const MERGE_FIELDS: [&str; 5] = [
    "description",
    "license",
    "format",
    "parameters",
    "architecture",
];

impl MetadataRecord {
    /// Create a record knowing only the structural identifiers
    pub fn from_identity(author: impl Into<String>, model_name: impl Into<String>) -> Self {
        Self {
            author: author.into(),
            model_name: model_name.into(),
            description: UNKNOWN.to_string(),
            license: UNKNOWN.to_string(),
            format: UNKNOWN.to_string(),
            parameters: UNKNOWN.to_string(),
            architecture: UNKNOWN.to_string(),
        }
    }

    /// Read a mergeable field by name. Crate-internal: the merge loop only
    /// ever passes names from [`MERGE_FIELDS`], so other names are
    /// unreachable.
    pub(crate) fn field(&self, name: &str) -> &str {
        match name {
            "description" => &self.description,
            "license" => &self.license,
            "format" => &self.format,
            "parameters" => &self.parameters,
            "architecture" => &self.architecture,
            other => unreachable!("not a mergeable field: {other}"),
        }
    }

    /// Write a mergeable field by name
    pub(crate) fn set_field(&mut self, name: &str, value: String) {
        match name {
            "description" => self.description = value,
            "license" => self.license = value,
            "format" => self.format = value,
            "parameters" => self.parameters = value,
            "architecture" => self.architecture = value,
            other => unreachable!("not a mergeable field: {other}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_identity() {
        let record = MetadataRecord::from_identity("bob", "tinyllama");
        assert_eq!(record.author, "bob");
        assert_eq!(record.model_name, "tinyllama");
        assert_eq!(record.description, UNKNOWN);
        assert_eq!(record.license, UNKNOWN);
        assert_eq!(record.parameters, UNKNOWN);
        assert_eq!(record.architecture, UNKNOWN);
    }

    #[test]
    fn test_field_accessors_cover_merge_fields() {
        let mut record = MetadataRecord::from_identity("bob", "tinyllama");
        for name in MERGE_FIELDS {
            record.set_field(name, format!("value-{name}"));
            assert_eq!(record.field(name), format!("value-{name}"));
        }
    }

    #[test]
    fn test_serialization_key_order() {
        let record = MetadataRecord::from_identity("bob", "tinyllama");
        let json = serde_json::to_string_pretty(&record).expect("Failed to serialize");
        let author_pos = json.find("\"author\"").unwrap();
        let name_pos = json.find("\"model_name\"").unwrap();
        let arch_pos = json.find("\"architecture\"").unwrap();
        assert!(author_pos < name_pos);
        assert!(name_pos < arch_pos);
    }

    #[test]
    fn test_roundtrip() {
        let record = MetadataRecord::from_identity("bob", "tinyllama");
        let json = serde_json::to_string(&record).expect("Failed to serialize");
        let back: MetadataRecord = serde_json::from_str(&json).expect("Failed to deserialize");
        assert_eq!(record, back);
    }
}
