//! Shared type definitions
//!
//! This module contains the data types shared across the pipeline stages.

pub mod record;

pub use record::{MetadataRecord, GGUF_FORMAT, UNKNOWN};
