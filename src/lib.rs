//! cardrs Library
//!
//! Core library for the cardrs model card generator: resolves metadata for
//! local GGUF artifacts from their path, sibling READMEs, and the Hugging
//! Face Hub, and writes one canonical card per model.

pub mod error;
pub mod metadata;
pub mod pipeline;
pub mod registry;
pub mod storage;
pub mod types;
