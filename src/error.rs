//! Error types for the card generation pipeline
//!
//! Per-artifact errors (invalid path, lookup failure, unresolved conflict) are
//! recoverable: the artifact is skipped or degraded and the batch continues.
//! Write errors abort the batch since they would recur for every artifact.

use crate::storage::StorageError;
use thiserror::Error;

/// Errors raised while resolving and writing model cards
#[derive(Debug, Error)]
pub enum CardError {
    /// The artifact path does not follow the `author/modelname` layout
    #[error("Invalid artifact path: {0}")]
    InvalidPath(String),

    /// The registry was unreachable or rejected the request.
    /// Distinct from a clean "not found" response, which is not an error.
    #[error("Registry lookup failed: {0}")]
    Lookup(String),

    /// The disambiguation strategy failed to pick a value
    #[error("Conflict resolution failed for field '{field}': {reason}")]
    ConflictResolution { field: String, reason: String },

    /// The card file could not be written
    #[error("Failed to write card: {0}")]
    Write(String),

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),
}
