//! Remote metadata registry
//!
//! The merge pipeline only needs a lookup by author and model name. "No entry
//! for this model" is a normal outcome and flows into the merge as an absent
//! remote record; transport and auth failures are [`CardError::Lookup`] and
//! degrade the artifact to local-only metadata.

use crate::error::CardError;
use crate::types::MetadataRecord;
use async_trait::async_trait;

pub mod huggingface;

pub use huggingface::HubRegistry;

/// Result of a registry lookup
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupOutcome {
    /// The registry has an entry for this model
    Found(MetadataRecord),
    /// The registry answered cleanly but has no such model
    NotFound,
}

/// Remote metadata source queried by author/model-name pair
#[async_trait]
pub trait RegistryLookup: Send + Sync {
    async fn lookup(&self, author: &str, model_name: &str)
        -> Result<LookupOutcome, CardError>;
}
