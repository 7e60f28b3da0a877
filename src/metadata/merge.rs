//! Metadata merge
//!
//! Combines a registry record with locally derived metadata into one canonical
//! record. Agreement and sentinel cases resolve deterministically; genuine
//! conflicts go through a pluggable [`ConflictResolver`] so headless and
//! interactive frontends can share the same merge algorithm.

use crate::error::CardError;
use crate::types::{record::MERGE_FIELDS, MetadataRecord, UNKNOWN};
use thiserror::Error;

/// A disambiguation strategy failed to produce a value
#[derive(Debug, Error)]
#[error("{0}")]
pub struct ResolveError(pub String);

/// Picks a value when the registry and local metadata genuinely disagree.
///
/// Called once per conflicting field. Implementations must return
/// synchronously from the merger's point of view; an interactive
/// implementation may block on operator input internally.
pub trait ConflictResolver: Send + Sync {
    fn resolve(&self, field: &str, remote: &str, local: &str) -> Result<String, ResolveError>;
}

/// Headless default: the registry value wins every genuine conflict
pub struct RemoteWins;

impl ConflictResolver for RemoteWins {
    fn resolve(&self, _field: &str, remote: &str, _local: &str) -> Result<String, ResolveError> {
        Ok(remote.to_string())
    }
}

/// Headless alternative: locally derived values win every genuine conflict.
/// A sentinel local value still loses to the concrete remote one; no strategy
/// may prefer the sentinel over a concrete value.
pub struct LocalWins;

impl ConflictResolver for LocalWins {
    fn resolve(&self, _field: &str, remote: &str, local: &str) -> Result<String, ResolveError> {
        if local == UNKNOWN {
            return Ok(remote.to_string());
        }
        Ok(local.to_string())
    }
}

/// Merge a registry record into the local record for the same artifact.
///
/// `author` and `model_name` are taken from `local` unconditionally; the
/// filesystem scan is authoritative for artifact identity. For every other
/// field: agreement keeps the shared value, a sentinel on the remote side
/// loses to the local value, and a concrete disagreement is handed to the
/// resolver. With `remote` absent the local record is returned untouched.
pub fn merge(
    remote: Option<&MetadataRecord>,
    local: &MetadataRecord,
    resolver: &dyn ConflictResolver,
) -> Result<MetadataRecord, CardError> {
    let mut canonical = local.clone();

    let remote = match remote {
        Some(remote) => remote,
        None => return Ok(canonical),
    };

    for field in MERGE_FIELDS {
        let remote_value = remote.field(field);
        let local_value = local.field(field);

        if remote_value == local_value || remote_value == UNKNOWN {
            continue;
        }

        let chosen = resolver
            .resolve(field, remote_value, local_value)
            .map_err(|e| CardError::ConflictResolution {
                field: field.to_string(),
                reason: e.to_string(),
            })?;
        canonical.set_field(field, chosen);
    }

    Ok(canonical)
}
