//! Metadata resolution
//!
//! The stages that turn a discovered artifact path into a canonical record:
//! path extraction, README enrichment, and the conflict-resolving merge.

pub mod merge;
pub mod path;
pub mod readme;

pub use merge::{merge, ConflictResolver, LocalWins, RemoteWins, ResolveError};
pub use path::extract_from_path;
pub use readme::enrich_from_readme;
