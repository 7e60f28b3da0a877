//! Card generation pipeline
//!
//! Drives the full resolution for a batch of artifacts: scan, path
//! extraction, README enrichment, registry lookup, merge, card write.
//! Artifacts are processed one at a time; per-artifact failures are logged
//! and skipped, and only an unwritable output directory aborts the batch.

pub mod scan;

use crate::error::CardError;
use crate::metadata::readme::README_FILENAME;
use crate::metadata::{enrich_from_readme, extract_from_path, merge, ConflictResolver};
use crate::registry::{LookupOutcome, RegistryLookup};
use std::path::{Path, PathBuf};

/// What happened to one artifact during a batch run
#[derive(Debug)]
pub enum ArtifactOutcome {
    /// A canonical card was written
    Written {
        model_name: String,
        card_path: PathBuf,
        /// True when the registry lookup failed and the card holds
        /// local-only metadata
        degraded: bool,
    },
    /// The artifact was skipped; no card was written
    Skipped { artifact: String, reason: String },
}

/// Append-only result log for one batch run
#[derive(Debug, Default)]
pub struct BatchReport {
    pub outcomes: Vec<ArtifactOutcome>,
}

impl BatchReport {
    pub fn written(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| matches!(o, ArtifactOutcome::Written { .. }))
            .count()
    }

    pub fn skipped(&self) -> usize {
        self.outcomes.len() - self.written()
    }

    /// Human-readable multi-line status, one line per artifact plus totals.
    /// Every skipped artifact is named so no failure is silent.
    pub fn summary(&self) -> String {
        let mut lines: Vec<String> = self
            .outcomes
            .iter()
            .map(|outcome| match outcome {
                ArtifactOutcome::Written {
                    model_name,
                    card_path,
                    degraded,
                } => {
                    if *degraded {
                        format!(
                            "Model card for {} saved to {} (local metadata only; registry unavailable)",
                            model_name,
                            card_path.display()
                        )
                    } else {
                        format!(
                            "Model card for {} saved to {}",
                            model_name,
                            card_path.display()
                        )
                    }
                }
                ArtifactOutcome::Skipped { artifact, reason } => {
                    format!("Skipped {artifact}: {reason}")
                }
            })
            .collect();

        lines.push(format!(
            "{} card(s) written, {} artifact(s) skipped",
            self.written(),
            self.skipped()
        ));
        lines.join("\n")
    }
}

/// The resolution pipeline, parameterized over its registry and
/// disambiguation strategy
pub struct CardPipeline<'a> {
    registry: &'a dyn RegistryLookup,
    resolver: &'a dyn ConflictResolver,
}

impl<'a> CardPipeline<'a> {
    pub fn new(registry: &'a dyn RegistryLookup, resolver: &'a dyn ConflictResolver) -> Self {
        Self { registry, resolver }
    }

    /// Resolve and write a card for every .gguf artifact under `model_dir`.
    ///
    /// Batch-level preconditions (existing model directory, writable output
    /// directory) are checked once before any artifact is touched.
    pub async fn run_batch(
        &self,
        model_dir: &Path,
        output_dir: &Path,
    ) -> Result<BatchReport, CardError> {
        if !model_dir.is_dir() {
            return Err(CardError::InvalidPath(format!(
                "model directory does not exist: {}",
                model_dir.display()
            )));
        }
        crate::storage::cards::ensure_writable(output_dir)?;

        let artifacts = scan::scan_models(model_dir)?;
        tracing::info!(
            "Processing {} artifact(s) from {}",
            artifacts.len(),
            model_dir.display()
        );

        let mut report = BatchReport::default();
        for artifact in artifacts {
            match self.process_artifact(&artifact, output_dir).await {
                Ok(outcome) => report.outcomes.push(outcome),
                // An unwritable output would recur for every remaining
                // artifact, so it aborts the batch
                Err(e @ CardError::Write(_)) => return Err(e),
                Err(e) => {
                    tracing::warn!("Skipping {}: {}", artifact, e);
                    report.outcomes.push(ArtifactOutcome::Skipped {
                        artifact,
                        reason: e.to_string(),
                    });
                }
            }
        }

        Ok(report)
    }

    /// Run the full resolution for one artifact. The card is only written
    /// once a complete canonical record exists; there are no partial writes.
    async fn process_artifact(
        &self,
        artifact: &str,
        output_dir: &Path,
    ) -> Result<ArtifactOutcome, CardError> {
        let local = extract_from_path(artifact)?;

        let local = match Path::new(artifact).parent() {
            Some(parent) => enrich_from_readme(&parent.join(README_FILENAME), local),
            None => local,
        };

        let (remote, degraded) = match self
            .registry
            .lookup(&local.author, &local.model_name)
            .await
        {
            Ok(LookupOutcome::Found(record)) => (Some(record), false),
            Ok(LookupOutcome::NotFound) => (None, false),
            Err(e) => {
                // Degrade to local-only metadata; the card is still written
                tracing::warn!(
                    "Registry lookup failed for {}/{}: {}",
                    local.author,
                    local.model_name,
                    e
                );
                (None, true)
            }
        };

        let canonical = merge(remote.as_ref(), &local, self.resolver)?;
        let card_path = crate::storage::cards::write_card(output_dir, &canonical)?;

        Ok(ArtifactOutcome::Written {
            model_name: canonical.model_name,
            card_path,
            degraded,
        })
    }
}
