//! Index command: Resolve .grd resources and merge their digests into the map
//!
//! This module implements a 3-phase indexing process:
//! 1. Phase 1: Discover .grd documents under the source root
//! 2. Phase 2: Resolve each document's context/file declarations into resource paths
//! 3. Phase 3: Hash every resource that exists and record digest -> path

mod phase1;
mod phase2;
mod phase3;

use anyhow::{Context, Result};
use grdhash_core::{DigestStore, IndexConfig};
use tracing::info;

pub use phase1::Phase1Result;
pub use phase2::Phase2Result;
pub use phase3::Phase3Result;

/// Counts reported at the end of a run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexSummary {
    pub document_count: usize,
    pub resource_count: usize,
    pub hashed_count: usize,
    pub skipped_count: usize,
    pub map_size: usize,
}

// ============================================================================
// Main entry point
// ============================================================================

/// Run the index command
///
/// The map file is read once before any phase and rewritten once after
/// the last; a failure in between leaves the previous map untouched.
///
/// # Errors
/// Returns an error if the source tree cannot be walked, a document cannot
/// be read or parsed, or the map cannot be written.
pub fn run(config: &IndexConfig) -> Result<IndexSummary> {
    info!("Indexing resources under: {}", config.root().display());

    let store = DigestStore::new(config.map_file());
    let mut map = store.load_or_default();
    info!("Loaded {} digests from {}", map.len(), store.path().display());

    let phase1 = phase1::run(config.root())?;
    let phase2 = phase2::run(config.root(), &phase1.documents)?;
    let phase3 = phase3::run(config.root(), &phase2.resources, &mut map);

    store
        .save(&map)
        .with_context(|| format!("Failed to save digest map to {}", store.path().display()))?;

    let summary = IndexSummary {
        document_count: phase1.documents.len(),
        resource_count: phase2.resources.len(),
        hashed_count: phase3.hashed_count,
        skipped_count: phase3.skipped_count,
        map_size: map.len(),
    };
    log_index_summary(&summary);
    Ok(summary)
}

fn log_index_summary(summary: &IndexSummary) {
    info!(
        "✓ Index completed: {} documents, {} resources, {} hashed, {} missing, {} digests saved",
        summary.document_count,
        summary.resource_count,
        summary.hashed_count,
        summary.skipped_count,
        summary.map_size
    );
}
