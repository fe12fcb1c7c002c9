//! Phase 1: Discover .grd documents

use std::collections::BTreeSet;
use std::path::Path;

use anyhow::Result;
use grdhash_core::GrdScanner;
use tracing::info;

/// Results from Phase 1
pub struct Phase1Result {
    /// Root-relative, `/`-separated document paths
    pub documents: BTreeSet<String>,
}

/// Run Phase 1: Walk the source root for .grd documents
pub fn run(root: &Path) -> Result<Phase1Result> {
    info!("Phase 1: Scanning {} for .grd documents...", root.display());

    let documents = GrdScanner::new(root).scan()?;

    info!("Found {} .grd documents", documents.len());
    Ok(Phase1Result { documents })
}
