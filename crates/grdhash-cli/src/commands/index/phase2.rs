//! Phase 2: Resolve resource references from documents

use std::collections::BTreeSet;
use std::path::Path;

use anyhow::{Context, Result};
use grdhash_core::resolver::resolve_into;
use tracing::info;

/// Results from Phase 2
pub struct Phase2Result {
    /// Every resource declared by any document, deduplicated
    pub resources: BTreeSet<String>,
}

/// Run Phase 2: Expand each document's declarations into the resource set
pub fn run(root: &Path, documents: &BTreeSet<String>) -> Result<Phase2Result> {
    info!("Phase 2: Resolving resources from {} documents...", documents.len());

    let mut resources = BTreeSet::new();
    for (i, document) in documents.iter().enumerate() {
        process_document(root, document, &mut resources)?;
        info!("  {} {} → {} resources", i + 1, document, resources.len());
    }

    info!("Resolved {} resource references", resources.len());
    Ok(Phase2Result { resources })
}

/// Read and resolve a single document. Any failure is fatal to the run.
fn process_document(root: &Path, document: &str, resources: &mut BTreeSet<String>) -> Result<()> {
    let path = root.join(document);
    let content =
        std::fs::read(&path).with_context(|| format!("Failed to read {}", path.display()))?;

    resolve_into(document, &content, resources)
        .with_context(|| format!("Failed to parse {}", path.display()))?;
    Ok(())
}
