//! Phase 3: Hash resources into the digest map

use std::collections::BTreeSet;
use std::path::Path;

use grdhash_core::digest::{digest_resource, DigestMap};
use tracing::info;

/// Results from Phase 3
#[derive(Debug, Default)]
pub struct Phase3Result {
    pub hashed_count: usize,
    pub skipped_count: usize,
}

/// Run Phase 3: Hash every resource that can be read
///
/// Resources are visited in path order, so when two files share a digest
/// the later path wins.
pub fn run(root: &Path, resources: &BTreeSet<String>, map: &mut DigestMap) -> Phase3Result {
    info!("Phase 3: Hashing {} resources...", resources.len());

    let mut result = Phase3Result::default();
    for (i, resource) in resources.iter().enumerate() {
        handle_resource(root, resource, map, &mut result);
        info!("  {} {} {}", i + 1, map.len(), resource);
    }

    log_phase3_skips(&result);
    result
}

/// Hash one resource. A missing or unreadable file is skipped.
fn handle_resource(root: &Path, resource: &str, map: &mut DigestMap, result: &mut Phase3Result) {
    match digest_resource(root, resource) {
        Ok(hashed) => {
            map.insert(hashed.digest, hashed.path);
            result.hashed_count += 1;
        }
        Err(e) => {
            result.skipped_count += 1;
            tracing::debug!("Skipping {}: {}", resource, e);
        }
    }
}

fn log_phase3_skips(result: &Phase3Result) {
    if result.skipped_count > 0 {
        info!("Phase 3: {} declared resources are not present", result.skipped_count);
    }
}
