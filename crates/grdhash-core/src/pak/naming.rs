//! Naming pack entries through the digest map

use std::collections::HashSet;

use crate::digest::{sha1_hex, DigestMap};
use crate::scanner::normalize_path;

use super::PakFile;

/// Fallback name for an entry whose body is not in the digest map
#[must_use]
pub fn unknown_name(resource_id: u16) -> String {
    format!("unknown/{resource_id}")
}

/// Pick an output name for every entry of `pak`, in entry order
///
/// An entry takes the path recorded for the SHA1 of its body. It falls
/// back to [`unknown_name`] when the digest is unknown, when the recorded
/// path would escape the output directory, or when an earlier entry
/// already took the same name.
#[must_use]
pub fn entry_names(pak: &PakFile, map: &DigestMap) -> Vec<String> {
    let mut used = HashSet::new();

    pak.entries
        .iter()
        .map(|entry| {
            let mut name = map
                .get(&sha1_hex(&entry.data))
                .map(normalize_path)
                .filter(|path| is_contained(path))
                .unwrap_or_else(|| unknown_name(entry.resource_id));

            if used.contains(&name) {
                name = unknown_name(entry.resource_id);
            }
            used.insert(name.clone());
            name
        })
        .collect()
}

fn is_contained(path: &str) -> bool {
    path != "." && !path.starts_with('/') && path != ".." && !path.starts_with("../")
}
