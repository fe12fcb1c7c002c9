//! SHA1 content digests

use std::path::Path;

use sha1::{Digest, Sha1};

use crate::scanner::normalize_path;

/// Lowercase hex SHA1 of `data`
#[must_use]
pub fn sha1_hex(data: &[u8]) -> String {
    format!("{:x}", Sha1::digest(data))
}

/// Read a file and compute the SHA1 of its contents
///
/// # Errors
/// Returns an error if the file cannot be read.
pub fn compute_file_hash(path: &Path) -> std::io::Result<String> {
    let content = std::fs::read(path)?;
    Ok(sha1_hex(&content))
}

/// A resource whose bytes were read and hashed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HashedResource {
    pub digest: String,
    /// Normalized, root-relative path
    pub path: String,
}

/// Normalize a resource reference and hash the file it names under `root`
///
/// # Errors
/// Returns the I/O error from reading the file. Callers decide whether a
/// missing or unreadable resource is fatal.
pub fn digest_resource(root: &Path, resource: &str) -> std::io::Result<HashedResource> {
    let path = normalize_path(resource);
    let digest = compute_file_hash(&root.join(&path))?;
    Ok(HashedResource { digest, path })
}
