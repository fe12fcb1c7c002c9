//! Digest -> path map

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Content-address index from hex digest to resource path
///
/// Serialized as a flat JSON object.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DigestMap {
    entries: BTreeMap<String, String>,
}

impl DigestMap {
    /// Create an empty map
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `path` under `digest`, returning the path it replaced
    pub fn insert(&mut self, digest: impl Into<String>, path: impl Into<String>) -> Option<String> {
        self.entries.insert(digest.into(), path.into())
    }

    /// Path recorded for `digest`
    #[must_use]
    pub fn get(&self, digest: &str) -> Option<&str> {
        self.entries.get(digest).map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
