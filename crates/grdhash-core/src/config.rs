//! Configuration for an index run

use std::path::{Path, PathBuf};

use crate::digest::DEFAULT_MAP_FILE;

/// Default source root, relative to the working directory
pub const DEFAULT_ROOT: &str = "src";

/// Where to scan and where to persist the digest map
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexConfig {
    root: PathBuf,
    map_file: PathBuf,
}

impl IndexConfig {
    /// Create a configuration scanning `root` with the default map file
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            map_file: PathBuf::from(DEFAULT_MAP_FILE),
        }
    }

    /// Set the digest map file
    #[must_use]
    pub fn with_map_file(mut self, map_file: impl Into<PathBuf>) -> Self {
        self.map_file = map_file.into();
        self
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    #[must_use]
    pub fn map_file(&self) -> &Path {
        &self.map_file
    }
}

impl Default for IndexConfig {
    fn default() -> Self {
        Self::new(DEFAULT_ROOT)
    }
}
