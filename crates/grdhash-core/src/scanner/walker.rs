//! File walker: Discovers `.grd` documents in a directory tree

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use thiserror::Error;
use walkdir::WalkDir;

use super::to_slash;

/// Suffix identifying a resource-description document
pub const GRD_SUFFIX: &str = ".grd";

/// Errors that can occur while enumerating the source tree
#[derive(Debug, Error)]
pub enum ScanError {
    #[error("Failed to walk {root}: {source}")]
    Walk {
        root: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    #[error("{path} is not under the scan root {root}")]
    OutsideRoot { path: PathBuf, root: PathBuf },
}

/// Scanner for discovering `.grd` documents under a root directory
#[derive(Debug)]
pub struct GrdScanner {
    root: PathBuf,
}

impl GrdScanner {
    /// Create a new scanner for the given root directory
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Walk the root and collect every matching document, relative to the root
    ///
    /// # Errors
    /// Returns an error if any directory under the root cannot be read.
    pub fn scan(&self) -> Result<BTreeSet<String>, ScanError> {
        let mut documents = BTreeSet::new();

        for entry in WalkDir::new(&self.root).follow_links(false) {
            let entry = entry.map_err(|source| ScanError::Walk {
                root: self.root.clone(),
                source,
            })?;

            if !is_file(&entry) || !Self::matches(entry.file_name()) {
                continue;
            }

            documents.insert(self.relative(entry.path())?);
        }

        Ok(documents)
    }

    /// Get the root directory being scanned
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn matches(file_name: &std::ffi::OsStr) -> bool {
        file_name.to_string_lossy().ends_with(GRD_SUFFIX)
    }

    fn relative(&self, path: &Path) -> Result<String, ScanError> {
        let relative = path
            .strip_prefix(&self.root)
            .map_err(|_| ScanError::OutsideRoot {
                path: path.to_path_buf(),
                root: self.root.clone(),
            })?;
        Ok(to_slash(&relative.to_string_lossy()))
    }
}

/// A regular file, or a symlink whose target is one. Directory links are not followed.
fn is_file(entry: &walkdir::DirEntry) -> bool {
    entry.file_type().is_file() || (entry.path_is_symlink() && entry.path().is_file())
}
