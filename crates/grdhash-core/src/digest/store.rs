//! JSON persistence for the digest map

use std::io::Write;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use tempfile::NamedTempFile;
use thiserror::Error;
use tracing::warn;

use super::DigestMap;

/// Default location of the persisted map, relative to the working directory
pub const DEFAULT_MAP_FILE: &str = "res_sha1.json";

const INDENT: &[u8] = b"    ";

/// Errors that can occur while reading or writing the map file
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid digest map in {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// The digest map file on disk
#[derive(Debug, Clone)]
pub struct DigestStore {
    path: PathBuf,
}

impl DigestStore {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the map, treating a missing or unreadable file as empty
    #[must_use]
    pub fn load_or_default(&self) -> DigestMap {
        match self.load() {
            Ok(Some(map)) => map,
            Ok(None) => DigestMap::new(),
            Err(e) => {
                warn!("Ignoring previous digest map: {}", e);
                DigestMap::new()
            }
        }
    }

    /// Load the map, returning `None` when the file does not exist
    ///
    /// # Errors
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load(&self) -> Result<Option<DigestMap>, StoreError> {
        let content = match std::fs::read(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(source) => return Err(self.io_error(source)),
        };

        serde_json::from_slice(&content)
            .map(Some)
            .map_err(|source| StoreError::Json {
                path: self.path.clone(),
                source,
            })
    }

    /// Overwrite the file with `map`, pretty-printed with 4-space indentation
    ///
    /// The map is written to a temporary file next to the target and moved
    /// into place, so readers never observe a partial file.
    ///
    /// # Errors
    /// Returns an error if the file cannot be written.
    pub fn save(&self, map: &DigestMap) -> Result<(), StoreError> {
        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        std::fs::create_dir_all(dir).map_err(|source| self.io_error(source))?;

        let json = to_pretty_json(map).map_err(|source| StoreError::Json {
            path: self.path.clone(),
            source,
        })?;

        let mut file = NamedTempFile::new_in(dir).map_err(|source| self.io_error(source))?;
        file.write_all(&json).map_err(|source| self.io_error(source))?;
        file.persist(&self.path).map_err(|e| self.io_error(e.error))?;
        Ok(())
    }

    fn io_error(&self, source: std::io::Error) -> StoreError {
        StoreError::Io {
            path: self.path.clone(),
            source,
        }
    }
}

impl Default for DigestStore {
    fn default() -> Self {
        Self::new(DEFAULT_MAP_FILE)
    }
}

fn to_pretty_json(map: &DigestMap) -> Result<Vec<u8>, serde_json::Error> {
    let mut buf = Vec::new();
    let mut serializer =
        serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(INDENT));
    map.serialize(&mut serializer)?;
    Ok(buf)
}
