//! Pak commands: Unpack and repack resource packs
//!
//! Outputs are written next to their input, named after its stem:
//! `resources.pak` unpacks to `resources/` plus `resources.json`, and
//! `resources.json` repacks to `resources.pak`.

pub mod lang;
pub mod repack;
pub mod unpack;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use grdhash_core::PakFile;

/// `path` with its extension replaced by `extension` (or removed when empty)
pub(crate) fn sibling(path: &Path, extension: &str) -> PathBuf {
    path.with_extension(extension)
}

pub(crate) fn read_pak(path: &Path) -> Result<PakFile> {
    let bytes = std::fs::read(path).with_context(|| format!("Failed to read {}", path.display()))?;
    PakFile::parse(&bytes).with_context(|| format!("Invalid pak file {}", path.display()))
}

pub(crate) fn write_pak(path: &Path, pak: &PakFile) -> Result<()> {
    let bytes = pak
        .to_bytes()
        .with_context(|| format!("Failed to encode {}", path.display()))?;
    write_file(path, &bytes)
}

pub(crate) fn read_record<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T> {
    let content =
        std::fs::read(path).with_context(|| format!("Failed to read {}", path.display()))?;
    serde_json::from_slice(&content)
        .with_context(|| format!("Invalid record {}", path.display()))
}

/// Write `bytes` to `path`, creating parent directories as needed
pub(crate) fn write_file(path: &Path, bytes: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }
    std::fs::write(path, bytes).with_context(|| format!("Failed to write {}", path.display()))
}

#[cfg(test)]
mod tests;
