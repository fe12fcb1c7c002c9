//! Repack command: Rebuild a resource pack from its unpacked record

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use grdhash_core::pak::{MetaRecord, PakAlias, PakEntry, PakFile};
use tracing::info;

use super::{read_record, sibling, write_pak};

/// Run the repack command
///
/// Entry paths in the record are read as given, relative to the working
/// directory unless absolute.
///
/// # Errors
/// Returns an error if the record or any entry file cannot be read, or the
/// pack cannot be written.
pub fn run(path: &Path) -> Result<PathBuf> {
    info!("Repacking {}", path.display());

    let record: MetaRecord = read_record(path)?;

    let entries = record
        .entry
        .iter()
        .map(|e| -> Result<PakEntry> {
            let data = std::fs::read(&e.path)
                .with_context(|| format!("Failed to read entry {} from {}", e.resource_id, e.path))?;
            Ok(PakEntry {
                resource_id: e.resource_id,
                data,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    let pak = PakFile {
        entries,
        aliases: record.alias.iter().copied().map(PakAlias::from).collect(),
    };

    let output = sibling(path, "pak");
    write_pak(&output, &pak)?;

    info!("✓ repack {} ok", output.display());
    Ok(output)
}
