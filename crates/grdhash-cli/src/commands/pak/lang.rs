//! Language pack commands: Extract and rebuild localized strings

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use grdhash_core::pak::{to_tab_json, LangRecord};
use tracing::info;

use super::{read_pak, read_record, sibling, write_file, write_pak};

/// Write the text of every entry of a language pack to a JSON record
///
/// # Errors
/// Returns an error if the pack cannot be read or decoded, or the record
/// cannot be written.
pub fn unpack(path: &Path) -> Result<PathBuf> {
    let pak = read_pak(path)?;
    let record = LangRecord::from_pak(&pak);

    let output = sibling(path, "json");
    let json = to_tab_json(&record).context("Failed to serialize record")?;
    write_file(&output, &json)?;

    info!("✓ write {} ok ({} strings)", output.display(), record.entry.len());
    Ok(output)
}

/// Rebuild a language pack from its JSON record
///
/// # Errors
/// Returns an error if the record cannot be read or the pack cannot be
/// written.
pub fn repack(path: &Path) -> Result<PathBuf> {
    let record: LangRecord = read_record(path)?;

    let output = sibling(path, "pak");
    write_pak(&output, &record.to_pak())?;

    info!("✓ repack {} ok", output.display());
    Ok(output)
}
