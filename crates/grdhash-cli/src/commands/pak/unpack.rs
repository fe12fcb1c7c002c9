//! Unpack command: Split a resource pack into named files

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use grdhash_core::pak::{entry_names, to_tab_json, AliasRecord, EntryRecord, MetaRecord};
use grdhash_core::scanner::to_slash;
use grdhash_core::DigestStore;
use tracing::info;

use super::{read_pak, sibling, write_file};

/// Run the unpack command
///
/// Entries are written under a directory named after the pack; the
/// returned path is the JSON record describing them.
///
/// # Errors
/// Returns an error if the pack cannot be read or decoded, or if any
/// output cannot be written. A missing or invalid digest map is not an
/// error: every entry is then named `unknown/<id>`.
pub fn run(path: &Path, map_file: &Path) -> Result<PathBuf> {
    info!("Unpacking {}", path.display());

    let pak = read_pak(path)?;
    let map = DigestStore::new(map_file).load_or_default();
    info!(
        "{} entries, {} aliases, {} known digests",
        pak.entries.len(),
        pak.aliases.len(),
        map.len()
    );

    let out_dir = sibling(path, "");
    let mut record = MetaRecord::default();

    for (entry, name) in pak.entries.iter().zip(entry_names(&pak, &map)) {
        let target = out_dir.join(&name);
        write_file(&target, &entry.data)?;
        info!("write {}", name);

        record.entry.push(EntryRecord {
            resource_id: entry.resource_id,
            path: to_slash(&target.to_string_lossy()),
        });
    }
    record.alias = pak.aliases.iter().copied().map(AliasRecord::from).collect();

    let output = sibling(path, "json");
    let json = to_tab_json(&record).context("Failed to serialize record")?;
    write_file(&output, &json)?;

    info!("✓ write {} ok", output.display());
    Ok(output)
}
