//! Pak module: Packed resource archives
//!
//! Reads and writes version 5 resource packs, converts them to and from
//! JSON records, and names anonymous pack entries through the digest map.

mod format;
mod naming;
mod record;

pub use format::{PakAlias, PakEntry, PakError, PakFile, PAK_ENCODING, PAK_VERSION};
pub use naming::{entry_names, unknown_name};
pub use record::{to_tab_json, AliasRecord, EntryRecord, LangRecord, MetaRecord, TextRecord};

#[cfg(test)]
mod tests;
