//! JSON records describing an unpacked pack

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::ser::PrettyFormatter;

use super::{PakAlias, PakEntry, PakFile};

/// An entry written to disk
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntryRecord {
    #[serde(rename = "id")]
    pub resource_id: u16,
    pub path: String,
}

/// An entry holding text, for language packs
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextRecord {
    #[serde(rename = "id")]
    pub resource_id: u16,
    pub text: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AliasRecord {
    #[serde(rename = "id")]
    pub resource_id: u16,
    #[serde(rename = "index")]
    pub entry_index: u16,
}

/// Metadata of a resource pack unpacked to files
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetaRecord {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub entry: Vec<EntryRecord>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub alias: Vec<AliasRecord>,
}

/// A language pack with its bodies inlined as text
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LangRecord {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub entry: Vec<TextRecord>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub alias: Vec<AliasRecord>,
}

impl From<PakAlias> for AliasRecord {
    fn from(alias: PakAlias) -> Self {
        Self {
            resource_id: alias.resource_id,
            entry_index: alias.entry_index,
        }
    }
}

impl From<AliasRecord> for PakAlias {
    fn from(record: AliasRecord) -> Self {
        Self {
            resource_id: record.resource_id,
            entry_index: record.entry_index,
        }
    }
}

impl LangRecord {
    /// Inline every body of `pak` as text; invalid UTF-8 is replaced
    #[must_use]
    pub fn from_pak(pak: &PakFile) -> Self {
        Self {
            entry: pak
                .entries
                .iter()
                .map(|e| TextRecord {
                    resource_id: e.resource_id,
                    text: String::from_utf8_lossy(&e.data).into_owned(),
                })
                .collect(),
            alias: pak.aliases.iter().copied().map(AliasRecord::from).collect(),
        }
    }

    /// Build a pack whose bodies are the UTF-8 bytes of each text
    #[must_use]
    pub fn to_pak(&self) -> PakFile {
        PakFile {
            entries: self
                .entry
                .iter()
                .map(|t| PakEntry {
                    resource_id: t.resource_id,
                    data: t.text.as_bytes().to_vec(),
                })
                .collect(),
            aliases: self.alias.iter().copied().map(PakAlias::from).collect(),
        }
    }
}

/// Serialize with tab indentation and a trailing newline
///
/// # Errors
/// Returns an error if `value` fails to serialize.
pub fn to_tab_json<T: Serialize>(value: &T) -> Result<Vec<u8>, serde_json::Error> {
    let mut buf = Vec::new();
    let mut serializer =
        serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(b"\t"));
    value.serialize(&mut serializer)?;
    buf.push(b'\n');
    Ok(buf)
}

// Records written by older tools carry `null` for empty lists.
fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}
