//! Binary layout of a resource pack
//!
//! ```text
//! header   version:u32 encoding:u32 resource_count:u16 alias_count:u16
//! entries  (resource_id:u16 file_offset:u32) x (resource_count + 1)
//! aliases  (resource_id:u16 entry_index:u16) x alias_count
//! data     entry i spans [offset_i, offset_{i+1})
//! ```
//!
//! All integers are little-endian. The last entry is a sentinel whose
//! offset marks the end of the data.

use thiserror::Error;

pub const PAK_VERSION: u32 = 5;
pub const PAK_ENCODING: u32 = 1;

const HEADER_SIZE: usize = 12;
const ENTRY_SIZE: usize = 6;
const ALIAS_SIZE: usize = 4;

/// Errors that can occur while decoding or encoding a pack
#[derive(Debug, Error)]
pub enum PakError {
    #[error("Unsupported pak file: version {version}, encoding {encoding}")]
    Unsupported { version: u32, encoding: u32 },

    #[error("Malformed pak file: {0}")]
    Malformed(String),

    #[error("Too many {kind} for a pak file: {count}")]
    TooLarge { kind: &'static str, count: usize },
}

/// One resource body
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PakEntry {
    pub resource_id: u16,
    pub data: Vec<u8>,
}

/// A resource id sharing the body of another entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PakAlias {
    pub resource_id: u16,
    pub entry_index: u16,
}

/// A decoded resource pack
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PakFile {
    pub entries: Vec<PakEntry>,
    pub aliases: Vec<PakAlias>,
}

impl PakFile {
    /// Decode a pack from its bytes
    ///
    /// # Errors
    /// Returns an error if the header is not version 5 / encoding 1, or if
    /// the tables or offsets do not fit the buffer.
    pub fn parse(bytes: &[u8]) -> Result<Self, PakError> {
        let version = read_u32(bytes, 0)?;
        let encoding = read_u32(bytes, 4)?;
        if version != PAK_VERSION || encoding != PAK_ENCODING {
            return Err(PakError::Unsupported { version, encoding });
        }

        let resource_count = usize::from(read_u16(bytes, 8)?);
        let alias_count = usize::from(read_u16(bytes, 10)?);

        let mut entries = Vec::with_capacity(resource_count);
        for i in 0..resource_count {
            let at = HEADER_SIZE + i * ENTRY_SIZE;
            let resource_id = read_u16(bytes, at)?;
            let start = read_offset(bytes, at + 2)?;
            let end = read_offset(bytes, at + ENTRY_SIZE + 2)?;

            let data = bytes.get(start..end).ok_or_else(|| {
                PakError::Malformed(format!(
                    "resource {resource_id} spans {start}..{end} in a {} byte file",
                    bytes.len()
                ))
            })?;
            entries.push(PakEntry {
                resource_id,
                data: data.to_vec(),
            });
        }

        let alias_table = HEADER_SIZE + (resource_count + 1) * ENTRY_SIZE;
        let mut aliases = Vec::with_capacity(alias_count);
        for i in 0..alias_count {
            let at = alias_table + i * ALIAS_SIZE;
            aliases.push(PakAlias {
                resource_id: read_u16(bytes, at)?,
                entry_index: read_u16(bytes, at + 2)?,
            });
        }

        Ok(Self { entries, aliases })
    }

    /// Encode the pack
    ///
    /// # Errors
    /// Returns an error if the entry or alias count exceeds `u16`, or the
    /// data exceeds the 4 GiB addressable by `u32` offsets.
    pub fn to_bytes(&self) -> Result<Vec<u8>, PakError> {
        let resource_count = count_u16("entries", self.entries.len())?;
        let alias_count = count_u16("aliases", self.aliases.len())?;

        let data_start = HEADER_SIZE
            + (self.entries.len() + 1) * ENTRY_SIZE
            + self.aliases.len() * ALIAS_SIZE;
        let data_len: usize = self.entries.iter().map(|e| e.data.len()).sum();

        let mut out = Vec::with_capacity(data_start + data_len);
        out.extend_from_slice(&PAK_VERSION.to_le_bytes());
        out.extend_from_slice(&PAK_ENCODING.to_le_bytes());
        out.extend_from_slice(&resource_count.to_le_bytes());
        out.extend_from_slice(&alias_count.to_le_bytes());

        let mut offset = data_start;
        for entry in &self.entries {
            out.extend_from_slice(&entry.resource_id.to_le_bytes());
            out.extend_from_slice(&offset_u32(offset)?.to_le_bytes());
            offset += entry.data.len();
        }
        // Sentinel
        out.extend_from_slice(&0u16.to_le_bytes());
        out.extend_from_slice(&offset_u32(offset)?.to_le_bytes());

        for alias in &self.aliases {
            out.extend_from_slice(&alias.resource_id.to_le_bytes());
            out.extend_from_slice(&alias.entry_index.to_le_bytes());
        }

        for entry in &self.entries {
            out.extend_from_slice(&entry.data);
        }

        Ok(out)
    }
}

fn truncated(at: usize) -> PakError {
    PakError::Malformed(format!("truncated at offset {at}"))
}

fn read_u16(bytes: &[u8], at: usize) -> Result<u16, PakError> {
    bytes
        .get(at..at + 2)
        .and_then(|b| b.try_into().ok())
        .map(u16::from_le_bytes)
        .ok_or_else(|| truncated(at))
}

fn read_u32(bytes: &[u8], at: usize) -> Result<u32, PakError> {
    bytes
        .get(at..at + 4)
        .and_then(|b| b.try_into().ok())
        .map(u32::from_le_bytes)
        .ok_or_else(|| truncated(at))
}

fn read_offset(bytes: &[u8], at: usize) -> Result<usize, PakError> {
    let offset = read_u32(bytes, at)?;
    usize::try_from(offset)
        .map_err(|_| PakError::Malformed(format!("offset {offset} does not fit in memory")))
}

fn count_u16(kind: &'static str, count: usize) -> Result<u16, PakError> {
    u16::try_from(count).map_err(|_| PakError::TooLarge { kind, count })
}

fn offset_u32(offset: usize) -> Result<u32, PakError> {
    u32::try_from(offset).map_err(|_| PakError::TooLarge {
        kind: "data bytes",
        count: offset,
    })
}
