//! grdhash-core: Core library for content-addressed resource indexing
//!
//! Walks a source tree for `.grd` resource-description documents, expands
//! their `context`/`file` declarations into concrete resource paths, and
//! indexes those resources by SHA1 digest in a persisted JSON map.
//!
//! The `pak` module reads and writes packed resource archives and uses the
//! digest map to name the resources found inside them.

pub mod config;
pub mod digest;
pub mod pak;
pub mod resolver;
pub mod scanner;

// Re-export commonly used types
pub use config::IndexConfig;
pub use digest::{compute_file_hash, sha1_hex, DigestMap, DigestStore};
pub use pak::{PakAlias, PakEntry, PakError, PakFile};
pub use resolver::{GrdDocument, ResolveError};
pub use scanner::{GrdScanner, ScanError};
