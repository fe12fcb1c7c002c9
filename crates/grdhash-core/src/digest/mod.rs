//! Digest module: Content hashing and the persisted digest map
//!
//! Maps the SHA1 of each resource's bytes to the resource's root-relative
//! path. The map is merged across runs: entries are added or overwritten,
//! never pruned.

mod hash;
mod map;
mod store;

pub use hash::{compute_file_hash, digest_resource, sha1_hex, HashedResource};
pub use map::DigestMap;
pub use store::{DigestStore, StoreError, DEFAULT_MAP_FILE};

#[cfg(test)]
mod tests;
