//! Scanner module: `.grd` document discovery and path helpers
//!
//! Responsible for walking the source root and expressing every path
//! the pipeline handles in the same root-relative, forward-slash form.

mod path;
mod walker;

pub use path::{dirname, join_segments, normalize_path, to_slash};
pub use walker::{GrdScanner, ScanError, GRD_SUFFIX};

#[cfg(test)]
mod tests;
