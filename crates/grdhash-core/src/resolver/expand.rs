//! Context x file expansion

use std::collections::BTreeSet;

use crate::scanner::{dirname, join_segments, to_slash};

use super::{GrdDocument, ResolveError};

impl GrdDocument {
    /// Expand the declarations of the document at `document_path`
    ///
    /// Without contexts each file resolves next to the document. Otherwise
    /// each file resolves once under every context.
    #[must_use]
    pub fn expand(&self, document_path: &str) -> BTreeSet<String> {
        let document_path = to_slash(document_path);
        let dir = dirname(&document_path);

        let mut resources = BTreeSet::new();
        for file in &self.files {
            if self.contexts.is_empty() {
                resources.insert(join_segments([dir, file.as_str()]));
            } else {
                for context in &self.contexts {
                    resources.insert(join_segments([dir, context.as_str(), file.as_str()]));
                }
            }
        }
        resources
    }
}

/// Parse one document and union its resources into `resources`
///
/// Returns the number of distinct references this document resolved to,
/// including ones already present in the set.
///
/// # Errors
/// Returns an error if the document cannot be parsed.
pub fn resolve_into(
    document_path: &str,
    content: &[u8],
    resources: &mut BTreeSet<String>,
) -> Result<usize, ResolveError> {
    let expanded = GrdDocument::parse(content)?.expand(document_path);
    let count = expanded.len();
    resources.extend(expanded);
    Ok(count)
}
