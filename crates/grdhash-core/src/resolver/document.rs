//! Attribute extraction from a `.grd` document

use std::collections::BTreeSet;

use roxmltree::{Document, ParsingOptions};
use thiserror::Error;

/// Attribute carrying a namespace prefix
pub const CONTEXT_ATTRIBUTE: &str = "context";
/// Attribute carrying a resource leaf name
pub const FILE_ATTRIBUTE: &str = "file";

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Errors that can occur while reading a document
#[derive(Debug, Error)]
pub enum ResolveError {
    #[error("Document is not valid UTF-8: {0}")]
    Encoding(#[from] std::str::Utf8Error),

    #[error("Malformed document: {0}")]
    Xml(#[from] roxmltree::Error),
}

/// The declarations found in one document
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GrdDocument {
    /// Distinct `context` values, from any element
    pub contexts: BTreeSet<String>,
    /// `file` values in document order, from any element
    pub files: Vec<String>,
}

impl GrdDocument {
    /// Parse raw document bytes
    ///
    /// Empty content yields a document with no declarations.
    ///
    /// # Errors
    /// Returns an error if the content is not UTF-8 or not well-formed XML.
    pub fn parse(content: &[u8]) -> Result<Self, ResolveError> {
        if content.is_empty() {
            return Ok(Self::default());
        }

        let content = content.strip_prefix(UTF8_BOM).unwrap_or(content);
        let text = std::str::from_utf8(content)?;

        let mut options = ParsingOptions::default();
        options.allow_dtd = true;
        let xml = Document::parse_with_options(text, options)?;

        let mut document = Self::default();
        for node in xml.descendants().filter(roxmltree::Node::is_element) {
            if let Some(context) = node.attribute(CONTEXT_ATTRIBUTE) {
                document.contexts.insert(context.to_string());
            }
            if let Some(file) = node.attribute(FILE_ATTRIBUTE) {
                document.files.push(file.to_string());
            }
        }

        Ok(document)
    }
}
