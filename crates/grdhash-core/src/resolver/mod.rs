//! Resolver module: Expands `.grd` declarations into resource paths
//!
//! A document declares namespace prefixes through `context` attributes and
//! leaf names through `file` attributes. Every file is joined against every
//! context found anywhere in the same document; nesting does not scope them.

mod document;
mod expand;

pub use document::{GrdDocument, ResolveError, CONTEXT_ATTRIBUTE, FILE_ATTRIBUTE};
pub use expand::resolve_into;
