//! CLI commands

pub mod index;
pub mod pak;
