//! Command types shared between main and library

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use grdhash_core::config::DEFAULT_ROOT;
use grdhash_core::digest::DEFAULT_MAP_FILE;

#[derive(Parser)]
#[command(name = "grdhash")]
#[command(author, version, about = "Content-addressed index of .grd resources", long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Resolve every .grd under a source root and index its resources by SHA1
    Index {
        /// Source root to scan
        #[arg(long, default_value = DEFAULT_ROOT)]
        root: PathBuf,

        /// Digest map to merge into
        #[arg(long, default_value = DEFAULT_MAP_FILE)]
        output: PathBuf,
    },

    /// Unpack a resource pack, naming entries through the digest map
    Unpack {
        /// Pack file to unpack
        file: PathBuf,

        /// Digest map used to name entries
        #[arg(long, default_value = DEFAULT_MAP_FILE)]
        map: PathBuf,
    },

    /// Rebuild a resource pack from an unpacked record
    Repack {
        /// Record written by `unpack`
        file: PathBuf,
    },

    /// Extract the text of a language pack
    LangUnpack {
        /// Language pack to extract
        file: PathBuf,
    },

    /// Rebuild a language pack from its text record
    LangRepack {
        /// Record written by `lang-unpack`
        file: PathBuf,
    },
}
