//! grdhash: index .grd resources by content digest

use anyhow::Result;
use clap::Parser;
use grdhash_cli::commands;
use grdhash_cli::logging::setup_logging;
use grdhash_cli::{Cli, Commands};
use grdhash_core::IndexConfig;

fn main() -> Result<()> {
    let cli = Cli::parse();
    setup_logging(cli.verbose);

    match cli.command {
        Commands::Index { root, output } => {
            let config = IndexConfig::new(root).with_map_file(output);
            commands::index::run(&config)?;
        }
        Commands::Unpack { file, map } => {
            commands::pak::unpack::run(&file, &map)?;
        }
        Commands::Repack { file } => {
            commands::pak::repack::run(&file)?;
        }
        Commands::LangUnpack { file } => {
            commands::pak::lang::unpack(&file)?;
        }
        Commands::LangRepack { file } => {
            commands::pak::lang::repack(&file)?;
        }
    }

    Ok(())
}
