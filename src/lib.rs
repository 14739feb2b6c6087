//! strongdash library root.
//! Exposes the duration parser, ingestion, aggregation and the CLI dispatcher.

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod export;
pub mod models;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;
use std::path::Path;

pub use crate::core::ingest::{IngestOptions, from_bytes, read_sets};
pub use crate::core::{Core, DurationError, parse_duration};

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config, config_path: &Path) -> AppResult<()> {
    match &cli.command {
        Commands::Report { .. } => cli::commands::report::handle(&cli.command, cfg),
        Commands::Duration { .. } => cli::commands::duration::handle(&cli.command),
        Commands::Progress { .. } => cli::commands::progress::handle(&cli.command, cfg),
        Commands::Spread { .. } => cli::commands::spread::handle(&cli.command, cfg),
        Commands::Export { .. } => cli::commands::export::handle(&cli.command, cfg),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cfg, config_path),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    ui::logger::init(cli.verbose);

    let config_path = match &cli.config {
        Some(p) => utils::path::expand_tilde(p),
        None => Config::config_file(),
    };
    let cfg = Config::load(Some(config_path.as_path()))?;

    dispatch(&cli, &cfg, &config_path)
}
