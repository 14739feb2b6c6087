pub mod config;
pub mod duration;
pub mod export;
pub mod progress;
pub mod report;
pub mod spread;

use crate::config::Config;
use crate::core::ingest::{self, IngestOptions};
use crate::errors::AppResult;
use crate::models::ParsedWorkoutSet;
use crate::utils::path::expand_tilde;

/// Read and parse the export named on the command line.
pub(crate) fn load_sets(file: &str, cfg: &Config) -> AppResult<Vec<ParsedWorkoutSet>> {
    let opts = IngestOptions::from_config(cfg)?;
    ingest::load_file(&expand_tilde(file), &opts)
}
