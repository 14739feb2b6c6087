// src/export/logic.rs

use crate::errors::AppResult;
use crate::export::ExportFormat;
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::model::{ExportBundle, SetExport};
use crate::core::series;
use crate::models::{AggregateReport, ParsedWorkoutSet};
use crate::ui::messages::warning;
use std::path::Path;

/// High-level export entry point.
pub struct ExportLogic;

impl ExportLogic {
    /// Write the parsed sets (`csv`) or the full report bundle (`json`) to `file`.
    pub fn export(
        sets: &[ParsedWorkoutSet],
        report: &AggregateReport,
        format: ExportFormat,
        file: &Path,
        force: bool,
    ) -> AppResult<()> {
        ensure_writable(file, force)?;

        if sets.is_empty() {
            warning("No workout sets found in the input. Nothing to export.");
            return Ok(());
        }

        match format {
            ExportFormat::Csv => {
                let rows: Vec<SetExport> = sets.iter().map(SetExport::from).collect();
                export_csv(&rows, file)?
            }
            ExportFormat::Json => {
                let bundle = ExportBundle {
                    report,
                    weight_progress: series::weight_progress(sets),
                    weight_spread: series::weight_spread(sets),
                    duration_spread: series::duration_spread(sets),
                    sets,
                };
                export_json(&bundle, file)?
            }
        }

        log::debug!("wrote {} sets as {}", sets.len(), format.as_str());
        Ok(())
    }
}
