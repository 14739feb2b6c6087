//! CSV ingestion: header validation, Rest Timer filtering, date and number
//! parsing. Any file-level problem aborts the whole load.

use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::models::raw_row::REQUIRED_COLUMNS;
use crate::models::{ParsedWorkoutSet, RawLogRow};
use chrono::{NaiveDate, NaiveDateTime};
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Settings the ingestion step takes from the configuration.
#[derive(Debug, Clone)]
pub struct IngestOptions {
    pub rest_timer_marker: String,
    pub date_formats: Vec<String>,
    pub delimiter: u8,
}

impl IngestOptions {
    pub fn from_config(cfg: &Config) -> AppResult<Self> {
        Ok(Self {
            rest_timer_marker: cfg.rest_timer_marker.clone(),
            date_formats: cfg.date_formats.clone(),
            delimiter: cfg.delimiter_byte()?,
        })
    }
}

impl Default for IngestOptions {
    fn default() -> Self {
        let cfg = Config::default();
        Self {
            rest_timer_marker: cfg.rest_timer_marker,
            date_formats: cfg.date_formats,
            delimiter: b',',
        }
    }
}

pub fn load_file(path: &Path, opts: &IngestOptions) -> AppResult<Vec<ParsedWorkoutSet>> {
    let file = File::open(path).map_err(|e| {
        AppError::Io(std::io::Error::new(
            e.kind(),
            format!("{}: {e}", path.display()),
        ))
    })?;
    read_sets(file, opts)
}

pub fn from_bytes(bytes: &[u8], opts: &IngestOptions) -> AppResult<Vec<ParsedWorkoutSet>> {
    read_sets(bytes, opts)
}

/// Read an export and return its sets, sorted by date (stable).
pub fn read_sets<R: Read>(reader: R, opts: &IngestOptions) -> AppResult<Vec<ParsedWorkoutSet>> {
    let mut rdr = csv::ReaderBuilder::new()
        .delimiter(opts.delimiter)
        .trim(csv::Trim::All)
        .flexible(false)
        .from_reader(reader);

    let headers = rdr.headers()?.clone();
    let missing: Vec<String> = REQUIRED_COLUMNS
        .iter()
        .filter(|col| !headers.iter().any(|h| h == **col))
        .map(|col| col.to_string())
        .collect();
    if !missing.is_empty() {
        return Err(AppError::MissingColumn(missing));
    }

    let mut sets = Vec::new();
    let mut rest_rows = 0usize;
    let mut bad_durations = 0usize;

    for record in rdr.records() {
        let record = record?;
        let line = record.position().map(|p| p.line()).unwrap_or(0);
        let raw: RawLogRow = record.deserialize(Some(&headers))?;

        if raw.is_rest_marker(&opts.rest_timer_marker) {
            rest_rows += 1;
            continue;
        }

        let set = parse_row(raw, line, opts)?;
        if set.duration_minutes.is_none() {
            bad_durations += 1;
            log::debug!("line {line}: unparseable duration {:?}", set.duration);
        }
        sets.push(set);
    }

    sets.sort_by_key(|s| s.date);

    log::debug!(
        "ingested {} sets ({} rest timer rows skipped, {} unparseable durations)",
        sets.len(),
        rest_rows,
        bad_durations
    );

    Ok(sets)
}

fn parse_row(raw: RawLogRow, line: u64, opts: &IngestOptions) -> AppResult<ParsedWorkoutSet> {
    let date = parse_timestamp(&raw.date, &opts.date_formats).ok_or_else(|| {
        AppError::InvalidDate {
            line,
            value: raw.date.clone(),
        }
    })?;
    let weight = parse_weight(&raw.weight, line)?;
    let reps = parse_reps(&raw.reps, line)?;

    Ok(ParsedWorkoutSet::new(
        raw.set_order,
        date,
        raw.workout_name,
        raw.exercise_name,
        weight,
        reps,
        raw.duration,
    ))
}

/// Try each format in order; date-only formats resolve to midnight.
pub fn parse_timestamp(value: &str, formats: &[String]) -> Option<NaiveDateTime> {
    let value = value.trim();
    formats.iter().find_map(|fmt| {
        NaiveDateTime::parse_from_str(value, fmt)
            .ok()
            .or_else(|| {
                NaiveDate::parse_from_str(value, fmt)
                    .ok()
                    .and_then(|d| d.and_hms_opt(0, 0, 0))
            })
    })
}

fn parse_weight(value: &str, line: u64) -> AppResult<Option<f64>> {
    if value.is_empty() {
        return Ok(None);
    }
    match value.parse::<f64>() {
        Ok(w) if w.is_finite() && w >= 0.0 => Ok(Some(w)),
        _ => Err(AppError::InvalidNumber {
            line,
            field: "Weight",
            value: value.to_string(),
        }),
    }
}

/// Accepts integers and integral decimals ("8.0"), as some exports write them.
fn parse_reps(value: &str, line: u64) -> AppResult<Option<u32>> {
    if value.is_empty() {
        return Ok(None);
    }
    if let Ok(r) = value.parse::<u32>() {
        return Ok(Some(r));
    }
    match value.parse::<f64>() {
        Ok(r) if r >= 0.0 && r.fract() == 0.0 && r <= f64::from(u32::MAX) => Ok(Some(r as u32)),
        _ => Err(AppError::InvalidNumber {
            line,
            field: "Reps",
            value: value.to_string(),
        }),
    }
}
