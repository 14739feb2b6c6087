// src/export/model.rs

use crate::models::{AggregateReport, ExerciseProgress, ParsedWorkoutSet, SpreadSummary};
use serde::Serialize;

/// Flat row for the CSV export of parsed sets.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct SetExport {
    pub date: String,
    pub day: String,
    pub month: String,
    pub workout_name: String,
    pub exercise_name: String,
    pub set_order: String,
    pub weight: Option<f64>,
    pub reps: Option<u32>,
    pub volume: Option<f64>,
    pub duration: String,
    pub duration_minutes: Option<u32>,
}

impl From<&ParsedWorkoutSet> for SetExport {
    fn from(s: &ParsedWorkoutSet) -> Self {
        Self {
            date: s.date.format("%Y-%m-%d %H:%M:%S").to_string(),
            day: s.day.to_string(),
            month: s.month.clone(),
            workout_name: s.workout_name.clone(),
            exercise_name: s.exercise_name.clone(),
            set_order: s.set_order.clone(),
            weight: s.weight,
            reps: s.reps,
            volume: s.volume,
            duration: s.duration.clone(),
            duration_minutes: s.duration_minutes,
        }
    }
}

/// Everything the JSON export carries: the report, the chart series and the sets.
#[derive(Serialize, Debug)]
pub struct ExportBundle<'a> {
    pub report: &'a AggregateReport,
    pub weight_progress: Vec<ExerciseProgress>,
    pub weight_spread: Vec<SpreadSummary>,
    pub duration_spread: Vec<SpreadSummary>,
    pub sets: &'a [ParsedWorkoutSet],
}
