use crate::core::duration::parse_duration;
use chrono::{NaiveDate, NaiveDateTime};
use serde::Serialize;

/// A logged set after ingestion: dates resolved, duration parsed, volume computed.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParsedWorkoutSet {
    pub set_order: String,
    pub date: NaiveDateTime,
    pub day: NaiveDate,
    pub month: String,
    pub workout_name: String,
    pub exercise_name: String,
    pub weight: Option<f64>,
    pub reps: Option<u32>,
    pub duration: String,
    /// `None` when the duration text could not be parsed.
    pub duration_minutes: Option<u32>,
    pub volume: Option<f64>,
}

impl ParsedWorkoutSet {
    pub fn new(
        set_order: impl Into<String>,
        date: NaiveDateTime,
        workout_name: impl Into<String>,
        exercise_name: impl Into<String>,
        weight: Option<f64>,
        reps: Option<u32>,
        duration: impl Into<String>,
    ) -> Self {
        let duration = duration.into();
        let duration_minutes = parse_duration(&duration).ok();
        let volume = match (weight, reps) {
            (Some(w), Some(r)) => Some(w * f64::from(r)),
            _ => None,
        };

        Self {
            set_order: set_order.into(),
            date,
            day: date.date(),
            month: date.format("%B").to_string(),
            workout_name: workout_name.into(),
            exercise_name: exercise_name.into(),
            weight,
            reps,
            duration,
            duration_minutes,
            volume,
        }
    }
}
