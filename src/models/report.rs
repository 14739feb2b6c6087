use chrono::NaiveDate;
use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BestMonth {
    pub month: String,
    /// Distinct workout days logged in that month.
    pub days: usize,
}

/// The heaviest set (by volume) logged for an exercise.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecordSet {
    pub volume: f64,
    pub weight: f64,
    pub reps: u32,
    pub day: NaiveDate,
}

/// Key metrics for one export. Optional metrics are `None` when no row
/// carries usable data for them.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AggregateReport {
    pub total_sets: usize,
    pub total_workout_days: usize,
    pub workout_types: Vec<String>,
    pub best_month: Option<BestMonth>,
    pub avg_duration_minutes: Option<f64>,
    pub longest_workout_minutes: Option<u32>,
    pub unparseable_durations: usize,
    /// Every exercise seen; `None` when none of its sets has both weight and reps.
    pub personal_records: BTreeMap<String, Option<RecordSet>>,
}

impl AggregateReport {
    pub fn is_empty(&self) -> bool {
        self.total_sets == 0
    }

    pub fn record_volume(&self, exercise: &str) -> Option<f64> {
        self.personal_records
            .get(exercise)
            .and_then(|r| r.as_ref())
            .map(|r| r.volume)
    }
}
