use chrono::NaiveDate;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeightPoint {
    pub day: NaiveDate,
    pub weight: f64,
}

/// Weight progression of a single exercise, one point per workout day.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExerciseProgress {
    pub exercise: String,
    pub points: Vec<WeightPoint>,
}

/// Five-number summary of the values observed for `group` during `month`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SpreadSummary {
    pub month: String,
    pub group: String,
    pub count: usize,
    pub min: f64,
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
    pub max: f64,
}
