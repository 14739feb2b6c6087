use serde::Deserialize;

/// Column names every Strong export must carry.
pub const REQUIRED_COLUMNS: [&str; 7] = [
    "Set Order",
    "Date",
    "Workout Name",
    "Exercise Name",
    "Weight",
    "Reps",
    "Duration",
];

/// One line of the export, as read from the CSV.
///
/// Numeric columns stay textual here: they are validated by the ingestion
/// step, which knows the line number to report.
#[derive(Debug, Clone, Deserialize)]
pub struct RawLogRow {
    #[serde(rename = "Set Order")]
    pub set_order: String,
    #[serde(rename = "Date")]
    pub date: String,
    #[serde(rename = "Workout Name")]
    pub workout_name: String,
    #[serde(rename = "Exercise Name")]
    pub exercise_name: String,
    #[serde(rename = "Weight")]
    pub weight: String,
    #[serde(rename = "Reps")]
    pub reps: String,
    #[serde(rename = "Duration")]
    pub duration: String,
}

impl RawLogRow {
    /// True for the rest markers the app interleaves between sets.
    pub fn is_rest_marker(&self, marker: &str) -> bool {
        self.set_order.trim() == marker
    }
}
