pub mod raw_row;
pub mod report;
pub mod series;
pub mod workout_set;

pub use raw_row::RawLogRow;
pub use report::{AggregateReport, BestMonth, RecordSet};
pub use series::{ExerciseProgress, SpreadSummary, WeightPoint};
pub use workout_set::ParsedWorkoutSet;
