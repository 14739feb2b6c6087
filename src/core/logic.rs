use crate::config::BestMonthRule;
use crate::core::calculator::{best_month, days, durations, records};
use crate::models::{AggregateReport, ParsedWorkoutSet};

pub struct Core;

impl Core {
    /// Compute the key metrics of an export. Pure: same input, same report.
    pub fn aggregate(sets: &[ParsedWorkoutSet], rule: BestMonthRule) -> AggregateReport {
        if sets.is_empty() {
            return AggregateReport::default();
        }

        let stats = durations::duration_stats(sets);

        AggregateReport {
            total_sets: sets.len(),
            total_workout_days: days::count_workout_days(sets),
            workout_types: days::workout_types(sets),
            best_month: best_month::find_best_month(sets, rule),
            avg_duration_minutes: stats.average,
            longest_workout_minutes: stats.longest,
            unparseable_durations: stats.unparseable,
            personal_records: records::personal_records(sets),
        }
    }
}
