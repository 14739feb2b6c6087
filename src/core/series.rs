//! Chart-ready series: weight progression and monthly spreads.

use crate::core::calculator::spread;
use crate::models::{ExerciseProgress, ParsedWorkoutSet, SpreadSummary, WeightPoint};
use std::collections::BTreeMap;

/// Heaviest weight per day for each exercise, exercises sorted by name.
///
/// Sets without a weight (cardio, bodyweight) do not produce points; an
/// exercise with no weighted set is left out.
pub fn weight_progress(sets: &[ParsedWorkoutSet]) -> Vec<ExerciseProgress> {
    let mut by_exercise: BTreeMap<&str, Vec<WeightPoint>> = BTreeMap::new();

    for set in ordered(sets) {
        let Some(weight) = set.weight else { continue };
        let points = by_exercise.entry(set.exercise_name.as_str()).or_default();

        match points.last_mut() {
            Some(last) if last.day == set.day => {
                if weight > last.weight {
                    last.weight = weight;
                }
            }
            _ => points.push(WeightPoint {
                day: set.day,
                weight,
            }),
        }
    }

    by_exercise
        .into_iter()
        .map(|(exercise, points)| ExerciseProgress {
            exercise: exercise.to_string(),
            points,
        })
        .collect()
}

/// Weight distribution per month and exercise.
pub fn weight_spread(sets: &[ParsedWorkoutSet]) -> Vec<SpreadSummary> {
    spread_by(sets, |s| &s.exercise_name, |s| s.weight)
}

/// Duration distribution per month and workout name, one value per row.
pub fn duration_spread(sets: &[ParsedWorkoutSet]) -> Vec<SpreadSummary> {
    spread_by(
        sets,
        |s| &s.workout_name,
        |s| s.duration_minutes.map(f64::from),
    )
}

/// Group values by (month, group key). Months follow their first appearance
/// in date order, groups are sorted by name within a month.
fn spread_by<G, V>(sets: &[ParsedWorkoutSet], group: G, value: V) -> Vec<SpreadSummary>
where
    G: Fn(&ParsedWorkoutSet) -> &String,
    V: Fn(&ParsedWorkoutSet) -> Option<f64>,
{
    let mut months: Vec<(&str, BTreeMap<&str, Vec<f64>>)> = Vec::new();

    for set in ordered(sets) {
        let Some(v) = value(set) else { continue };

        let idx = match months.iter().position(|(m, _)| *m == set.month) {
            Some(i) => i,
            None => {
                months.push((set.month.as_str(), BTreeMap::new()));
                months.len() - 1
            }
        };
        months[idx].1.entry(group(set).as_str()).or_default().push(v);
    }

    months
        .iter()
        .flat_map(|(month, groups)| {
            groups
                .iter()
                .filter_map(move |(g, values)| spread::summarize(month, g, values))
        })
        .collect()
}

fn ordered(sets: &[ParsedWorkoutSet]) -> Vec<&ParsedWorkoutSet> {
    let mut v: Vec<&ParsedWorkoutSet> = sets.iter().collect();
    v.sort_by_key(|s| s.date);
    v
}
