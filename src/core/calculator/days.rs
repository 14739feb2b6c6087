use crate::models::ParsedWorkoutSet;
use std::collections::HashSet;

/// Number of distinct calendar days with at least one set.
pub fn count_workout_days(sets: &[ParsedWorkoutSet]) -> usize {
    sets.iter().map(|s| s.day).collect::<HashSet<_>>().len()
}

/// Distinct workout names, in the order they first appear.
pub fn workout_types(sets: &[ParsedWorkoutSet]) -> Vec<String> {
    let mut seen = HashSet::new();
    sets.iter()
        .filter(|s| seen.insert(s.workout_name.as_str()))
        .map(|s| s.workout_name.clone())
        .collect()
}
