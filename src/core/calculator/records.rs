use crate::models::{ParsedWorkoutSet, RecordSet};
use std::collections::BTreeMap;

/// Best set by volume for every exercise. The earliest set wins a tie.
pub fn personal_records(sets: &[ParsedWorkoutSet]) -> BTreeMap<String, Option<RecordSet>> {
    let mut ordered: Vec<&ParsedWorkoutSet> = sets.iter().collect();
    ordered.sort_by_key(|s| s.date);

    let mut records: BTreeMap<String, Option<RecordSet>> = BTreeMap::new();

    for set in ordered {
        let entry = records.entry(set.exercise_name.clone()).or_insert(None);

        let (Some(volume), Some(weight), Some(reps)) = (set.volume, set.weight, set.reps) else {
            continue;
        };

        if entry.as_ref().is_none_or(|best| volume > best.volume) {
            *entry = Some(RecordSet {
                volume,
                weight,
                reps,
                day: set.day,
            });
        }
    }

    records
}
