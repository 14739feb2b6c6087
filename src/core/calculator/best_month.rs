use crate::config::BestMonthRule;
use crate::models::{BestMonth, ParsedWorkoutSet};
use chrono::NaiveDate;
use std::collections::HashSet;

struct MonthTally {
    month: String,
    days: HashSet<NaiveDate>,
    sets: usize,
}

/// Pick the month with the most workout days (or sets, depending on `rule`).
///
/// Ties go to the month met first once rows are ordered by date.
pub fn find_best_month(sets: &[ParsedWorkoutSet], rule: BestMonthRule) -> Option<BestMonth> {
    let mut ordered: Vec<&ParsedWorkoutSet> = sets.iter().collect();
    ordered.sort_by_key(|s| s.date);

    // Kept in first-seen order so a strict `>` below resolves ties.
    let mut tallies: Vec<MonthTally> = Vec::new();
    for set in ordered {
        match tallies.iter_mut().find(|t| t.month == set.month) {
            Some(t) => {
                t.days.insert(set.day);
                t.sets += 1;
            }
            None => tallies.push(MonthTally {
                month: set.month.clone(),
                days: HashSet::from([set.day]),
                sets: 1,
            }),
        }
    }

    let score = |t: &MonthTally| match rule {
        BestMonthRule::DistinctDays => t.days.len(),
        BestMonthRule::MostSets => t.sets,
    };

    let mut best: Option<&MonthTally> = None;
    for t in &tallies {
        if best.is_none_or(|b| score(t) > score(b)) {
            best = Some(t);
        }
    }

    best.map(|t| BestMonth {
        month: t.month.clone(),
        days: t.days.len(),
    })
}
