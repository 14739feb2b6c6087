use crate::models::ParsedWorkoutSet;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DurationStats {
    pub average: Option<f64>,
    pub longest: Option<u32>,
    pub unparseable: usize,
}

/// Mean and max over the rows whose duration parsed; the rest are only counted.
pub fn duration_stats(sets: &[ParsedWorkoutSet]) -> DurationStats {
    let parsed: Vec<u32> = sets.iter().filter_map(|s| s.duration_minutes).collect();
    let unparseable = sets.len() - parsed.len();

    if parsed.is_empty() {
        return DurationStats {
            unparseable,
            ..Default::default()
        };
    }

    let sum: u64 = parsed.iter().map(|&m| u64::from(m)).sum();

    DurationStats {
        average: Some(sum as f64 / parsed.len() as f64),
        longest: parsed.iter().copied().max(),
        unparseable,
    }
}
