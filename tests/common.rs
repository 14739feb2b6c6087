#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::NaiveDateTime;
use std::fs;
use std::path::{Path, PathBuf};
use strongdash::models::ParsedWorkoutSet;

pub fn sd() -> Command {
    cargo_bin_cmd!("strongdash")
}

/// Small Strong export: two workout days in March, three in April, one
/// rest timer row, one set with an unparseable duration and one bodyweight set.
pub const SAMPLE_EXPORT: &str = "\
Date,Workout Name,Duration,Exercise Name,Set Order,Weight,Reps,Distance,Seconds,Notes,Workout Notes,RPE
2024-03-04 18:00:00,Push Day,1hr 3,Bench Press (Barbell),1,60,8,0,0,,,
2024-03-04 18:00:00,Push Day,1hr 3,Bench Press (Barbell),Rest Timer,0,0,0,90,,,
2024-03-04 18:00:00,Push Day,1hr 3,Bench Press (Barbell),2,70,6,0,0,,,
2024-03-11 18:00:00,Pull Day,45m,Deadlift (Barbell),1,100,5,0,0,,,
2024-04-01 07:30:00,Push Day,garbage,Bench Press (Barbell),1,100,5,0,0,,,
2024-04-03 07:30:00,Legs,2hr,Squat (Barbell),1,90,5,0,0,,,
2024-04-05 07:30:00,Pull Day,50,Deadlift (Barbell),1,110,3,0,0,,,
2024-04-05 07:30:00,Pull Day,50,Plank,1,,,0,60,,,
";

/// Write `content` to `dir/name` and return the path.
pub fn write_file(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, content).expect("write test file");
    path
}

/// A config path that does not exist, so tests never pick up a user config.
pub fn no_config(dir: &Path) -> String {
    dir.join("missing.conf").to_string_lossy().to_string()
}

pub fn dt(s: &str) -> NaiveDateTime {
    NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S").expect("valid test timestamp")
}

pub fn set(
    date: &str,
    workout: &str,
    exercise: &str,
    weight: Option<f64>,
    reps: Option<u32>,
    duration: &str,
) -> ParsedWorkoutSet {
    ParsedWorkoutSet::new("1", dt(date), workout, exercise, weight, reps, duration)
}
