pub mod best_month;
pub mod days;
pub mod durations;
pub mod records;
pub mod spread;
