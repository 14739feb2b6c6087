pub mod calculator;
pub mod duration;
pub mod ingest;
pub mod logic;
pub mod series;

pub use duration::{DurationError, parse_duration};
pub use logic::Core;
