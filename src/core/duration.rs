//! Free-text workout duration parsing ("1hr 3", "4m", "2hr", "30" → minutes).

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

static HOUR_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"([0-9]+)\s*(?:hr|hour|hours|h)").expect("valid hour regex"));

static MINUTE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"([0-9]+)\s*(?:m|min|minute|minutes)").expect("valid minute regex")
});

static BARE_NUMBER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]+$").expect("valid bare number regex"));

static TRAILING_MINUTES_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"([0-9]+)\s*(?:hr|hour|hours|h)\s*([0-9]+)$").expect("valid trailing regex")
});

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DurationError {
    #[error("unparseable duration: {0:?}")]
    Unparseable(String),
}

/// Convert a human-written duration into whole minutes.
///
/// Recognized shapes, after trimming and lowercasing:
/// - `<N> h|hr|hour|hours` adds `N * 60`
/// - `<N> m|min|minute|minutes` adds `N`
/// - a string made of digits only is taken as minutes
/// - an hour component followed by a bare number ("1hr 3") takes that number
///   as minutes, unless an explicit minute unit is present
///
/// Anything without a usable number/unit pair is `Unparseable`; the parser
/// never guesses when units are missing.
pub fn parse_duration(input: &str) -> Result<u32, DurationError> {
    let normalized = input.trim().to_lowercase();
    let unparseable = || DurationError::Unparseable(input.to_string());

    let hour = match HOUR_RE.captures(&normalized) {
        Some(c) => Some(number(&c[1]).ok_or_else(unparseable)?),
        None => None,
    };
    let minute = match MINUTE_RE.captures(&normalized) {
        Some(c) => Some(number(&c[1]).ok_or_else(unparseable)?),
        None => None,
    };

    let mut total: u32 = 0;

    if let Some(h) = hour {
        total = h.checked_mul(60).ok_or_else(unparseable)?;
    }

    match (hour, minute) {
        (_, Some(m)) => {
            total = total.checked_add(m).ok_or_else(unparseable)?;
        }
        (None, None) => {
            if BARE_NUMBER_RE.is_match(&normalized) {
                return number(&normalized).ok_or_else(unparseable);
            }
            return Err(unparseable());
        }
        (Some(_), None) => {
            if let Some(c) = TRAILING_MINUTES_RE.captures(&normalized) {
                let m = number(&c[2]).ok_or_else(unparseable)?;
                total = total.checked_add(m).ok_or_else(unparseable)?;
            }
        }
    }

    Ok(total)
}

/// `None` when the digits do not fit in a u32.
fn number(digits: &str) -> Option<u32> {
    digits.parse().ok()
}
