//! Formatting utilities used for CLI and export outputs.

pub const NO_DATA: &str = "no data";

pub fn mins2readable(mins: i64, want_sign: bool, short: bool) -> String {
    let abs_m = mins.abs();
    let hours = abs_m / 60;
    let minutes = abs_m % 60;

    let sign = if mins > 0 && want_sign {
        "+"
    } else if mins < 0 && want_sign {
        "-"
    } else {
        ""
    };

    if short {
        // e.g. +02:25
        format!("{}{:02}:{:02}", sign, hours, minutes)
    } else {
        // e.g. 02h 25m
        format!("{}{:02}h {:02}m", sign, hours, minutes)
    }
}

/// "63 mins (01h 03m)", or "no data".
pub fn describe_minutes(mins: Option<f64>) -> String {
    match mins {
        Some(m) => {
            let rounded = m.round() as i64;
            format!("{rounded} mins ({})", mins2readable(rounded, false, false))
        }
        None => NO_DATA.to_string(),
    }
}

/// Whole weights print without decimals, others with one.
pub fn format_weight(w: f64) -> String {
    if w.fract().abs() < f64::EPSILON {
        format!("{:.0}", w)
    } else {
        format!("{:.1}", w)
    }
}
