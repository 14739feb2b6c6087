/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";
pub const GREEN: &str = "\x1b[32m";
pub const CYAN: &str = "\x1b[36m";

/// Grey out placeholders ("no data", "--"), leave real values untouched.
pub fn colorize_optional(value: &str) -> String {
    let v = value.trim();
    if v.is_empty() || v == "--" || v == super::formatting::NO_DATA {
        format!("{GREY}{value}{RESET}")
    } else {
        value.to_string()
    }
}
