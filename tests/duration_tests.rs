use strongdash::{DurationError, parse_duration};

#[test]
fn test_hours_with_trailing_bare_minutes() {
    assert_eq!(parse_duration("1hr 3"), Ok(63));
}

#[test]
fn test_explicit_minute_unit_wins() {
    assert_eq!(parse_duration("1hr 3m"), Ok(63));
    assert_eq!(parse_duration("2hr 15min"), Ok(135));
}

#[test]
fn test_single_units() {
    assert_eq!(parse_duration("1hr"), Ok(60));
    assert_eq!(parse_duration("2hr"), Ok(120));
    assert_eq!(parse_duration("4m"), Ok(4));
    assert_eq!(parse_duration("3 hours"), Ok(180));
    assert_eq!(parse_duration("45 minutes"), Ok(45));
}

#[test]
fn test_bare_number_is_minutes() {
    assert_eq!(parse_duration("30"), Ok(30));
    assert_eq!(parse_duration("0"), Ok(0));
}

#[test]
fn test_normalizes_case_and_whitespace() {
    assert_eq!(parse_duration("  1HR 3  "), Ok(63));
    assert_eq!(parse_duration("\t30\n"), Ok(30));
    assert_eq!(parse_duration("1 Hour 30"), Ok(90));
}

#[test]
fn test_zero_with_unit_is_valid() {
    assert_eq!(parse_duration("0hr"), Ok(0));
    assert_eq!(parse_duration("0m"), Ok(0));
}

#[test]
fn test_unparseable_inputs() {
    for input in ["", "   ", "invalid string", "garbage", "3 30", "hr", "1.5"] {
        assert_eq!(
            parse_duration(input),
            Err(DurationError::Unparseable(input.to_string())),
            "input {input:?}"
        );
    }
}

#[test]
fn test_overflow_is_unparseable() {
    assert!(parse_duration("99999999999").is_err());
    assert!(parse_duration("99999999hr").is_err());
}

#[test]
fn test_hours_are_sixty_minutes_each() {
    for n in (0..=48).chain([100, 999, 10_000]) {
        assert_eq!(parse_duration(&format!("{n}hr")), Ok(60 * n), "{n}hr");
    }
}

#[test]
fn test_bare_digits_round_trip() {
    for n in [1u32, 7, 42, 59, 60, 61, 240, 1_000_000] {
        assert_eq!(parse_duration(&n.to_string()), Ok(n));
    }
}
