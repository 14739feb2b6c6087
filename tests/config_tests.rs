use strongdash::config::{BestMonthRule, Config};
use strongdash::errors::AppError;

#[test]
fn test_defaults() {
    let cfg = Config::default();

    assert_eq!(cfg.rest_timer_marker, "Rest Timer");
    assert_eq!(cfg.delimiter_byte().unwrap(), b',');
    assert_eq!(cfg.best_month_rule, BestMonthRule::DistinctDays);
    assert!(cfg.check().is_empty());
}

#[test]
fn test_partial_yaml_fills_defaults() {
    let cfg = Config::from_yaml("weight_unit: lb\n").unwrap();

    assert_eq!(cfg.weight_unit, "lb");
    assert_eq!(cfg.date_formats, Config::default().date_formats);
    assert_eq!(Config::from_yaml("").unwrap(), Config::default());
}

#[test]
fn test_yaml_round_trip_keeps_rule() {
    let cfg = Config {
        best_month_rule: BestMonthRule::MostSets,
        ..Config::default()
    };
    let yaml = cfg.to_yaml().unwrap();

    assert!(yaml.contains("best_month_rule: most_sets"));
    assert_eq!(Config::from_yaml(&yaml).unwrap(), cfg);
}

#[test]
fn test_check_lists_every_problem() {
    let cfg = Config {
        delimiter: "".to_string(),
        date_formats: vec![],
        rest_timer_marker: " ".to_string(),
        ..Config::default()
    };

    assert_eq!(cfg.check().len(), 3);
    assert!(matches!(cfg.delimiter_byte(), Err(AppError::Config(_))));
}

#[test]
fn test_load_missing_file_uses_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.conf");
    let cfg = Config::load(Some(path.as_path())).unwrap();

    assert_eq!(cfg, Config::default());
}
