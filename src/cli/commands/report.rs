use crate::cli::commands::load_sets;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::Core;
use crate::errors::AppResult;
use crate::models::AggregateReport;
use crate::ui::messages::{header, warning};
use crate::utils::colors::{CYAN, GREEN, RESET, colorize_optional};
use crate::utils::formatting::{NO_DATA, describe_minutes, format_weight};
use crate::utils::table::Table;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Report { file, json } = cmd {
        let sets = load_sets(file, cfg)?;
        let report = Core::aggregate(&sets, cfg.best_month_rule);

        if *json {
            println!("{}", serde_json::to_string_pretty(&report)?);
            return Ok(());
        }

        if report.is_empty() {
            warning("No workout sets found in the input.");
            return Ok(());
        }

        print_metrics(&report);
        println!();
        print_records(&report, &cfg.weight_unit);
    }
    Ok(())
}

fn print_metrics(report: &AggregateReport) {
    header("Key metrics");

    let best_month = report
        .best_month
        .as_ref()
        .map(|b| format!("{} ({} days)", b.month, b.days))
        .unwrap_or_else(|| NO_DATA.to_string());
    let longest = describe_minutes(report.longest_workout_minutes.map(f64::from));

    println!(
        "{}• Total workout days:{} {}{}{}",
        CYAN, RESET, GREEN, report.total_workout_days, RESET
    );
    println!("{}• Best month:{} {}", CYAN, RESET, best_month);
    println!(
        "{}• Avg workout length:{} {}",
        CYAN,
        RESET,
        colorize_optional(&describe_minutes(report.avg_duration_minutes))
    );
    println!(
        "{}• Longest workout:{} {}",
        CYAN,
        RESET,
        colorize_optional(&longest)
    );
    println!(
        "{}• Sets:{} {} ({} with unparseable duration)",
        CYAN, RESET, report.total_sets, report.unparseable_durations
    );
    println!(
        "{}• Workout types:{} {}",
        CYAN,
        RESET,
        report.workout_types.join(", ")
    );
}

fn print_records(report: &AggregateReport, unit: &str) {
    header("Personal records");
    println!("Best total volume for a set (weight x reps)\n");

    let mut table = Table::new(&["EXERCISE", "VOLUME", "SET", "DAY"]);
    for (exercise, record) in &report.personal_records {
        let row = match record {
            Some(r) => vec![
                exercise.clone(),
                format!("{} {unit}", format_weight(r.volume)),
                format!("{} {unit} x {}", format_weight(r.weight), r.reps),
                r.day.to_string(),
            ],
            None => vec![
                exercise.clone(),
                NO_DATA.to_string(),
                "--".to_string(),
                "--".to_string(),
            ],
        };
        table.add_row(row);
    }
    print!("{}", table.render());
}
