use crate::cli::commands::load_sets;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::series::weight_progress;
use crate::errors::AppResult;
use crate::ui::messages::{header, warning};
use crate::utils::formatting::format_weight;
use crate::utils::table::Table;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Progress { file, exercise } = cmd {
        let sets = load_sets(file, cfg)?;

        let progress: Vec<_> = weight_progress(&sets)
            .into_iter()
            .filter(|p| {
                exercise
                    .as_ref()
                    .is_none_or(|name| p.exercise.eq_ignore_ascii_case(name))
            })
            .collect();

        if progress.is_empty() {
            match exercise {
                Some(name) => warning(format!("No weighted sets found for '{name}'.")),
                None => warning("No weighted sets found in the input."),
            }
            return Ok(());
        }

        for p in &progress {
            header(&p.exercise);
            let mut table = Table::new(&["DAY", "WEIGHT"]);
            for point in &p.points {
                table.add_row(vec![
                    point.day.to_string(),
                    format!("{} {}", format_weight(point.weight), cfg.weight_unit),
                ]);
            }
            print!("{}", table.render());
            println!();
        }
    }
    Ok(())
}
