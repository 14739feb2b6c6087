use crate::cli::commands::load_sets;
use crate::cli::parser::{Commands, SpreadKind};
use crate::config::Config;
use crate::core::series::{duration_spread, weight_spread};
use crate::errors::AppResult;
use crate::ui::messages::{header, warning};
use crate::utils::formatting::format_weight;
use crate::utils::table::Table;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Spread { file, by } = cmd {
        let sets = load_sets(file, cfg)?;

        let (title, group_label, summaries) = match by {
            SpreadKind::Weight => (
                format!("Monthly weight by exercise ({})", cfg.weight_unit),
                "EXERCISE",
                weight_spread(&sets),
            ),
            SpreadKind::Duration => (
                "Workout durations by month (mins)".to_string(),
                "WORKOUT",
                duration_spread(&sets),
            ),
        };

        if summaries.is_empty() {
            warning("Nothing to summarize in the input.");
            return Ok(());
        }

        header(title);
        let mut table = Table::new(&[
            "MONTH",
            group_label,
            "N",
            "MIN",
            "Q1",
            "MEDIAN",
            "Q3",
            "MAX",
        ]);
        for s in &summaries {
            table.add_row(vec![
                s.month.clone(),
                s.group.clone(),
                s.count.to_string(),
                format_weight(s.min),
                format_weight(s.q1),
                format_weight(s.median),
                format_weight(s.q3),
                format_weight(s.max),
            ]);
        }
        print!("{}", table.render());
    }
    Ok(())
}
