use crate::cli::parser::Commands;
use crate::core::parse_duration;
use crate::errors::AppResult;
use crate::utils::mins2readable;
use crate::utils::table::Table;

pub fn handle(cmd: &Commands) -> AppResult<()> {
    if let Commands::Duration { inputs } = cmd {
        let mut table = Table::new(&["INPUT", "MINUTES", "READABLE"]);

        for input in inputs {
            let row = match parse_duration(input) {
                Ok(m) => vec![
                    format!("{input:?}"),
                    m.to_string(),
                    mins2readable(i64::from(m), false, false),
                ],
                Err(e) => {
                    log::debug!("{e}");
                    vec![
                        format!("{input:?}"),
                        "--".to_string(),
                        "unparseable".to_string(),
                    ]
                }
            };
            table.add_row(row);
        }

        print!("{}", table.render());
    }
    Ok(())
}
