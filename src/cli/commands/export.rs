use crate::cli::commands::load_sets;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::Core;
use crate::errors::AppResult;
use crate::export::ExportLogic;
use crate::utils::path::expand_tilde;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        file,
        format,
        out,
        force,
    } = cmd
    {
        let sets = load_sets(file, cfg)?;
        let report = Core::aggregate(&sets, cfg.best_month_rule);
        ExportLogic::export(&sets, &report, *format, &expand_tilde(out), *force)?;
    }
    Ok(())
}
