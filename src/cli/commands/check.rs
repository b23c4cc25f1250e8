use crate::cli::commands::open_db;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::checker::ConflictChecker;
use crate::core::conflicts::ConflictQuery;
use crate::errors::AppResult;
use crate::ui::conflicts::print_conflict_warning;
use crate::ui::messages::success;
use crate::utils::time::parse_datetime;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Check {
        start,
        end,
        team,
        exclude,
    } = cmd
    {
        let query = ConflictQuery::new(Some(parse_datetime(start)?), Some(parse_datetime(end)?))
            .for_team(*team)
            .excluding(*exclude);

        let mut pool = open_db(cfg)?;
        let mut checker = ConflictChecker::new();

        match checker.run(&mut pool, &query) {
            Some(report) if !report.is_empty() => {
                print_conflict_warning(report, cfg.conflict_preview_limit)
            }
            _ => success("No conflicts found."),
        }
    }

    Ok(())
}
