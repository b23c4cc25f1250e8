use crate::cli::commands::open_db;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::export::ExportLogic;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        filters,
        force,
    } = cmd
    {
        let filters = filters.to_filters(cfg)?;
        let mut pool = open_db(cfg)?;
        ExportLogic::export(&mut pool, format.clone(), file, filters, *force)?;
    }

    Ok(())
}
