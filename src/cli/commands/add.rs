use crate::cli::commands::{open_db, write_options};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::add::AddLogic;
use crate::errors::{AppError, AppResult};
use crate::models::{Event, EventType, Visibility};
use crate::utils::time::parse_datetime;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Add {
        title,
        start,
        end,
        kind,
        location,
        description,
        team,
        private,
        opponent,
        category,
        strict,
    } = cmd
    {
        let start = parse_datetime(start)?;
        let end = parse_datetime(end)?;
        let kind = EventType::et_from_str(kind).ok_or_else(|| AppError::InvalidEventType(kind.clone()))?;

        let visibility = if *private {
            Visibility::Private
        } else {
            Visibility::Public
        };

        let ev = Event::new(title.clone(), start, end, location.clone(), kind)
            .with_description(description.clone())
            .with_team(*team)
            .with_visibility(visibility)
            .with_opponent(opponent.clone())
            .with_category(category.clone());

        let mut pool = open_db(cfg)?;
        AddLogic::apply(&mut pool, ev, write_options(cfg, *strict))?;
    }

    Ok(())
}
