use crate::cli::commands::{open_db, write_options};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::edit::{EditLogic, EventPatch};
use crate::errors::{AppError, AppResult};
use crate::models::{EventType, Visibility};
use crate::utils::time::parse_optional_datetime;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Edit {
        id,
        title,
        start,
        end,
        kind,
        location,
        description,
        no_desc,
        team,
        no_team,
        visibility,
        opponent,
        no_opponent,
        category,
        no_category,
        strict,
    } = cmd
    {
        let kind = kind
            .as_ref()
            .map(|k| EventType::et_from_str(k).ok_or_else(|| AppError::InvalidEventType(k.clone())))
            .transpose()?;

        let visibility = visibility
            .as_ref()
            .map(|v| Visibility::from_code(v).ok_or_else(|| AppError::InvalidVisibility(v.clone())))
            .transpose()?;

        let team = if *no_team { Some(None) } else { team.map(Some) };

        let patch = EventPatch {
            title: title.clone(),
            description: clearable(description, *no_desc),
            start_time: parse_optional_datetime(start.as_ref())?,
            end_time: parse_optional_datetime(end.as_ref())?,
            location: location.clone(),
            kind,
            visibility,
            team,
            opponent: clearable(opponent, *no_opponent),
            category: clearable(category, *no_category),
        };

        let mut pool = open_db(cfg)?;
        EditLogic::apply(&mut pool, *id, patch, write_options(cfg, *strict))?;
    }

    Ok(())
}

/// `--no-<field>` clears, a value replaces, neither leaves it untouched.
fn clearable(value: &Option<String>, clear: bool) -> Option<Option<String>> {
    if clear { Some(None) } else { value.clone().map(Some) }
}
