use crate::cli::commands::open_db;
use crate::cli::parser::{Commands, FilterArgs};
use crate::config::Config;
use crate::core::filter_state::EventFilters;
use crate::core::list::ListLogic;
use crate::errors::AppResult;
use crate::models::{SortOrder, StatusFilter, TeamScope, TypeFilter, Visibility};
use crate::ui::events::event_table;
use crate::ui::messages::info;

impl FilterArgs {
    /// Start from the configured defaults and apply each given flag.
    pub fn to_filters(&self, cfg: &Config) -> AppResult<EventFilters> {
        let mut filters = EventFilters::from_config(cfg);

        if let Some(kind) = &self.kind {
            filters.set_kind(TypeFilter::parse(kind)?);
        }
        if let Some(status) = &self.status {
            filters.set_status(StatusFilter::parse(status)?);
        }
        if let Some(search) = &self.search {
            filters.set_search(search.as_str());
        }
        if self.no_team {
            filters.set_team(TeamScope::NoTeam);
        } else if let Some(team) = self.team {
            filters.set_team(TeamScope::Team(team));
        }
        if self.public {
            filters.set_visibility(Some(Visibility::Public));
        } else if self.private {
            filters.set_visibility(Some(Visibility::Private));
        }
        if let Some(sort) = &self.sort {
            filters.set_sort(SortOrder::parse(sort)?);
        }

        Ok(filters)
    }
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List { filters } = cmd {
        let filters = filters.to_filters(cfg)?;
        let mut pool = open_db(cfg)?;

        let events = ListLogic::visible(&mut pool, filters)?;
        if events.is_empty() {
            info("No events match the current filters.");
            return Ok(());
        }

        print!("{}", event_table(&events).render());
        println!("Total: {} event(s)", events.len());
    }

    Ok(())
}
