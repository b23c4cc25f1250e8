use crate::config::Config;
use crate::core::filter::apply_filters;
use crate::models::{Event, FilterState, SortOrder, StatusFilter, TeamScope, TypeFilter, Visibility};

/// Holds the filter criteria of one event list view.
#[derive(Debug, Clone, Default)]
pub struct EventFilters {
    state: FilterState,
    defaults: FilterState,
}

impl EventFilters {
    pub fn new() -> Self {
        Self::default()
    }

    /// Defaults taken from the configured status and sort order.
    pub fn from_config(cfg: &Config) -> Self {
        let defaults = FilterState {
            status: cfg.default_status,
            sort: cfg.default_sort,
            ..FilterState::default()
        };
        Self {
            state: defaults.clone(),
            defaults,
        }
    }

    pub fn state(&self) -> &FilterState {
        &self.state
    }

    pub fn set_kind(&mut self, kind: TypeFilter) {
        self.state.kind = kind;
    }

    pub fn set_status(&mut self, status: StatusFilter) {
        self.state.status = status;
    }

    pub fn set_search(&mut self, search: impl Into<String>) {
        self.state.search = search.into();
    }

    pub fn set_sort(&mut self, sort: SortOrder) {
        self.state.sort = sort;
    }

    pub fn set_team(&mut self, team: TeamScope) {
        self.state.team = team;
    }

    pub fn set_visibility(&mut self, visibility: Option<Visibility>) {
        self.state.visibility = visibility;
    }

    pub fn reset(&mut self) {
        self.state = self.defaults.clone();
    }

    pub fn apply(&self, events: &[Event]) -> Vec<Event> {
        apply_filters(events, &self.state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::EventType;

    #[test]
    fn setters_touch_one_field() {
        let mut filters = EventFilters::new();
        filters.set_team(TeamScope::Team(4));

        let state = filters.state();
        assert_eq!(state.team, TeamScope::Team(4));
        assert_eq!(state.kind, TypeFilter::All);
        assert_eq!(state.status, StatusFilter::Upcoming);

        filters.set_kind(TypeFilter::Only(EventType::Match));
        filters.set_search("derby");
        assert_eq!(filters.state().team, TeamScope::Team(4));
        assert_eq!(filters.state().search, "derby");
    }

    #[test]
    fn reset_restores_defaults() {
        let mut filters = EventFilters::new();
        filters.set_status(StatusFilter::Past);
        filters.set_sort(SortOrder::Desc);
        filters.set_visibility(Some(Visibility::Private));
        filters.set_team(TeamScope::NoTeam);

        filters.reset();
        assert_eq!(*filters.state(), FilterState::default());
    }

    #[test]
    fn config_defaults_survive_reset() {
        let cfg = Config {
            default_status: StatusFilter::All,
            default_sort: SortOrder::Desc,
            ..Config::default()
        };
        let mut filters = EventFilters::from_config(&cfg);
        filters.set_status(StatusFilter::Past);
        filters.reset();

        assert_eq!(filters.state().status, StatusFilter::All);
        assert_eq!(filters.state().sort, SortOrder::Desc);
    }
}
