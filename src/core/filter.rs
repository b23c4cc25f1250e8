//! Event filter/sort pipeline.
//!
//! Stages run in a fixed order (type, status, team, visibility, search,
//! sort) and each one only narrows the list left by the previous stage.

use crate::models::{Event, FilterState, SortOrder, StatusFilter, TeamScope, TypeFilter, Visibility};
use chrono::{DateTime, Utc};

/// Run the pipeline against the current time.
pub fn apply_filters(events: &[Event], state: &FilterState) -> Vec<Event> {
    apply_filters_at(events, state, Utc::now())
}

/// Run the pipeline with a fixed `now`, shared by every element.
pub fn apply_filters_at(events: &[Event], state: &FilterState, now: DateTime<Utc>) -> Vec<Event> {
    let mut out: Vec<Event> = events.to_vec();

    by_type(&mut out, state.kind);
    by_status(&mut out, state.status, now);
    by_team(&mut out, state.team);
    if let Some(visibility) = state.visibility {
        by_visibility(&mut out, visibility);
    }
    by_search(&mut out, &state.search);
    sort_by_start(&mut out, state.sort);

    out
}

pub fn by_type(events: &mut Vec<Event>, kind: TypeFilter) {
    if let TypeFilter::Only(k) = kind {
        events.retain(|ev| ev.kind == k);
    }
}

pub fn by_status(events: &mut Vec<Event>, status: StatusFilter, now: DateTime<Utc>) {
    match status {
        StatusFilter::All => {}
        StatusFilter::Upcoming => events.retain(|ev| ev.start_time >= now),
        StatusFilter::Past => events.retain(|ev| ev.end_time < now),
    }
}

pub fn by_team(events: &mut Vec<Event>, team: TeamScope) {
    match team {
        TeamScope::Any => {}
        TeamScope::NoTeam => events.retain(|ev| ev.team_id.is_none()),
        TeamScope::Team(id) => events.retain(|ev| ev.team_id == Some(id)),
    }
}

pub fn by_visibility(events: &mut Vec<Event>, visibility: Visibility) {
    events.retain(|ev| ev.visibility == visibility);
}

/// Case-insensitive substring match on any searchable field.
pub fn by_search(events: &mut Vec<Event>, query: &str) {
    if query.is_empty() {
        return;
    }

    let needle = query.to_lowercase();
    events.retain(|ev| {
        ev.searchable_fields()
            .into_iter()
            .flatten()
            .any(|field| field.to_lowercase().contains(&needle))
    });
}

/// Stable: events starting at the same instant keep their relative order.
pub fn sort_by_start(events: &mut [Event], order: SortOrder) {
    match order {
        SortOrder::Asc => events.sort_by(|a, b| a.start_time.cmp(&b.start_time)),
        SortOrder::Desc => events.sort_by(|a, b| b.start_time.cmp(&a.start_time)),
    }
}
