//! Scheduling conflict detection.
//!
//! Two events conflict when their closed intervals `[start, end]` overlap,
//! so an event ending exactly when another starts is still a conflict.

use crate::core::source::EventSource;
use crate::models::Event;
use chrono::{DateTime, Utc};
use serde::Serialize;

pub const DEFAULT_PREVIEW_LIMIT: usize = 3;

pub fn overlaps(
    a_start: DateTime<Utc>,
    a_end: DateTime<Utc>,
    b_start: DateTime<Utc>,
    b_end: DateTime<Utc>,
) -> bool {
    a_start <= b_end && a_end >= b_start
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConflictQuery {
    pub start: Option<DateTime<Utc>>,
    pub end: Option<DateTime<Utc>>,
    pub team_id: Option<i64>,
    pub exclude_id: Option<i64>,
}

impl ConflictQuery {
    pub fn new(start: Option<DateTime<Utc>>, end: Option<DateTime<Utc>>) -> Self {
        Self {
            start,
            end,
            ..Self::default()
        }
    }

    pub fn for_team(mut self, team_id: Option<i64>) -> Self {
        self.team_id = team_id;
        self
    }

    pub fn excluding(mut self, event_id: Option<i64>) -> Self {
        self.exclude_id = event_id;
        self
    }

    /// Both bounds, or nothing to check.
    pub fn window(&self) -> Option<(DateTime<Utc>, DateTime<Utc>)> {
        Some((self.start?, self.end?))
    }

    pub fn matches(&self, ev: &Event) -> bool {
        let Some((start, end)) = self.window() else {
            return false;
        };

        if let Some(team) = self.team_id
            && ev.team_id != Some(team)
        {
            return false;
        }

        if self.exclude_id == Some(ev.id) {
            return false;
        }

        overlaps(start, end, ev.start_time, ev.end_time)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ConflictReport {
    pub conflicts: Vec<Event>,
}

/// What a warning shows: the first few conflicts by name, the rest as a count.
#[derive(Debug, PartialEq)]
pub struct ConflictPreview<'a> {
    pub shown: &'a [Event],
    pub remaining: usize,
}

impl ConflictPreview<'_> {
    /// "+N more", or `None` when everything is shown.
    pub fn more_label(&self) -> Option<String> {
        (self.remaining > 0).then(|| format!("+{} more", self.remaining))
    }
}

impl ConflictReport {
    pub fn count(&self) -> usize {
        self.conflicts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.conflicts.is_empty()
    }

    pub fn preview(&self, limit: usize) -> ConflictPreview<'_> {
        let shown = &self.conflicts[..self.conflicts.len().min(limit)];
        ConflictPreview {
            shown,
            remaining: self.conflicts.len() - shown.len(),
        }
    }
}

/// Pure check over an in-memory list; keeps the list's order.
pub fn find_conflicts(events: &[Event], query: &ConflictQuery) -> ConflictReport {
    if query.window().is_none() {
        return ConflictReport::default();
    }

    ConflictReport {
        conflicts: events.iter().filter(|ev| query.matches(ev)).cloned().collect(),
    }
}

/// Check against a store. A failing store yields an empty report: the
/// failure is logged and the caller is never blocked.
pub fn detect<S: EventSource + ?Sized>(source: &mut S, query: &ConflictQuery) -> ConflictReport {
    if query.window().is_none() {
        return ConflictReport::default();
    }

    match source.load_overlapping(query) {
        Ok(conflicts) => ConflictReport { conflicts },
        Err(e) => {
            log::warn!("conflict check failed, reporting no conflicts: {}", e);
            ConflictReport::default()
        }
    }
}
