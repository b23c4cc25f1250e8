use crate::core::add::{WriteOptions, validate_range, warn_conflicts};
use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::db::queries::{load_event, update_event};
use crate::errors::AppResult;
use crate::models::{Event, EventType, Visibility};
use crate::ui::messages::{info, success};
use chrono::{DateTime, Utc};

/// Fields to change; `None` leaves a field untouched.
/// For optional fields `Some(None)` clears the value.
#[derive(Debug, Clone, Default)]
pub struct EventPatch {
    pub title: Option<String>,
    pub description: Option<Option<String>>,
    pub start_time: Option<DateTime<Utc>>,
    pub end_time: Option<DateTime<Utc>>,
    pub location: Option<String>,
    pub kind: Option<EventType>,
    pub visibility: Option<Visibility>,
    pub team: Option<Option<i64>>,
    pub opponent: Option<Option<String>>,
    pub category: Option<Option<String>>,
}

impl EventPatch {
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_none()
            && self.start_time.is_none()
            && self.end_time.is_none()
            && self.location.is_none()
            && self.kind.is_none()
            && self.visibility.is_none()
            && self.team.is_none()
            && self.opponent.is_none()
            && self.category.is_none()
    }

    pub fn apply_to(self, ev: &mut Event) {
        if let Some(v) = self.title {
            ev.title = v;
        }
        if let Some(v) = self.description {
            ev.description = v;
        }
        if let Some(v) = self.start_time {
            ev.start_time = v;
        }
        if let Some(v) = self.end_time {
            ev.end_time = v;
        }
        if let Some(v) = self.location {
            ev.location = v;
        }
        if let Some(v) = self.kind {
            ev.kind = v;
        }
        if let Some(v) = self.visibility {
            ev.visibility = v;
        }
        if let Some(v) = self.team {
            ev.team_id = v;
        }
        if let Some(v) = self.opponent {
            ev.opponent = v;
        }
        if let Some(v) = self.category {
            ev.category = v;
        }
    }
}

pub struct EditLogic;

impl EditLogic {
    /// Returns the event as stored after the update.
    pub fn apply(pool: &mut DbPool, id: i64, patch: EventPatch, opts: WriteOptions) -> AppResult<Event> {
        let mut ev = load_event(pool, id)?;

        if patch.is_empty() {
            info(format!("Nothing to change for event {}", id));
            return Ok(ev);
        }

        patch.apply_to(&mut ev);
        validate_range(&ev)?;
        warn_conflicts(pool, &ev, Some(id), opts)?;

        update_event(pool, &ev)?;
        ttlog(
            &pool.conn,
            "edit",
            &id.to_string(),
            &format!("'{}' now {}", ev.title, ev.time_range()),
        )?;

        success(format!("Updated event {} '{}'", id, ev.title));
        Ok(ev)
    }
}
