use crate::models::{Event, EventType, Visibility};
use serde::Serialize;

/// One flat row per event, shared by the CSV and JSON writers.
#[derive(Debug, Serialize)]
pub struct EventExport {
    pub id: i64,
    pub title: String,
    pub kind: EventType,
    pub start_time: String,
    pub end_time: String,
    pub location: String,
    pub visibility: Visibility,
    pub team_id: Option<i64>,
    pub opponent: Option<String>,
    pub category: Option<String>,
    pub description: Option<String>,
}

impl From<&Event> for EventExport {
    fn from(ev: &Event) -> Self {
        Self {
            id: ev.id,
            title: ev.title.clone(),
            kind: ev.kind,
            start_time: ev.start_time.to_rfc3339(),
            end_time: ev.end_time.to_rfc3339(),
            location: ev.location.clone(),
            visibility: ev.visibility,
            team_id: ev.team_id,
            opponent: ev.opponent.clone(),
            category: ev.category.clone(),
            description: ev.description.clone(),
        }
    }
}
