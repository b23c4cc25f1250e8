use super::{event_type::EventType, visibility::Visibility};
use crate::utils::time::{display_datetime, to_storage};
use chrono::{DateTime, Local, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    pub start_time: DateTime<Utc>, // ⇔ events.start_time (TEXT "YYYY-MM-DDTHH:MM:SSZ")
    pub end_time: DateTime<Utc>,   // ⇔ events.end_time
    pub location: String,
    pub kind: EventType,         // ⇔ events.kind ('match' | 'training' | 'meetup')
    pub visibility: Visibility,  // ⇔ events.is_public (INT 0/1)
    pub team_id: Option<i64>,    // ⇔ events.team_id (NULL = no team)
    pub opponent: Option<String>,
    pub category: Option<String>,
    pub created_at: String, // ⇔ events.created_at (TEXT, ISO8601)
}

impl Event {
    /// Build an event that has not been stored yet.
    /// - `id = 0` (assigned by the store on insert)
    /// - `visibility = Public`, no team, opponent or category
    /// - `created_at = now()` in ISO8601
    pub fn new(
        title: impl Into<String>,
        start_time: DateTime<Utc>,
        end_time: DateTime<Utc>,
        location: impl Into<String>,
        kind: EventType,
    ) -> Self {
        Self {
            id: 0,
            title: title.into(),
            description: None,
            start_time,
            end_time,
            location: location.into(),
            kind,
            visibility: Visibility::Public,
            team_id: None,
            opponent: None,
            category: None,
            created_at: Local::now().to_rfc3339(),
        }
    }

    pub fn with_team(mut self, team_id: Option<i64>) -> Self {
        self.team_id = team_id;
        self
    }

    pub fn with_visibility(mut self, visibility: Visibility) -> Self {
        self.visibility = visibility;
        self
    }

    pub fn with_description(mut self, description: Option<String>) -> Self {
        self.description = description;
        self
    }

    pub fn with_opponent(mut self, opponent: Option<String>) -> Self {
        self.opponent = opponent;
        self
    }

    pub fn with_category(mut self, category: Option<String>) -> Self {
        self.category = category;
        self
    }

    pub fn start_str(&self) -> String {
        to_storage(&self.start_time)
    }

    pub fn end_str(&self) -> String {
        to_storage(&self.end_time)
    }

    /// "YYYY-MM-DD HH:MM → HH:MM" (end date repeated only when it differs)
    pub fn time_range(&self) -> String {
        let start = display_datetime(&self.start_time);
        if self.start_time.date_naive() == self.end_time.date_naive() {
            format!("{} → {}", start, self.end_time.format("%H:%M"))
        } else {
            format!("{} → {}", start, display_datetime(&self.end_time))
        }
    }

    /// Every text field the search stage looks at.
    pub fn searchable_fields(&self) -> [Option<&str>; 5] {
        [
            Some(self.title.as_str()),
            self.description.as_deref(),
            Some(self.location.as_str()),
            self.opponent.as_deref(),
            self.category.as_deref(),
        ]
    }
}
