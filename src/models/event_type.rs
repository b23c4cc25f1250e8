use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum EventType {
    Match,
    Training,
    Meetup,
}

impl EventType {
    pub const ALL: [EventType; 3] = [EventType::Match, EventType::Training, EventType::Meetup];

    /// Parse user input, case-insensitive.
    pub fn et_from_str(s: &str) -> Option<Self> {
        Self::from_db_str(&s.trim().to_lowercase())
    }

    pub fn et_as_str(&self) -> &'static str {
        match self {
            EventType::Match => "match",
            EventType::Training => "training",
            EventType::Meetup => "meetup",
        }
    }

    /// Convert enum → DB string
    pub fn to_db_str(&self) -> &'static str {
        self.et_as_str()
    }

    /// Convert DB string → enum
    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "match" => Some(EventType::Match),
            "training" => Some(EventType::Training),
            "meetup" => Some(EventType::Meetup),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_any_case() {
        assert_eq!(EventType::et_from_str("MATCH"), Some(EventType::Match));
        assert_eq!(EventType::et_from_str(" Training "), Some(EventType::Training));
        assert_eq!(EventType::et_from_str("brunch"), None);
    }

    #[test]
    fn db_strings_are_lowercase() {
        for kind in EventType::ALL {
            assert_eq!(EventType::from_db_str(kind.to_db_str()), Some(kind));
        }
    }
}
