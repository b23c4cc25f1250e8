use crate::core::conflicts::ConflictQuery;
use crate::errors::AppResult;
use crate::models::Event;

/// Where events come from. The SQLite store implements it for real use;
/// a plain `Vec<Event>` implements it for in-memory lists and tests.
pub trait EventSource {
    fn load_events(&mut self) -> AppResult<Vec<Event>>;

    /// Events overlapping `query`. Stores that can push the predicate down
    /// should override this.
    fn load_overlapping(&mut self, query: &ConflictQuery) -> AppResult<Vec<Event>> {
        Ok(self
            .load_events()?
            .into_iter()
            .filter(|ev| query.matches(ev))
            .collect())
    }
}

impl EventSource for Vec<Event> {
    fn load_events(&mut self) -> AppResult<Vec<Event>> {
        Ok(self.clone())
    }
}
