//! SQLite connection wrapper (one connection is plenty for a CLI).

use crate::core::conflicts::ConflictQuery;
use crate::core::source::EventSource;
use crate::db::queries;
use crate::errors::AppResult;
use crate::models::Event;
use crate::realtime::{Change, ChangeKind, ChangePublisher, Table};
use rusqlite::{Connection, Result};
use std::path::Path;

pub struct DbPool {
    pub conn: Connection,
    publisher: Option<ChangePublisher>,
}

impl DbPool {
    pub fn new(path: &str) -> Result<Self> {
        let conn = Connection::open(Path::new(path))?;
        Ok(Self {
            conn,
            publisher: None,
        })
    }

    pub fn in_memory() -> Result<Self> {
        Ok(Self {
            conn: Connection::open_in_memory()?,
            publisher: None,
        })
    }

    /// Publish a change for every write made through this pool.
    pub fn with_publisher(mut self, publisher: ChangePublisher) -> Self {
        self.publisher = Some(publisher);
        self
    }

    pub(crate) fn notify(&self, table: Table, kind: ChangeKind, row_id: i64) {
        if let Some(p) = &self.publisher
            && !p.publish(Change {
                table,
                kind,
                row_id,
            })
        {
            log::debug!("change feed closed, dropping {:?} on {}", kind, table.as_str());
        }
    }
}

impl EventSource for DbPool {
    fn load_events(&mut self) -> AppResult<Vec<Event>> {
        queries::load_events(self)
    }

    fn load_overlapping(&mut self, query: &ConflictQuery) -> AppResult<Vec<Event>> {
        queries::load_overlapping(self, query)
    }
}
