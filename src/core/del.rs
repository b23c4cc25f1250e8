use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::db::queries::{delete_event, load_event};
use crate::errors::AppResult;
use crate::models::Event;
use crate::ui::messages::info;

pub struct DeleteLogic;

impl DeleteLogic {
    /// Returns the removed event.
    pub fn apply(pool: &mut DbPool, id: i64) -> AppResult<Event> {
        let ev = load_event(pool, id)?;
        delete_event(pool, id)?;

        ttlog(
            &pool.conn,
            "del",
            &id.to_string(),
            &format!("'{}' {}", ev.title, ev.time_range()),
        )?;

        info(format!("Deleted event {} '{}'", id, ev.title));
        Ok(ev)
    }
}
