use crate::core::board::EventBoard;
use crate::core::filter_state::EventFilters;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::models::Event;

pub struct ListLogic;

impl ListLogic {
    /// Fetch everything, then narrow and order it with `filters`.
    pub fn visible(pool: &mut DbPool, filters: EventFilters) -> AppResult<Vec<Event>> {
        let mut board = EventBoard::new(filters);
        board.refresh(pool)?;
        Ok(board.visible())
    }
}
