use crate::db::pool::DbPool;
use crate::db::queries::load_log;
use crate::errors::AppResult;
use crate::ui::messages::{header, info};
use crate::utils::table::Table;

pub struct LogLogic;

impl LogLogic {
    pub fn print_log(pool: &mut DbPool) -> AppResult<()> {
        let rows = load_log(pool)?;

        if rows.is_empty() {
            info("The log is empty.");
            return Ok(());
        }

        header("Internal log");

        let mut table = Table::new(["DATE", "OPERATION", "TARGET", "MESSAGE"]);
        for (date, operation, target, message) in rows {
            table.add_row(vec![date, operation, target, message]);
        }
        print!("{}", table.render());

        Ok(())
    }
}
