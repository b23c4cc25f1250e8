use crate::core::filter_state::EventFilters;
use crate::core::list::ListLogic;
use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::export::ExportFormat;
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::model::EventExport;
use crate::ui::messages::warning;
use std::path::Path;

pub struct ExportLogic;

impl ExportLogic {
    /// Export the events that `filters` leaves visible, in pipeline order.
    /// `file` must be an absolute path.
    pub fn export(
        pool: &mut DbPool,
        format: ExportFormat,
        file: &str,
        filters: EventFilters,
        force: bool,
    ) -> AppResult<()> {
        let path = Path::new(file);

        if !path.is_absolute() {
            return Err(AppError::Export(format!(
                "output file path must be absolute: {file}"
            )));
        }

        let rows: Vec<EventExport> = ListLogic::visible(pool, filters)?
            .iter()
            .map(EventExport::from)
            .collect();

        if rows.is_empty() {
            warning("No events match the current filters, nothing exported.");
            return Ok(());
        }

        ensure_writable(path, force)?;

        match format {
            ExportFormat::Csv => export_csv(&rows, path)?,
            ExportFormat::Json => export_json(&rows, path)?,
        }

        ttlog(
            &pool.conn,
            "export",
            file,
            &format!("{} event(s) as {}", rows.len(), format.as_str()),
        )?;

        Ok(())
    }
}
