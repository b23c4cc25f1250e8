use crate::core::conflicts::{ConflictQuery, detect};
use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::db::queries::insert_event;
use crate::errors::{AppError, AppResult};
use crate::models::Event;
use crate::ui::conflicts::print_conflict_warning;
use crate::ui::messages::success;
use crate::utils::time::display_datetime;

/// Options shared by the commands that write an event.
#[derive(Debug, Clone, Copy)]
pub struct WriteOptions {
    /// Refuse to save when the window conflicts with another event.
    pub strict: bool,
    /// How many conflicting events a warning names individually.
    pub preview_limit: usize,
}

/// `end >= start`, checked before anything is written.
pub fn validate_range(ev: &Event) -> AppResult<()> {
    if ev.end_time < ev.start_time {
        return Err(AppError::InvalidTimeRange {
            start: display_datetime(&ev.start_time),
            end: display_datetime(&ev.end_time),
        });
    }
    Ok(())
}

/// Warn about (and audit) conflicts for `ev`. Returns the conflict count.
pub(crate) fn warn_conflicts(pool: &mut DbPool, ev: &Event, exclude: Option<i64>, opts: WriteOptions) -> AppResult<usize> {
    let query = ConflictQuery::new(Some(ev.start_time), Some(ev.end_time))
        .for_team(ev.team_id)
        .excluding(exclude);

    let report = detect(pool, &query);
    if report.is_empty() {
        return Ok(0);
    }

    print_conflict_warning(&report, opts.preview_limit);

    let ids: Vec<String> = report.conflicts.iter().map(|c| c.id.to_string()).collect();
    ttlog(
        &pool.conn,
        "conflict",
        &ev.title,
        &format!("{} overlaps event(s) {}", ev.time_range(), ids.join(", ")),
    )?;

    if opts.strict {
        return Err(AppError::ConflictsFound(report.count()));
    }
    Ok(report.count())
}

/// High-level business logic for the `add` command.
pub struct AddLogic;

impl AddLogic {
    pub fn apply(pool: &mut DbPool, ev: Event, opts: WriteOptions) -> AppResult<i64> {
        validate_range(&ev)?;
        warn_conflicts(pool, &ev, None, opts)?;

        let id = insert_event(pool, &ev)?;

        ttlog(
            &pool.conn,
            "add",
            &id.to_string(),
            &format!("{} '{}' {}", ev.kind.et_as_str(), ev.title, ev.time_range()),
        )?;

        success(format!("Added event {} '{}' ({})", id, ev.title, ev.time_range()));
        Ok(id)
    }
}
