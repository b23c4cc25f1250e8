use crate::core::conflicts::ConflictQuery;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::{Event, EventType, Visibility};
use crate::realtime::{ChangeKind, Table};
use crate::utils::time::{from_storage, to_storage};
use rusqlite::types::Value;
use rusqlite::{OptionalExtension, Result, Row, params, params_from_iter};

const EVENT_COLUMNS: &str = "id, title, description, start_time, end_time, location, kind, \
                             is_public, team_id, opponent, category, created_at";

fn conversion_error(idx: usize, err: AppError) -> rusqlite::Error {
    rusqlite::Error::FromSqlConversionFailure(idx, rusqlite::types::Type::Text, Box::new(err))
}

pub fn map_row(row: &Row) -> Result<Event> {
    let start_str: String = row.get("start_time")?;
    let end_str: String = row.get("end_time")?;
    let start_time = from_storage(&start_str).map_err(|e| conversion_error(3, e))?;
    let end_time = from_storage(&end_str).map_err(|e| conversion_error(4, e))?;

    let kind_str: String = row.get("kind")?;
    let kind = EventType::from_db_str(&kind_str)
        .ok_or_else(|| conversion_error(6, AppError::InvalidEventType(kind_str.clone())))?;

    Ok(Event {
        id: row.get("id")?,
        title: row.get("title")?,
        description: row.get("description")?,
        start_time,
        end_time,
        location: row.get("location")?,
        kind,
        visibility: Visibility::from_public_flag(row.get::<_, i32>("is_public")? == 1),
        team_id: row.get("team_id")?,
        opponent: row.get("opponent")?,
        category: row.get("category")?,
        created_at: row.get("created_at")?,
    })
}

/// All events, earliest start first.
pub fn load_events(pool: &mut DbPool) -> AppResult<Vec<Event>> {
    let sql = format!("SELECT {EVENT_COLUMNS} FROM events ORDER BY start_time ASC, id ASC");
    let mut stmt = pool.conn.prepare(&sql)?;

    let rows = stmt.query_map([], map_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn load_event(pool: &mut DbPool, id: i64) -> AppResult<Event> {
    let sql = format!("SELECT {EVENT_COLUMNS} FROM events WHERE id = ?1");
    pool.conn
        .query_row(&sql, [id], map_row)
        .optional()?
        .ok_or(AppError::EventNotFound(id))
}

/// Events overlapping the query window, closed on both ends.
/// Instants are stored as fixed-width UTC text, so text comparison is
/// time comparison. Rows are re-checked against `query.matches` after
/// loading.
pub fn load_overlapping(pool: &mut DbPool, query: &ConflictQuery) -> AppResult<Vec<Event>> {
    let Some((start, end)) = query.window() else {
        return Ok(Vec::new());
    };

    let mut sql = format!("SELECT {EVENT_COLUMNS} FROM events WHERE start_time <= ?1 AND end_time >= ?2");
    let mut args: Vec<Value> = vec![Value::Text(to_storage(&end)), Value::Text(to_storage(&start))];

    if let Some(team) = query.team_id {
        args.push(Value::Integer(team));
        sql.push_str(&format!(" AND team_id = ?{}", args.len()));
    }
    if let Some(excluded) = query.exclude_id {
        args.push(Value::Integer(excluded));
        sql.push_str(&format!(" AND id != ?{}", args.len()));
    }
    sql.push_str(" ORDER BY start_time ASC, id ASC");

    let mut stmt = pool.conn.prepare(&sql)?;
    let rows = stmt.query_map(params_from_iter(args), map_row)?;

    let mut out = Vec::new();
    for r in rows {
        let ev = r?;
        if query.matches(&ev) {
            out.push(ev);
        }
    }
    Ok(out)
}

/// Insert a new event and return its id.
pub fn insert_event(pool: &mut DbPool, ev: &Event) -> AppResult<i64> {
    pool.conn.execute(
        "INSERT INTO events (title, description, start_time, end_time, location, kind,
                             is_public, team_id, opponent, category, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11)",
        params![
            ev.title,
            ev.description,
            ev.start_str(),
            ev.end_str(),
            ev.location,
            ev.kind.to_db_str(),
            if ev.visibility.is_public() { 1 } else { 0 },
            ev.team_id,
            ev.opponent,
            ev.category,
            ev.created_at,
        ],
    )?;

    let id = pool.conn.last_insert_rowid();
    pool.notify(Table::Events, ChangeKind::Insert, id);
    Ok(id)
}

/// Update an event (all fields except id and created_at).
pub fn update_event(pool: &mut DbPool, ev: &Event) -> AppResult<()> {
    let changed = pool.conn.execute(
        "UPDATE events
         SET title = ?1, description = ?2, start_time = ?3, end_time = ?4,
             location = ?5, kind = ?6, is_public = ?7, team_id = ?8,
             opponent = ?9, category = ?10
         WHERE id = ?11",
        params![
            ev.title,
            ev.description,
            ev.start_str(),
            ev.end_str(),
            ev.location,
            ev.kind.to_db_str(),
            if ev.visibility.is_public() { 1 } else { 0 },
            ev.team_id,
            ev.opponent,
            ev.category,
            ev.id,
        ],
    )?;

    if changed == 0 {
        return Err(AppError::EventNotFound(ev.id));
    }

    pool.notify(Table::Events, ChangeKind::Update, ev.id);
    Ok(())
}

pub fn delete_event(pool: &mut DbPool, id: i64) -> AppResult<()> {
    let changed = pool.conn.execute("DELETE FROM events WHERE id = ?1", [id])?;
    if changed == 0 {
        return Err(AppError::EventNotFound(id));
    }

    pool.notify(Table::Events, ChangeKind::Delete, id);
    Ok(())
}

/// (date, operation, target, message), newest first.
pub fn load_log(pool: &mut DbPool) -> AppResult<Vec<(String, String, String, String)>> {
    let mut stmt = pool.conn.prepare(
        "SELECT date, operation, IFNULL(target, ''), message FROM log ORDER BY id DESC",
    )?;

    let rows = stmt.query_map([], |row| {
        Ok((row.get(0)?, row.get(1)?, row.get(2)?, row.get(3)?))
    })?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}
