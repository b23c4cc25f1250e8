use crate::ui::messages::success;
use rusqlite::{Connection, OptionalExtension, Result};

/// A schema step, recorded in `log` once applied.
struct Migration {
    version: &'static str,
    description: &'static str,
    sql: &'static str,
}

const MIGRATIONS: &[Migration] = &[
    Migration {
        version: "20250601_0001_create_events",
        description: "Created events table",
        sql: r#"
        CREATE TABLE IF NOT EXISTS events (
            id           INTEGER PRIMARY KEY AUTOINCREMENT,
            title        TEXT NOT NULL,
            description  TEXT,
            start_time   TEXT NOT NULL,
            end_time     TEXT NOT NULL,
            location     TEXT NOT NULL DEFAULT '',
            kind         TEXT NOT NULL CHECK(kind IN ('match','training','meetup')),
            is_public    INTEGER NOT NULL DEFAULT 1,
            team_id      INTEGER,
            opponent     TEXT,
            created_at   TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_events_start ON events(start_time);
        "#,
    },
    Migration {
        version: "20250612_0002_add_event_category",
        description: "Added category tag to events",
        sql: "ALTER TABLE events ADD COLUMN category TEXT;",
    },
    Migration {
        version: "20250618_0003_index_team_window",
        description: "Indexed events by team and start time",
        sql: "CREATE INDEX IF NOT EXISTS idx_events_team_start ON events(team_id, start_time);",
    },
    Migration {
        version: "20250704_0004_subsecond_instants",
        description: "Widened stored instants to nanosecond precision",
        sql: r#"
        UPDATE events SET start_time = substr(start_time, 1, 19) || '.000000000Z'
            WHERE length(start_time) = 20;
        UPDATE events SET end_time = substr(end_time, 1, 19) || '.000000000Z'
            WHERE length(end_time) = 20;
        "#,
    },
];

/// Ensure that the `log` table exists; it also tracks applied migrations.
fn ensure_log_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

fn is_applied(conn: &Connection, version: &str) -> Result<bool> {
    let mut chk = conn.prepare(
        "SELECT 1 FROM log
         WHERE operation = 'migration_applied' AND target = ?1
         LIMIT 1",
    )?;
    Ok(chk.query_row([version], |_| Ok(())).optional()?.is_some())
}

fn apply(conn: &Connection, m: &Migration) -> Result<()> {
    let tx = conn.unchecked_transaction()?;
    tx.execute_batch(m.sql)?;
    tx.execute(
        "INSERT INTO log (date, operation, target, message)
         VALUES (datetime('now'), 'migration_applied', ?1, ?2)",
        [m.version, m.description],
    )?;
    tx.commit()?;

    success(format!("Migration applied: {} → {}", m.version, m.description));
    Ok(())
}

/// Public entry point: run all pending migrations, oldest first.
/// Returns how many were applied.
pub fn run_pending_migrations(conn: &Connection) -> Result<usize> {
    ensure_log_table(conn)?;

    let mut applied = 0;
    for m in MIGRATIONS {
        if !is_applied(conn, m.version)? {
            apply(conn, m)?;
            applied += 1;
        }
    }

    Ok(applied)
}
