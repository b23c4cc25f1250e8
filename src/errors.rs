//! Unified application error type.
//! All modules (db, core, cli, export) return AppError so the binary can
//! report every failure the same way.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Database-related
    // ---------------------------
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid date/time: {0} (expected YYYY-MM-DD HH:MM or RFC 3339)")]
    InvalidDateTime(String),

    #[error("Invalid event type: {0} (expected match, training or meetup)")]
    InvalidEventType(String),

    #[error("Invalid visibility: {0} (expected public or private)")]
    InvalidVisibility(String),

    #[error("Invalid status filter: {0} (expected all, upcoming or past)")]
    InvalidStatus(String),

    #[error("Invalid sort order: {0} (expected asc or desc)")]
    InvalidSortOrder(String),

    // ---------------------------
    // Logic errors
    // ---------------------------
    #[error("Event {0} not found")]
    EventNotFound(i64),

    #[error("Invalid time range: end {end} is before start {start}")]
    InvalidTimeRange { start: String, end: String },

    #[error("{0} conflicting event(s) found, nothing was saved")]
    ConflictsFound(usize),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to parse configuration: {0}")]
    ConfigParse(#[from] serde_yaml::Error),

    #[error("Failed to initialise logging: {0}")]
    Logging(String),

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Export error: {0}")]
    Export(String),
}

pub type AppResult<T> = Result<T, AppError>;
