pub mod add;
pub mod check;
pub mod config;
pub mod del;
pub mod edit;
pub mod export;
pub mod init;
pub mod list;
pub mod log;

use crate::config::Config;
use crate::core::add::WriteOptions;
use crate::db::initialize::init_db;
use crate::db::pool::DbPool;
use crate::errors::AppResult;

/// Open the configured database and bring its schema up to date.
pub(crate) fn open_db(cfg: &Config) -> AppResult<DbPool> {
    let pool = DbPool::new(&cfg.database)?;
    init_db(&pool.conn)?;
    Ok(pool)
}

pub(crate) fn write_options(cfg: &Config, strict: bool) -> WriteOptions {
    WriteOptions {
        strict,
        preview_limit: cfg.conflict_preview_limit,
    }
}
