//! Command logic shared by the CLI handlers.

pub mod add;
pub mod backup;
pub mod chart;
pub mod del;
pub mod edit;
pub mod log;

use crate::config::Config;
use crate::db::repository::SqliteRepository;
use crate::errors::AppResult;
use crate::state::ScheduleState;

/// Schedule state backed by the configured SQLite database.
pub type Schedule = ScheduleState<SqliteRepository>;

pub fn open_schedule(cfg: &Config) -> AppResult<Schedule> {
    Ok(ScheduleState::new(SqliteRepository::open(&cfg.database)?))
}
