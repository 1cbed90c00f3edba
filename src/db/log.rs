//! Audit trail in the `log` table.

use crate::errors::AppResult;
use crate::ui::messages::warning;
use chrono::Local;
use rusqlite::{Connection, params};

/// Write an internal log line into the `log` table.
pub fn ttlog(conn: &Connection, operation: &str, target: &str, message: &str) -> AppResult<()> {
    conn.prepare_cached(
        "INSERT INTO log (date, operation, target, message)
         VALUES (?1, ?2, ?3, ?4)",
    )?
    .execute(params![Local::now().to_rfc3339(), operation, target, message])?;

    Ok(())
}

/// Same as [`ttlog`]; a failure only produces a warning.
pub fn ttlog_quiet(conn: &Connection, operation: &str, target: &str, message: &str) {
    if let Err(e) = ttlog(conn, operation, target, message) {
        warning(format!("Failed to write internal log: {e}"));
    }
}

/// Audit line about one schedule entry (target `#<id>`).
pub fn ttlog_entry(conn: &Connection, operation: &str, id: i64, message: &str) {
    ttlog_quiet(conn, operation, &format!("#{id}"), message);
}
