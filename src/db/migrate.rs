use crate::ui::messages::{success, warning};
use rusqlite::{Connection, OptionalExtension, Result};

/// Ensure that the `log` table exists.
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

/// Check if the `cronograma` table exists.
fn cronograma_table_exists(conn: &Connection) -> Result<bool> {
    let mut stmt =
        conn.prepare("SELECT name FROM sqlite_master WHERE type='table' AND name='cronograma'")?;
    let exists: Option<String> = stmt.query_row([], |row| row.get(0)).optional()?;
    Ok(exists.is_some())
}

/// Create the `cronograma` table.
fn create_cronograma_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS cronograma (
            id         INTEGER PRIMARY KEY AUTOINCREMENT,
            mes        TEXT NOT NULL,
            atividade  TEXT NOT NULL,
            categoria  TEXT,
            inicio     DATE,
            fim        DATE
        );

        CREATE INDEX IF NOT EXISTS idx_cronograma_inicio ON cronograma(inicio);
        "#,
    )?;
    Ok(())
}

fn migration_applied(conn: &Connection, version: &str) -> Result<bool> {
    let mut chk = conn.prepare(
        "SELECT 1 FROM log
         WHERE operation = 'migration_applied' AND target = ?1
         LIMIT 1",
    )?;
    Ok(chk.query_row([version], |_| Ok(())).optional()?.is_some())
}

fn mark_applied(conn: &Connection, version: &str, message: &str) -> Result<()> {
    conn.execute(
        "INSERT INTO log (date, operation, target, message)
         VALUES (datetime('now'), 'migration_applied', ?1, ?2)",
        [version, message],
    )?;
    Ok(())
}

/// Older imports stored timestamps ("2025-01-01T00:00:00.000Z") in the
/// date columns. Keep only the calendar date.
fn migrate_truncate_date_times(conn: &Connection) -> Result<()> {
    let version = "20251020_0001_truncate_entry_datetimes";

    if migration_applied(conn, version)? {
        return Ok(());
    }

    let changed = conn.execute(
        "UPDATE cronograma
         SET inicio = substr(inicio, 1, 10),
             fim    = substr(fim, 1, 10)
         WHERE length(inicio) > 10 OR length(fim) > 10",
        [],
    )?;

    mark_applied(conn, version, "Truncated time-of-day from entry dates")?;

    if changed > 0 {
        warning(format!("Normalized dates on {changed} legacy entries."));
    }
    success(format!("Migration applied: {version}"));

    Ok(())
}

/// Public entry point: run all pending migrations.
///
/// Invoked every time a repository opens a database.
pub fn run_pending_migrations(conn: &Connection) -> Result<()> {
    // 1) Ensure log table
    ensure_log_table(conn)?;

    // 2) Create cronograma table if missing
    if !cronograma_table_exists(conn)? {
        create_cronograma_table(conn)?;
        success("Created cronograma table.");
    } else {
        conn.execute_batch(
            "CREATE INDEX IF NOT EXISTS idx_cronograma_inicio ON cronograma(inicio);",
        )?;
    }

    // 3) Data fixes
    migrate_truncate_date_times(conn)?;

    Ok(())
}
