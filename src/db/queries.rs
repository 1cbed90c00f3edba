use crate::errors::{AppError, AppResult};
use crate::models::entry::{Entry, EntryDraft};
use crate::utils::date::normalize_date;
use rusqlite::{Connection, OptionalExtension, Result, Row, params};

const SELECT_ENTRY: &str = "SELECT id, mes, atividade, categoria, inicio, fim FROM cronograma";

/// Row → Entry. NULL text columns become empty strings and dates lose any
/// time-of-day suffix.
pub fn map_row(row: &Row) -> Result<Entry> {
    let category: Option<String> = row.get("categoria")?;
    let start: Option<String> = row.get("inicio")?;
    let end: Option<String> = row.get("fim")?;

    Ok(Entry {
        id: row.get("id")?,
        month: row.get("mes")?,
        activity: row.get("atividade")?,
        category: category.unwrap_or_default(),
        start: start.as_deref().map(normalize_date).unwrap_or_default(),
        end: end.as_deref().map(normalize_date).unwrap_or_default(),
    })
}

pub fn load_entries(conn: &Connection) -> AppResult<Vec<Entry>> {
    let mut stmt = conn.prepare(&format!("{SELECT_ENTRY} ORDER BY inicio ASC, id ASC"))?;

    let rows = stmt.query_map([], map_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

/// Entries whose `[inicio, fim]` range touches `[from, to]` (both inclusive).
pub fn load_entries_between(conn: &Connection, from: &str, to: &str) -> AppResult<Vec<Entry>> {
    let mut stmt = conn.prepare(&format!(
        "{SELECT_ENTRY}
         WHERE inicio <= ?2 AND fim >= ?1
         ORDER BY inicio ASC, id ASC"
    ))?;

    let rows = stmt.query_map(params![from, to], map_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn load_entry(conn: &Connection, id: i64) -> AppResult<Entry> {
    conn.query_row(&format!("{SELECT_ENTRY} WHERE id = ?1"), [id], map_row)
        .optional()?
        .ok_or(AppError::NotFound(id))
}

pub fn count_entries(conn: &Connection) -> AppResult<i64> {
    Ok(conn.query_row("SELECT COUNT(*) FROM cronograma", [], |row| row.get(0))?)
}

/// Insert a (validated) draft and return the stored row.
pub fn insert_entry(conn: &Connection, draft: &EntryDraft) -> AppResult<Entry> {
    conn.execute(
        "INSERT INTO cronograma (mes, atividade, categoria, inicio, fim)
         VALUES (?1, ?2, ?3, ?4, ?5)",
        params![
            draft.month,
            draft.activity,
            draft.category,
            draft.start,
            draft.end
        ],
    )?;
    load_entry(conn, conn.last_insert_rowid())
}

/// Update all fields except id.
pub fn update_entry(conn: &Connection, id: i64, draft: &EntryDraft) -> AppResult<Entry> {
    let changed = conn.execute(
        "UPDATE cronograma
         SET mes = ?1, atividade = ?2, categoria = ?3, inicio = ?4, fim = ?5
         WHERE id = ?6",
        params![
            draft.month,
            draft.activity,
            draft.category,
            draft.start,
            draft.end,
            id
        ],
    )?;

    if changed == 0 {
        return Err(AppError::NotFound(id));
    }
    load_entry(conn, id)
}

pub fn delete_entry(conn: &Connection, id: i64) -> AppResult<()> {
    let changed = conn.execute("DELETE FROM cronograma WHERE id = ?1", [id])?;
    if changed == 0 {
        return Err(AppError::NotFound(id));
    }
    Ok(())
}

pub fn load_log(conn: &Connection) -> Result<Vec<(i64, String, String, String, String)>> {
    let mut stmt = conn.prepare_cached(
        "SELECT id, date, operation, IFNULL(target, ''), message FROM log ORDER BY id ASC",
    )?;

    let rows = stmt.query_map([], |row| {
        Ok((
            row.get(0)?,
            row.get(1)?,
            row.get(2)?,
            row.get(3)?,
            row.get(4)?,
        ))
    })?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }

    Ok(out)
}
