// src/export/logic.rs

use crate::db::queries::{load_entries, load_entries_between};
use crate::errors::AppResult;
use crate::export::ExportFormat;
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::model::EntryExport;
use crate::export::range::parse_period;
use crate::ui::messages::warning;
use crate::utils::date::format_date;
use crate::utils::path::absolute_target;
use rusqlite::Connection;

/// High-level export logic.
pub struct ExportLogic;

impl ExportLogic {
    /// Export the schedule.
    ///
    /// - `format`: csv | json
    /// - `file`: absolute path of the output file
    /// - `range`: `None`, `"all"` or a period expression (see `parse_period`)
    ///
    /// Returns the number of exported entries.
    pub fn export(
        conn: &Connection,
        format: ExportFormat,
        file: &str,
        range: Option<&str>,
        force: bool,
    ) -> AppResult<usize> {
        let path = absolute_target(file, "output file")?;

        let bounds = match range {
            Some(r) => parse_period(r)?,
            None => None,
        };

        let entries = match bounds {
            None => load_entries(conn)?,
            Some((from, to)) => load_entries_between(conn, &format_date(from), &format_date(to))?,
        };

        if entries.is_empty() {
            warning("No entries found for selected range.");
            return Ok(0);
        }

        ensure_writable(&path, force)?;

        let rows: Vec<EntryExport> = entries.iter().map(EntryExport::from).collect();
        match format {
            ExportFormat::Csv => export_csv(&rows, &path)?,
            ExportFormat::Json => export_json(&rows, &path)?,
        }

        Ok(rows.len())
    }
}
