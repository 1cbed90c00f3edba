//! Chart edit callback → entry update.

use crate::errors::{AppError, AppResult};
use crate::gantt::bar::{Bar, BarId};
use crate::gantt::legacy;
use crate::models::entry::{Entry, EntryDraft};
use crate::models::month::month_label;
use chrono::NaiveDate;

/// A drag / resize reported by the chart: which task moved and where to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditGesture {
    pub task_id: String,
    /// Name the widget shows for the task, if it reports one.
    pub task_name: Option<String>,
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl EditGesture {
    pub fn new(task_id: impl Into<String>, start: NaiveDate, end: NaiveDate) -> Self {
        Self {
            task_id: task_id.into(),
            task_name: None,
            start,
            end,
        }
    }

    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.task_name = Some(name.into());
        self
    }
}

/// Entry id for a chart task id.
///
/// `item-<id>` is taken at face value; positional `task-<n>` ids go through
/// the legacy adapter. Anything else is unresolved.
pub fn resolve_entry_id(
    task_id: &str,
    task_name: Option<&str>,
    bars: &[Bar],
    entries: &[Entry],
) -> AppResult<i64> {
    if let Some(id) = BarId::parse(task_id) {
        return Ok(id.entry_id());
    }

    legacy::resolve_positional(task_id, task_name, bars, entries)
        .ok_or_else(|| AppError::UnresolvedTask(task_id.to_string()))
}

/// The entry a gesture refers to, looked up in the current list.
pub fn resolve_target<'a>(
    gesture: &EditGesture,
    bars: &[Bar],
    entries: &'a [Entry],
) -> AppResult<&'a Entry> {
    let id = resolve_entry_id(
        &gesture.task_id,
        gesture.task_name.as_deref(),
        bars,
        entries,
    )?;

    entries
        .iter()
        .find(|e| e.id == id)
        .ok_or_else(|| AppError::UnresolvedTask(gesture.task_id.clone()))
}

/// Replacement for `entry` after its bar moved to `[start, end]`.
///
/// Activity and category are kept; the month label follows the new start
/// date, even when the range spans several months.
pub fn build_update(entry: &Entry, start: NaiveDate, end: NaiveDate) -> AppResult<EntryDraft> {
    if end < start {
        return Err(AppError::Validation(format!(
            "end {end} is before start {start}"
        )));
    }

    Ok(EntryDraft {
        month: month_label(start).to_string(),
        activity: entry.activity.clone(),
        category: entry.category.clone(),
        start: start.format("%Y-%m-%d").to_string(),
        end: end.format("%Y-%m-%d").to_string(),
    })
}
