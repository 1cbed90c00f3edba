//! Entry list → bar list.

use crate::gantt::bar::{Bar, BarId};
use crate::models::category::BarColor;
use crate::models::entry::Entry;
use crate::utils::date::{has_date_shape, parse_date};
use crate::utils::formatting::ellipsize;
use chrono::NaiveDate;
use std::fmt;

pub const DEFAULT_LABEL_WIDTH: usize = 28;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MapOptions {
    pub label_width: usize,
}

impl Default for MapOptions {
    fn default() -> Self {
        Self {
            label_width: DEFAULT_LABEL_WIDTH,
        }
    }
}

/// Why an entry was left out of the chart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    MissingDate { field: &'static str },
    MalformedDate { field: &'static str, value: String },
    InvertedRange { start: NaiveDate, end: NaiveDate },
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::MissingDate { field } => write!(f, "{field} date is empty"),
            SkipReason::MalformedDate { field, value } => {
                write!(f, "{field} date '{value}' is not a valid YYYY-MM-DD date")
            }
            SkipReason::InvertedRange { start, end } => {
                write!(f, "end {end} is before start {start}")
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub entry_id: i64,
    pub activity: String,
    pub reason: SkipReason,
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "entry #{} '{}' skipped: {}",
            self.entry_id, self.activity, self.reason
        )
    }
}

/// Result of a forward mapping: drawable bars plus the entries that
/// could not be drawn.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Mapping {
    pub bars: Vec<Bar>,
    pub diagnostics: Vec<Diagnostic>,
}

impl Mapping {
    /// Nothing to draw. Not an error.
    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }
}

fn checked_date(field: &'static str, raw: &str) -> Result<NaiveDate, SkipReason> {
    let value = raw.trim();
    if value.is_empty() {
        return Err(SkipReason::MissingDate { field });
    }
    if !has_date_shape(value) {
        return Err(SkipReason::MalformedDate {
            field,
            value: value.to_string(),
        });
    }
    parse_date(value).ok_or_else(|| SkipReason::MalformedDate {
        field,
        value: value.to_string(),
    })
}

/// Build the bar for one entry, or the reason it cannot be drawn.
pub fn map_entry(entry: &Entry, options: &MapOptions) -> Result<Bar, SkipReason> {
    let start = checked_date("start", &entry.start)?;
    let end = checked_date("end", &entry.end)?;
    if end < start {
        return Err(SkipReason::InvertedRange { start, end });
    }

    Ok(Bar {
        bar_id: BarId::Entry(entry.id),
        label: ellipsize(entry.activity.trim(), options.label_width),
        title: entry.activity.clone(),
        category: entry.category.clone(),
        start,
        end,
        color: BarColor::for_category(&entry.category),
    })
}

/// One bar per drawable entry, in input order. Entries with unusable
/// dates are skipped and reported; they never abort the mapping.
pub fn map_entries(entries: &[Entry], options: &MapOptions) -> Mapping {
    let mut mapping = Mapping::default();

    for entry in entries {
        match map_entry(entry, options) {
            Ok(bar) => mapping.bars.push(bar),
            Err(reason) => mapping.diagnostics.push(Diagnostic {
                entry_id: entry.id,
                activity: entry.activity.clone(),
                reason,
            }),
        }
    }

    mapping
}
