use crate::models::category::BarColor;
use chrono::NaiveDate;
use serde::Serialize;
use std::fmt;

const ENTRY_PREFIX: &str = "item-";

/// Identity of a chart bar, derived from the entry id (never from the
/// bar's position), so edit callbacks always lead back to their entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(into = "String")]
pub enum BarId {
    Entry(i64),
}

impl BarId {
    /// Parse the `item-<id>` form. Anything else is `None`.
    pub fn parse(raw: &str) -> Option<Self> {
        let digits = raw.trim().strip_prefix(ENTRY_PREFIX)?;
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        digits.parse().ok().map(BarId::Entry)
    }

    pub fn entry_id(&self) -> i64 {
        match self {
            BarId::Entry(id) => *id,
        }
    }
}

impl fmt::Display for BarId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BarId::Entry(id) => write!(f, "{ENTRY_PREFIX}{id}"),
        }
    }
}

impl From<BarId> for String {
    fn from(id: BarId) -> Self {
        id.to_string()
    }
}

/// Fully resolved drawing instruction for one entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Bar {
    pub bar_id: BarId,
    /// Display label, already ellipsized to the chart's label width.
    pub label: String,
    /// Full activity text.
    pub title: String,
    pub category: String,
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub color: BarColor,
}

impl Bar {
    /// Inclusive length in days.
    pub fn days(&self) -> i64 {
        (self.end - self.start).num_days() + 1
    }
}
