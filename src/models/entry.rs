use crate::errors::{AppError, AppResult};
use crate::utils::date::{normalize_date, parse_date};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One scheduled activity as persisted in the `cronograma` table.
///
/// Dates are kept as text exactly as the store returns them (normalized to
/// `YYYY-MM-DD` when possible); the Gantt mapper decides whether they are
/// usable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    pub id: i64,
    pub month: String,    // ⇔ cronograma.mes
    pub activity: String, // ⇔ cronograma.atividade
    pub category: String, // ⇔ cronograma.categoria (NULL → "")
    pub start: String,    // ⇔ cronograma.inicio (NULL → "")
    pub end: String,      // ⇔ cronograma.fim (NULL → "")
}

impl Entry {
    pub fn start_date(&self) -> Option<NaiveDate> {
        parse_date(&self.start)
    }

    pub fn end_date(&self) -> Option<NaiveDate> {
        parse_date(&self.end)
    }

    /// Copy of the editable fields, e.g. to build a replace request.
    pub fn to_draft(&self) -> EntryDraft {
        EntryDraft {
            month: self.month.clone(),
            activity: self.activity.clone(),
            category: self.category.clone(),
            start: self.start.clone(),
            end: self.end.clone(),
        }
    }
}

/// User-supplied fields for create / replace.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntryDraft {
    pub month: String,
    pub activity: String,
    pub category: String,
    pub start: String,
    pub end: String,
}

impl EntryDraft {
    pub fn new(
        month: impl Into<String>,
        activity: impl Into<String>,
        category: impl Into<String>,
        start: impl Into<String>,
        end: impl Into<String>,
    ) -> Self {
        Self {
            month: month.into(),
            activity: activity.into(),
            category: category.into(),
            start: start.into(),
            end: end.into(),
        }
    }

    /// Check required fields and normalize dates to `YYYY-MM-DD`.
    ///
    /// Only presence and date shape are checked; start/end ordering and the
    /// category value are left alone.
    pub fn validated(&self) -> AppResult<EntryDraft> {
        let fields = [
            ("month", &self.month),
            ("activity", &self.activity),
            ("category", &self.category),
            ("start", &self.start),
            ("end", &self.end),
        ];
        let missing: Vec<&str> = fields
            .iter()
            .filter(|(_, v)| v.trim().is_empty())
            .map(|(name, _)| *name)
            .collect();
        if !missing.is_empty() {
            return Err(AppError::Validation(format!(
                "missing required field(s): {}",
                missing.join(", ")
            )));
        }

        let start = normalize_date(&self.start);
        let end = normalize_date(&self.end);
        for (name, value) in [("start", &start), ("end", &end)] {
            if parse_date(value).is_none() {
                return Err(AppError::Validation(format!(
                    "{name} date '{value}' is not a valid YYYY-MM-DD date"
                )));
            }
        }

        Ok(EntryDraft {
            month: self.month.trim().to_string(),
            activity: self.activity.trim().to_string(),
            category: self.category.trim().to_string(),
            start,
            end,
        })
    }
}
