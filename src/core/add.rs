use crate::core::Schedule;
use crate::db::log::ttlog_entry;
use crate::errors::{AppError, AppResult};
use crate::models::category::Category;
use crate::models::entry::{Entry, EntryDraft};
use crate::models::month::{is_canonical, month_label};
use crate::ui::messages::{success, warning};
use crate::utils::date::{normalize_date, parse_date};

/// High-level business logic for the `add` command.
pub struct AddLogic;

/// Stored label for a category typed on the command line. Unknown values
/// are kept as typed (they are drawn with the default color).
pub(crate) fn canonical_category(input: &str) -> String {
    match Category::from_input(input) {
        Some(c) => c.to_db_str().to_string(),
        None => {
            warning(format!(
                "Unknown category '{}': it will be drawn with the default color.",
                input.trim()
            ));
            input.trim().to_string()
        }
    }
}

impl AddLogic {
    pub fn apply(
        state: &mut Schedule,
        activity: &str,
        category: &str,
        start: &str,
        end: &str,
        month: Option<&str>,
    ) -> AppResult<Entry> {
        let month = match month {
            Some(m) => {
                if !is_canonical(m) {
                    warning(format!("'{m}' is not one of the twelve month names."));
                }
                m.to_string()
            }
            None => {
                let normalized = normalize_date(start);
                let d = parse_date(&normalized)
                    .ok_or_else(|| AppError::InvalidDate(start.to_string()))?;
                month_label(d).to_string()
            }
        };

        let draft = EntryDraft::new(month, activity, canonical_category(category), start, end);
        let entry = state.add(&draft)?;

        ttlog_entry(
            state.repository().conn(),
            "add",
            entry.id,
            &format!(
                "Added '{}' ({}) {} → {}",
                entry.activity, entry.category, entry.start, entry.end
            ),
        );
        success(format!(
            "Entry #{} added: {} [{} → {}]",
            entry.id, entry.activity, entry.start, entry.end
        ));

        Ok(entry)
    }
}
