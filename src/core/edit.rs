use crate::core::Schedule;
use crate::core::add::canonical_category;
use crate::db::log::ttlog_entry;
use crate::db::repository::EntryRepository;
use crate::errors::{AppError, AppResult};
use crate::models::entry::Entry;
use crate::ui::messages::{info, success};

/// Fields to change; `None` keeps the stored value.
#[derive(Debug, Default, Clone)]
pub struct EntryChanges {
    pub month: Option<String>,
    pub activity: Option<String>,
    pub category: Option<String>,
    pub start: Option<String>,
    pub end: Option<String>,
}

impl EntryChanges {
    pub fn is_empty(&self) -> bool {
        self.month.is_none()
            && self.activity.is_none()
            && self.category.is_none()
            && self.start.is_none()
            && self.end.is_none()
    }
}

/// High-level business logic for the `edit` command.
pub struct EditLogic;

impl EditLogic {
    pub fn apply(state: &mut Schedule, id: i64, changes: EntryChanges) -> AppResult<Entry> {
        if changes.is_empty() {
            return Err(AppError::Validation(
                "nothing to change: pass at least one of --month, --activity, --category, --start, --end".into(),
            ));
        }

        let current = state.repository().get_entry(id)?;
        let mut draft = current.to_draft();

        if let Some(m) = changes.month {
            draft.month = m;
        }
        if let Some(a) = changes.activity {
            draft.activity = a;
        }
        if let Some(c) = changes.category {
            draft.category = canonical_category(&c);
        }
        if let Some(s) = changes.start {
            draft.start = s;
        }
        if let Some(e) = changes.end {
            draft.end = e;
        }

        if draft == current.to_draft() {
            info(format!("Entry #{id} already has these values."));
            return Ok(current);
        }

        let entry = state.edit(id, &draft)?;

        ttlog_entry(
            state.repository().conn(),
            "edit",
            id,
            &format!(
                "{} | {} | {} | {} → {}",
                entry.month, entry.activity, entry.category, entry.start, entry.end
            ),
        );
        success(format!("Entry #{id} updated."));

        Ok(entry)
    }
}
