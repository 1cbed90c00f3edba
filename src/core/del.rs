use crate::core::Schedule;
use crate::db::log::ttlog_entry;
use crate::db::repository::EntryRepository;
use crate::errors::AppResult;
use crate::models::entry::Entry;
use crate::ui::messages::success;

pub struct DeleteLogic;

impl DeleteLogic {
    /// Entry about to be deleted, for the confirmation prompt.
    pub fn preview(state: &mut Schedule, id: i64) -> AppResult<Entry> {
        state.repository().get_entry(id)
    }

    pub fn apply(state: &mut Schedule, id: i64) -> AppResult<()> {
        state.remove(id)?;

        ttlog_entry(
            state.repository().conn(),
            "del",
            id,
            "Entry deleted",
        );
        success(format!("Entry #{id} has been deleted."));
        Ok(())
    }
}
