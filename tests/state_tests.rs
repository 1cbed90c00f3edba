mod common;
use cronograma::db::repository::{EntryRepository, SqliteRepository};
use cronograma::errors::{AppError, AppResult, ErrorClass};
use cronograma::models::entry::{Entry, EntryDraft};
use cronograma::state::{LoadStatus, ScheduleState};

/// Repository that can be switched to fail every call.
struct FlakyRepo {
    inner: SqliteRepository,
    down: bool,
}

impl FlakyRepo {
    fn check(&self) -> AppResult<()> {
        if self.down {
            Err(AppError::Io(std::io::Error::other("store unavailable")))
        } else {
            Ok(())
        }
    }
}

impl EntryRepository for FlakyRepo {
    fn list_entries(&mut self) -> AppResult<Vec<Entry>> {
        self.check()?;
        self.inner.list_entries()
    }
    fn get_entry(&mut self, id: i64) -> AppResult<Entry> {
        self.check()?;
        self.inner.get_entry(id)
    }
    fn create_entry(&mut self, draft: &EntryDraft) -> AppResult<Entry> {
        self.check()?;
        self.inner.create_entry(draft)
    }
    fn replace_entry(&mut self, id: i64, draft: &EntryDraft) -> AppResult<Entry> {
        self.check()?;
        self.inner.replace_entry(id, draft)
    }
    fn delete_entry(&mut self, id: i64) -> AppResult<()> {
        self.check()?;
        self.inner.delete_entry(id)
    }
}

fn draft(activity: &str) -> EntryDraft {
    EntryDraft::new("Abril", activity, "Inovação", "2025-04-01", "2025-04-30")
}

#[test]
fn test_actions_replace_the_list_and_bump_revision() {
    let mut state = ScheduleState::new(SqliteRepository::in_memory().unwrap());
    assert_eq!(state.revision(), 0);
    assert_eq!(state.ensure_loaded().unwrap().len(), 0);
    assert_eq!(state.revision(), 1);

    let created = state.add(&draft("Jornada da Inovação")).unwrap();
    assert_eq!(state.entries().len(), 1);
    assert_eq!(state.revision(), 2);
    assert_eq!(*state.status(), LoadStatus::Idle);

    let mut changed = created.to_draft();
    changed.activity = "Jornada".into();
    state.edit(created.id, &changed).unwrap();
    assert_eq!(state.find(created.id).unwrap().activity, "Jornada");

    state.remove(created.id).unwrap();
    assert!(state.entries().is_empty());
    assert_eq!(state.revision(), 4);
}

#[test]
fn test_ensure_loaded_fetches_only_once() {
    let mut state = ScheduleState::new(SqliteRepository::in_memory().unwrap());
    state.ensure_loaded().unwrap();
    state.ensure_loaded().unwrap();
    assert_eq!(state.revision(), 1);
}

#[test]
fn test_rejected_action_keeps_previous_list() {
    let repo = FlakyRepo {
        inner: SqliteRepository::in_memory().unwrap(),
        down: false,
    };
    let mut state = ScheduleState::new(repo);
    state.add(&draft("Acelera")).unwrap();
    let before = state.entries().to_vec();
    let revision = state.revision();

    state.repository().down = true;
    let err = state.add(&draft("Impulsione")).unwrap_err();
    assert_eq!(err.class(), ErrorClass::Transport);

    assert_eq!(state.entries(), before.as_slice());
    assert_eq!(state.revision(), revision);
    assert!(state.error().unwrap().starts_with("Failed to add entry"));

    state.clear_error();
    assert_eq!(*state.status(), LoadStatus::Idle);
    assert!(!state.is_loading());
}

#[test]
fn test_missing_id_is_not_found() {
    let mut state = ScheduleState::new(SqliteRepository::in_memory().unwrap());
    let err = state.remove(404).unwrap_err();
    assert!(matches!(err, AppError::NotFound(404)));
    assert!(state.error().unwrap().starts_with("Failed to remove entry"));

    let repo = state.into_repository();
    assert!(repo.conn().is_autocommit());
}
