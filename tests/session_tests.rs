mod common;
use chrono::NaiveDate;
use common::schedule_with_acelera;
use cronograma::db::repository::{EntryRepository, SqliteRepository};
use cronograma::errors::{AppError, AppResult};
use cronograma::gantt::suppression::SelfUpdate;
use cronograma::gantt::{BarId, ChartOptions, ChartSession, EditGesture, SyncOutcome};
use cronograma::models::entry::{Entry, EntryDraft};
use cronograma::state::ScheduleState;
use std::time::{Duration, Instant};

fn d(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

fn options() -> ChartOptions {
    ChartOptions {
        label_width: 28,
        settle_delay: Duration::from_millis(300),
    }
}

#[test]
fn test_drag_updates_entry_and_month() {
    let mut state = schedule_with_acelera();
    let mut session = ChartSession::new(options());
    let t0 = Instant::now();
    assert_eq!(session.refresh(&mut state, t0).unwrap(), SyncOutcome::Rebuilt);

    let gesture = EditGesture::new("item-7", d("2025-05-05"), d("2025-06-02"));
    let stored = session.apply_edit(&mut state, &gesture, t0).unwrap();

    assert_eq!(stored.id, 7);
    assert_eq!(stored.month, "Maio");
    assert_eq!(stored.start, "2025-05-05");
    assert_eq!(stored.end, "2025-06-02");
    assert_eq!(stored.activity, "Acelera");
    assert_eq!(stored.category, "Inovação");

    let bar = session
        .bars()
        .iter()
        .find(|b| b.bar_id == BarId::Entry(7))
        .unwrap();
    assert_eq!(bar.start, d("2025-05-05"));
    assert_eq!(bar.end, d("2025-06-02"));
}

#[test]
fn test_own_edit_does_not_trigger_rebuild() {
    let mut state = schedule_with_acelera();
    let mut session = ChartSession::new(options());
    let t0 = Instant::now();
    session.refresh(&mut state, t0).unwrap();
    assert_eq!(session.rebuild_count(), 1);

    let gesture = EditGesture::new("item-7", d("2025-06-01"), d("2025-06-30"));
    session.apply_edit(&mut state, &gesture, t0).unwrap();

    assert_eq!(session.rebuild_count(), 1);
    assert!(session.is_suppressing(t0 + Duration::from_millis(100)));
    assert_eq!(
        session.sync(&state, t0 + Duration::from_millis(100)),
        SyncOutcome::Unchanged
    );
}

#[test]
fn test_foreign_change_waits_for_flag_to_clear() {
    let mut state = schedule_with_acelera();
    let mut session = ChartSession::new(options());
    let t0 = Instant::now();
    session.refresh(&mut state, t0).unwrap();

    let gesture = EditGesture::new("item-7", d("2025-06-01"), d("2025-06-30"));
    session.apply_edit(&mut state, &gesture, t0).unwrap();

    state
        .add(&EntryDraft::new(
            "Dezembro",
            "Anúncio da Inovação",
            "Evento",
            "2025-12-01",
            "2025-12-31",
        ))
        .unwrap();

    let during = t0 + Duration::from_millis(50);
    assert_eq!(session.sync(&state, during), SyncOutcome::Deferred);
    assert_eq!(session.bars().len(), 7);

    let after = t0 + Duration::from_millis(400);
    assert!(!session.is_suppressing(after));
    assert_eq!(session.sync(&state, after), SyncOutcome::Rebuilt);
    assert_eq!(session.bars().len(), 8);
    assert_eq!(session.rebuild_count(), 2);
}

#[test]
fn test_legacy_task_id_resolves_by_name() {
    let mut state = schedule_with_acelera();
    let mut session = ChartSession::default();
    let t0 = Instant::now();
    session.refresh(&mut state, t0).unwrap();

    let gesture = EditGesture::new("task-0", d("2025-05-10"), d("2025-05-20")).named("Acelera");
    let stored = session.apply_edit(&mut state, &gesture, t0).unwrap();
    assert_eq!(stored.id, 7);
}

#[test]
fn test_unresolved_gesture_changes_nothing() {
    let mut state = schedule_with_acelera();
    let mut session = ChartSession::new(options());
    let t0 = Instant::now();
    session.refresh(&mut state, t0).unwrap();
    let before = session.bars().to_vec();
    let revision = state.revision();

    let gesture = EditGesture::new("nonsense", d("2025-05-10"), d("2025-05-20"));
    let err = session.apply_edit(&mut state, &gesture, t0).unwrap_err();

    assert!(matches!(err, AppError::UnresolvedTask(_)));
    assert_eq!(session.bars(), before.as_slice());
    assert_eq!(state.revision(), revision);
    assert!(!session.is_suppressing(t0));
}

/// Accepts reads, rejects every write.
struct ReadOnlyRepo {
    inner: SqliteRepository,
}

impl EntryRepository for ReadOnlyRepo {
    fn list_entries(&mut self) -> AppResult<Vec<Entry>> {
        self.inner.list_entries()
    }
    fn get_entry(&mut self, id: i64) -> AppResult<Entry> {
        self.inner.get_entry(id)
    }
    fn create_entry(&mut self, draft: &EntryDraft) -> AppResult<Entry> {
        self.inner.create_entry(draft)
    }
    fn replace_entry(&mut self, _id: i64, _draft: &EntryDraft) -> AppResult<Entry> {
        Err(AppError::Io(std::io::Error::other("write refused")))
    }
    fn delete_entry(&mut self, _id: i64) -> AppResult<()> {
        Err(AppError::Io(std::io::Error::other("write refused")))
    }
}

#[test]
fn test_failed_save_clears_flag_and_keeps_bars() {
    let mut state = ScheduleState::new(ReadOnlyRepo {
        inner: SqliteRepository::in_memory().unwrap(),
    });
    state
        .add(&EntryDraft::new(
            "Junho",
            "SW",
            "Inovação",
            "2025-06-01",
            "2025-06-30",
        ))
        .unwrap();

    let mut session = ChartSession::new(options());
    let t0 = Instant::now();
    session.refresh(&mut state, t0).unwrap();
    let before = session.bars().to_vec();

    let gesture = EditGesture::new("item-1", d("2025-07-01"), d("2025-07-30"));
    assert!(session.apply_edit(&mut state, &gesture, t0).is_err());

    assert!(!session.is_suppressing(t0));
    assert_eq!(session.bars(), before.as_slice());
    assert_eq!(state.entries()[0].start, "2025-06-01");
    assert!(state.error().unwrap().starts_with("Failed to edit entry"));
}

#[test]
fn test_self_update_flag_lifecycle() {
    let t0 = Instant::now();
    let mut flag = SelfUpdate::default();
    assert!(!flag.is_active(t0));

    flag.begin();
    assert!(flag.is_in_flight());
    assert!(flag.is_active(t0));

    flag.settle(t0, Duration::from_millis(300));
    assert!(!flag.is_in_flight());
    assert!(flag.is_active(t0 + Duration::from_millis(299)));
    assert!(!flag.is_active(t0 + Duration::from_millis(300)));
    assert_eq!(flag, SelfUpdate::Idle);
}

#[test]
fn test_empty_schedule_has_no_data() {
    let mut state = ScheduleState::new(SqliteRepository::in_memory().unwrap());
    let mut session = ChartSession::new(options());
    assert_eq!(
        session.refresh(&mut state, Instant::now()).unwrap(),
        SyncOutcome::NoData
    );
    assert_eq!(session.options().label_width, 28);
}
