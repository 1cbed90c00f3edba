mod common;
use chrono::NaiveDate;
use common::entry;
use cronograma::errors::{AppError, ErrorClass};
use cronograma::gantt::legacy::{parse_positional, resolve_positional};
use cronograma::gantt::mapper::{MapOptions, map_entries};
use cronograma::gantt::resolve::{EditGesture, build_update, resolve_entry_id, resolve_target};
use cronograma::gantt::BarId;

fn d(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

#[test]
fn test_bar_id_round_trips_to_entry_id() {
    let entries = vec![
        entry(4, "A", "Evento", "2025-01-01", "2025-01-02"),
        entry(42, "B", "Evento", "2025-02-01", "2025-02-02"),
    ];
    let bars = map_entries(&entries, &MapOptions::default()).bars;

    for bar in &bars {
        let id = resolve_entry_id(&bar.bar_id.to_string(), None, &bars, &entries).unwrap();
        assert_eq!(BarId::Entry(id), bar.bar_id);
    }
}

#[test]
fn test_bar_id_parse_rejects_other_shapes() {
    assert_eq!(BarId::parse("item-12"), Some(BarId::Entry(12)));
    assert_eq!(BarId::parse("item-"), None);
    assert_eq!(BarId::parse("item-1a"), None);
    assert_eq!(BarId::parse("task-1"), None);
    assert_eq!(parse_positional("task-3"), Some(3));
    assert_eq!(parse_positional("task-x"), None);
}

#[test]
fn test_positional_id_matches_first_entry_with_same_activity() {
    let entries = vec![
        entry(10, "Campanhas de ideias", "Capacitação", "2025-02-01", "2025-04-30"),
        entry(11, "Campanhas de ideias", "Capacitação", "2025-02-01", "2025-04-30"),
        entry(12, "Acelera", "Inovação", "2025-05-01", "2025-05-31"),
    ];
    let bars = map_entries(&entries, &MapOptions::default()).bars;

    // Position 1 is the second "Campanhas" bar, but the first match wins.
    assert_eq!(resolve_positional("task-1", None, &bars, &entries), Some(10));
    // A reported name takes precedence over the position.
    assert_eq!(
        resolve_positional("task-0", Some("Acelera"), &bars, &entries),
        Some(12)
    );
    assert_eq!(resolve_positional("task-9", None, &bars, &entries), None);
}

#[test]
fn test_unresolvable_task_is_mapping_ambiguity() {
    let entries = vec![entry(1, "A", "Evento", "2025-01-01", "2025-01-02")];
    let bars = map_entries(&entries, &MapOptions::default()).bars;

    let err = resolve_entry_id("bogus", None, &bars, &entries).unwrap_err();
    assert!(matches!(err, AppError::UnresolvedTask(_)));
    assert_eq!(err.class(), ErrorClass::MappingAmbiguity);

    let gesture = EditGesture::new("item-99", d("2025-01-01"), d("2025-01-02"));
    let err = resolve_target(&gesture, &bars, &entries).unwrap_err();
    assert!(matches!(err, AppError::UnresolvedTask(_)));
}

#[test]
fn test_update_keeps_activity_and_derives_month_from_start() {
    let e = entry(7, "Acelera", "Inovação", "2025-05-01", "2025-05-31");
    let draft = build_update(&e, d("2025-06-28"), d("2025-07-15")).unwrap();

    assert_eq!(draft.month, "Junho");
    assert_eq!(draft.activity, "Acelera");
    assert_eq!(draft.category, "Inovação");
    assert_eq!(draft.start, "2025-06-28");
    assert_eq!(draft.end, "2025-07-15");
}

#[test]
fn test_update_rejects_inverted_range() {
    let e = entry(7, "Acelera", "Inovação", "2025-05-01", "2025-05-31");
    let err = build_update(&e, d("2025-06-10"), d("2025-06-01")).unwrap_err();
    assert_eq!(err.class(), ErrorClass::Validation);
}
