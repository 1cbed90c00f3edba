mod common;
use chrono::NaiveDate;
use common::entry;
use cronograma::gantt::mapper::{MapOptions, SkipReason, map_entries, map_entry};
use cronograma::gantt::render::{MAX_CHART_WIDTH, RenderOptions, render_chart};
use cronograma::gantt::BarId;
use cronograma::models::category::BarColor;

fn d(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

#[test]
fn test_bar_carries_entry_identity_and_dates() {
    let e = entry(7, "Acelera", "Inovação", "2025-05-01", "2025-05-31");
    let bar = map_entry(&e, &MapOptions::default()).unwrap();

    assert_eq!(bar.bar_id, BarId::Entry(7));
    assert_eq!(bar.bar_id.to_string(), "item-7");
    assert_eq!(bar.label, "Acelera");
    assert_eq!(bar.start, d("2025-05-01"));
    assert_eq!(bar.end, d("2025-05-31"));
    assert_eq!(bar.days(), 31);
    assert_eq!(bar.color, BarColor::Purple);
}

#[test]
fn test_category_colors_and_default() {
    let cases = [
        ("Planejamento", BarColor::Blue),
        ("Capacitação", BarColor::Green),
        ("Inovação", BarColor::Purple),
        ("Projeto Piloto", BarColor::Orange),
        ("Evento", BarColor::Red),
        ("Outra coisa", BarColor::DEFAULT),
        ("", BarColor::DEFAULT),
    ];

    for (category, expected) in cases {
        let e = entry(1, "X", category, "2025-01-01", "2025-01-02");
        let bar = map_entry(&e, &MapOptions::default()).unwrap();
        assert_eq!(bar.color, expected, "category {category:?}");
    }

    assert_eq!(BarColor::Purple.class_name(), "purple");
    assert_eq!(BarColor::Red.hex(), "#ef4444");
}

#[test]
fn test_long_activity_is_ellipsized_but_title_kept() {
    let long = "Levantamento de nomes dos embaixadores";
    let e = entry(1, long, "Planejamento", "2025-01-01", "2025-01-31");
    let bar = map_entry(&e, &MapOptions { label_width: 12 }).unwrap();

    assert!(bar.label.ends_with('…'));
    assert!(bar.label.chars().count() <= 12);
    assert_eq!(bar.title, long);
}

#[test]
fn test_bad_entries_are_skipped_with_diagnostics() {
    let entries = vec![
        entry(1, "Ok", "Evento", "2025-11-01", "2025-11-30"),
        entry(2, "No start", "Evento", "", "2025-11-30"),
        entry(3, "Garbage", "Evento", "2025-13-45", "2025-11-30"),
        entry(4, "Inverted", "Evento", "2025-11-30", "2025-11-01"),
        entry(5, "Also ok", "Evento", "2025-12-01", "2025-12-31"),
    ];

    let mapping = map_entries(&entries, &MapOptions::default());

    let ids: Vec<String> = mapping.bars.iter().map(|b| b.bar_id.to_string()).collect();
    assert_eq!(ids, ["item-1", "item-5"]);

    assert_eq!(mapping.diagnostics.len(), 3);
    assert_eq!(
        mapping.diagnostics[0].reason,
        SkipReason::MissingDate { field: "start" }
    );
    assert!(matches!(
        mapping.diagnostics[1].reason,
        SkipReason::MalformedDate { field: "start", .. }
    ));
    assert!(matches!(
        mapping.diagnostics[2].reason,
        SkipReason::InvertedRange { .. }
    ));
    assert!(mapping.diagnostics[2].to_string().contains("Inverted"));
}

#[test]
fn test_single_day_entry_is_drawn() {
    let e = entry(1, "Dia D", "Evento", "2025-06-10", "2025-06-10");
    let bar = map_entry(&e, &MapOptions::default()).unwrap();
    assert_eq!(bar.days(), 1);
}

#[test]
fn test_empty_list_renders_no_data() {
    let mapping = map_entries(&[], &MapOptions::default());
    assert!(mapping.is_empty());
    assert_eq!(
        render_chart(&mapping.bars, 0, &RenderOptions::default()),
        "No data available\n"
    );
}

#[test]
fn test_render_lists_every_bar() {
    let entries = vec![
        entry(3, "Inova + Saúde", "Inovação", "2025-04-01", "2025-05-31"),
        entry(9, "Simpósio", "Inovação", "2025-07-01", "2025-07-31"),
    ];
    let mapping = map_entries(&entries, &MapOptions::default());
    let out = render_chart(
        &mapping.bars,
        entries.len(),
        &RenderOptions {
            width: 40,
            color: false,
        },
    );

    assert!(out.contains("item-3"));
    assert!(out.contains("item-9"));
    assert!(out.contains("01/04 → 31/05"));
    assert!(out.contains("Abr"));
    assert!(out.contains("Projeto Piloto"));
    assert!(out.contains("2 entries loaded"));
}

#[test]
fn test_mapping_is_repeatable() {
    let entries = vec![
        entry(1, "Acelera", "Inovação", "2025-05-01", "2025-05-31"),
        entry(2, "Sem data", "Evento", "", ""),
        entry(3, "Invertido", "Evento", "2025-09-30", "2025-09-01"),
        entry(4, "Simpósio", "Inovação", "2025-07-01", "2025-07-31"),
    ];
    let options = MapOptions::default();

    let first = map_entries(&entries, &options);
    let second = map_entries(&entries, &options);
    assert_eq!(first, second);
    assert_eq!(first.bars.len(), 2);
    assert_eq!(first.diagnostics.len(), 2);
}

#[test]
fn test_composite_activity_stays_one_bar() {
    let activity = "Capacitação de Embaixadores - Campanhas de ideias";
    let entries = vec![entry(
        8,
        activity,
        "Capacitação",
        "2025-02-01",
        "2025-04-30",
    )];

    let mapping = map_entries(&entries, &MapOptions { label_width: 80 });
    assert_eq!(mapping.bars.len(), 1);
    assert_eq!(mapping.bars[0].bar_id, BarId::Entry(8));
    assert_eq!(mapping.bars[0].title, activity);
    assert_eq!(mapping.bars[0].label, activity);
}

#[test]
fn test_oversized_width_is_clamped() {
    let entries = vec![entry(1, "Acelera", "Inovação", "2025-05-01", "2025-05-31")];
    let mapping = map_entries(&entries, &MapOptions::default());

    let out = render_chart(
        &mapping.bars,
        1,
        &RenderOptions {
            width: usize::MAX / 2,
            color: false,
        },
    );

    let row = out.lines().find(|l| l.starts_with("item-1")).unwrap();
    let cells = row.chars().filter(|c| *c == '█' || *c == '·').count();
    assert_eq!(cells, MAX_CHART_WIDTH);
}

#[test]
fn test_count_line_includes_skipped_entries() {
    let entries = vec![
        entry(1, "Acelera", "Inovação", "2025-05-01", "2025-05-31"),
        entry(2, "Sem data", "Evento", "", "2025-06-01"),
    ];
    let mapping = map_entries(&entries, &MapOptions::default());
    let out = render_chart(&mapping.bars, entries.len(), &RenderOptions::default());

    assert_eq!(mapping.bars.len(), 1);
    assert!(out.contains("2 entries loaded"));
}
