use std::fs;

mod common;
use common::{cron, init_seeded, setup_test_db, temp_out};

#[test]
fn test_export_csv_all() {
    let db_path = setup_test_db("export_csv_all");
    init_seeded(&db_path);
    let out = temp_out("export_csv_all", "csv");

    cron()
        .args(["--db", &db_path, "export", "--file", &out, "--force"])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read csv");
    let mut lines = content.lines();
    assert_eq!(
        lines.next(),
        Some("id,mes,atividade,categoria,inicio,fim")
    );
    assert_eq!(lines.count(), 19);
    assert!(content.contains("Acelera"));
}

#[test]
fn test_export_json_range() {
    let db_path = setup_test_db("export_json_range");
    init_seeded(&db_path);
    let out = temp_out("export_json_range", "json");

    cron()
        .args([
            "--db",
            &db_path,
            "export",
            "--format",
            "json",
            "--file",
            &out,
            "--range",
            "2025-11:2025-12",
            "--force",
        ])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read json");
    let rows: serde_json::Value = serde_json::from_str(&content).expect("valid json");
    let rows = rows.as_array().expect("array");
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0]["atividade"], "Oscar da Inovação");
    assert_eq!(rows[1]["fim"], "2025-12-31");
}

#[test]
fn test_export_requires_absolute_path() {
    let db_path = setup_test_db("export_relative");
    init_seeded(&db_path);

    cron()
        .args(["--db", &db_path, "export", "--file", "relative.csv"])
        .assert()
        .failure()
        .stderr(predicates::str::contains("must be absolute"));
}

#[test]
fn test_export_rejects_bad_range() {
    let db_path = setup_test_db("export_bad_range");
    init_seeded(&db_path);
    let out = temp_out("export_bad_range", "csv");

    cron()
        .args(["--db", &db_path, "export", "--file", &out, "--range", "2025-1"])
        .assert()
        .failure()
        .stderr(predicates::str::contains("unsupported period"));
}
