use predicates::str::contains;
use std::fs;

mod common;
use common::{TWO_ORDER_DAY, dlog, init_db_with_orders, setup_test_db, temp_out};

fn processed_db(name: &str) -> String {
    let db_path = setup_test_db(name);
    init_db_with_orders(&db_path, name, TWO_ORDER_DAY);

    dlog()
        .args([
            "--db",
            &db_path,
            "process",
            "--enterprise",
            "ent-1",
            "--date",
            "2024-04-05",
        ])
        .assert()
        .success();

    db_path
}

#[test]
fn test_export_csv_contains_both_modes() {
    let db_path = processed_db("export_csv");
    let out_file = temp_out("export_csv", "csv");

    dlog()
        .args([
            "--db",
            &db_path,
            "export",
            "--format",
            "csv",
            "--file",
            &out_file,
            "--range",
            "2024-04-05",
        ])
        .assert()
        .success();

    let content = fs::read_to_string(&out_file).expect("read exported csv");

    assert!(content.starts_with("driver,date,enterprise,mode,orders,work_time"));
    assert!(content.contains("drv-1,2024-04-05,ent-1,realized,2,01:35,00:35,01:00,00:00,01:10"));
    assert!(content.contains("drv-1,2024-04-05,ent-1,foreseen,2"));
}

#[test]
fn test_export_json_is_parseable() {
    let db_path = processed_db("export_json");
    let out_file = temp_out("export_json", "json");

    dlog()
        .args([
            "--db",
            &db_path,
            "export",
            "--format",
            "json",
            "--file",
            &out_file,
        ])
        .assert()
        .success();

    let content = fs::read_to_string(&out_file).expect("read exported json");
    let rows: serde_json::Value = serde_json::from_str(&content).expect("parse exported json");

    let rows = rows.as_array().expect("exported json is an array");
    assert_eq!(rows.len(), 2); // realized + foreseen

    let realized = rows
        .iter()
        .find(|r| r["mode"] == "realized")
        .expect("realized row present");
    assert_eq!(realized["driver"], "drv-1");
    assert_eq!(realized["work_time"], "01:35");
    assert_eq!(realized["intra_day"], "01:10");
    assert_eq!(realized["overtime"], "00:00");
}

#[test]
fn test_export_requires_absolute_path() {
    let db_path = processed_db("export_relative");

    dlog()
        .args([
            "--db",
            &db_path,
            "export",
            "--format",
            "csv",
            "--file",
            "relative.csv",
        ])
        .assert()
        .failure()
        .stderr(contains("must be absolute"));
}

#[test]
fn test_export_refuses_existing_file_without_force() {
    let db_path = processed_db("export_no_force");
    let out_file = temp_out("export_no_force", "csv");
    fs::write(&out_file, "occupied").expect("pre-create output file");

    dlog()
        .args([
            "--db",
            &db_path,
            "export",
            "--format",
            "csv",
            "--file",
            &out_file,
        ])
        .write_stdin("n\n")
        .assert()
        .failure()
        .stderr(contains("not overwritten"));

    // With --force the same export goes through.
    dlog()
        .args([
            "--db",
            &db_path,
            "export",
            "--format",
            "csv",
            "--file",
            &out_file,
            "--force",
        ])
        .assert()
        .success();

    let content = fs::read_to_string(&out_file).expect("read exported csv");
    assert!(content.contains("drv-1"));
}

#[test]
fn test_export_empty_range_warns() {
    let db_path = processed_db("export_empty_range");
    let out_file = temp_out("export_empty_range", "csv");

    dlog()
        .args([
            "--db",
            &db_path,
            "export",
            "--format",
            "csv",
            "--file",
            &out_file,
            "--range",
            "2024-05",
        ])
        .assert()
        .success()
        .stdout(contains("No working days found"));
}
