use predicates::str::contains;

mod common;
use common::{TWO_ORDER_DAY, dlog, init_db_with_orders, setup_test_db, write_fixture};

#[test]
fn test_import_reports_count() {
    let db_path = setup_test_db("import_count");

    dlog()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    let file = write_fixture("import_count", TWO_ORDER_DAY);

    dlog()
        .args(["--db", &db_path, "import", "--file", &file])
        .assert()
        .success()
        .stdout(contains("Imported 2 orders"));
}

#[test]
fn test_import_rejects_invalid_json() {
    let db_path = setup_test_db("import_bad_json");

    dlog()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    let file = write_fixture("import_bad_json", "{ not json ]");

    dlog()
        .args(["--db", &db_path, "import", "--file", &file])
        .assert()
        .failure()
        .stderr(contains("Import error"));
}

#[test]
fn test_import_rejects_empty_driver() {
    let db_path = setup_test_db("import_empty_driver");

    dlog()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    let file = write_fixture(
        "import_empty_driver",
        r#"[
          {
            "id": "ord-x",
            "enterprise": "ent-1",
            "driver": "",
            "scheduled_at": "2024-04-05T00:00:00"
          }
        ]"#,
    );

    dlog()
        .args(["--db", &db_path, "import", "--file", &file])
        .assert()
        .failure()
        .stderr(contains("empty driver"));
}

#[test]
fn test_import_rejects_malformed_slot_time() {
    let db_path = setup_test_db("import_bad_slot");

    dlog()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    let file = write_fixture(
        "import_bad_slot",
        r#"[
          {
            "id": "ord-x",
            "enterprise": "ent-1",
            "driver": "drv-1",
            "scheduled_at": "2024-04-05T00:00:00",
            "start_time": "8h30"
          }
        ]"#,
    );

    dlog()
        .args(["--db", &db_path, "import", "--file", &file])
        .assert()
        .failure()
        .stderr(contains("Invalid time format"));
}

#[test]
fn test_reimport_replaces_orders() {
    let db_path = setup_test_db("import_replace");
    init_db_with_orders(&db_path, "import_replace", TWO_ORDER_DAY);

    // Second import of the same file must replace, not duplicate.
    let file = write_fixture("import_replace_again", TWO_ORDER_DAY);
    dlog()
        .args(["--db", &db_path, "import", "--file", &file])
        .assert()
        .success();

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
        .success()
        .stdout(contains("2 orders"));
}
