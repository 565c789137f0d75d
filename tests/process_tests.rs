use predicates::str::contains;

mod common;
use common::{TWO_ORDER_DAY, TWO_ORDER_DAY_UNSORTED, dlog, init_db_with_orders, setup_test_db};

#[test]
fn test_process_two_orders_end_to_end() {
    let db_path = setup_test_db("process_two_orders");
    init_db_with_orders(&db_path, "process_two_orders", TWO_ORDER_DAY);

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
        .stdout(contains("1 drivers processed"));

    dlog()
        .args(["--db", &db_path, "list", "--period", "2024-04-05"])
        .assert()
        .success()
        .stdout(contains("drv-1"))
        .stdout(contains("realized"))
        .stdout(contains("foreseen"))
        // realized: work 01:35, unproductive 00:35, 70-minute gap → intra-day
        .stdout(contains("01:35"))
        .stdout(contains("00:35"))
        .stdout(contains("01:10"));
}

#[test]
fn test_process_sorts_orders_before_walking() {
    let db_path = setup_test_db("process_unsorted");
    init_db_with_orders(&db_path, "process_unsorted", TWO_ORDER_DAY_UNSORTED);

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

    // Sorted by start time, the inter-order gap is 08:50 → 10:00 (01:10);
    // an unsorted walk would classify a 02:45 gap instead.
    dlog()
        .args(["--db", &db_path, "list", "--period", "2024-04-05"])
        .assert()
        .success()
        .stdout(contains("01:10"))
        .stdout(contains("01:35"));
}

#[test]
fn test_process_day_without_orders() {
    let db_path = setup_test_db("process_empty_day");
    init_db_with_orders(&db_path, "process_empty_day", TWO_ORDER_DAY);

    dlog()
        .args([
            "--db",
            &db_path,
            "process",
            "--enterprise",
            "ent-1",
            "--date",
            "2024-04-06",
        ])
        .assert()
        .success()
        .stdout(contains("No orders found"));
}

#[test]
fn test_process_unknown_enterprise_finds_nothing() {
    let db_path = setup_test_db("process_unknown_ent");
    init_db_with_orders(&db_path, "process_unknown_ent", TWO_ORDER_DAY);

    dlog()
        .args([
            "--db",
            &db_path,
            "process",
            "--enterprise",
            "ent-9",
            "--date",
            "2024-04-05",
        ])
        .assert()
        .success()
        .stdout(contains("No orders found"));
}

#[test]
fn test_reprocess_upserts_one_record_per_driver() {
    let db_path = setup_test_db("process_upsert");
    init_db_with_orders(&db_path, "process_upsert", TWO_ORDER_DAY);

    for _ in 0..2 {
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
    }

    let out = dlog()
        .args(["--db", &db_path, "list", "--period", "2024-04-05"])
        .output()
        .expect("failed to list working days");
    assert!(out.status.success());

    let stdout = String::from_utf8_lossy(&out.stdout);
    let driver_rows = stdout.lines().filter(|l| l.contains("drv-1")).count();

    // One stored record → exactly two table rows (realized + foreseen).
    assert_eq!(driver_rows, 2, "expected a single record after reprocess");
}

#[test]
fn test_deleted_order_is_excluded_on_reprocess() {
    let db_path = setup_test_db("process_deleted_order");
    init_db_with_orders(&db_path, "process_deleted_order", TWO_ORDER_DAY);

    dlog()
        .args(["--db", &db_path, "del", "ord-b"])
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
        .stdout(contains("1 orders"));

    // Only ord-a remains: its realized work time is 00:50 and no gap exists.
    dlog()
        .args(["--db", &db_path, "list", "--period", "2024-04-05"])
        .assert()
        .success()
        .stdout(contains("00:50"));
}

#[test]
fn test_del_unknown_order_fails() {
    let db_path = setup_test_db("process_del_unknown");
    init_db_with_orders(&db_path, "process_del_unknown", TWO_ORDER_DAY);

    dlog()
        .args(["--db", &db_path, "del", "ord-z"])
        .assert()
        .failure()
        .stderr(contains("Order not found"));
}

#[test]
fn test_list_details_shows_per_order_rows() {
    let db_path = setup_test_db("process_list_details");
    init_db_with_orders(&db_path, "process_list_details", TWO_ORDER_DAY);

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

    dlog()
        .args([
            "--db",
            &db_path,
            "list",
            "--period",
            "2024-04-05",
            "--details",
        ])
        .assert()
        .success()
        .stdout(contains("ord-a"))
        .stdout(contains("ord-b"))
        .stdout(contains("08:00"))
        .stdout(contains("00:50"));
}

#[test]
fn test_list_filters_by_driver() {
    let db_path = setup_test_db("process_list_driver");
    init_db_with_orders(&db_path, "process_list_driver", TWO_ORDER_DAY);

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

    dlog()
        .args(["--db", &db_path, "list", "--driver", "drv-2"])
        .assert()
        .success()
        .stdout(contains("No working days found"));
}

#[test]
fn test_process_writes_audit_log() {
    let db_path = setup_test_db("process_audit_log");
    init_db_with_orders(&db_path, "process_audit_log", TWO_ORDER_DAY);

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

    dlog()
        .args(["--db", &db_path, "log", "--print"])
        .assert()
        .success()
        .stdout(contains("import"))
        .stdout(contains("process"));
}

#[test]
fn test_db_info_reports_counts() {
    let db_path = setup_test_db("process_db_info");
    init_db_with_orders(&db_path, "process_db_info", TWO_ORDER_DAY);

    dlog()
        .args(["--db", &db_path, "db", "--info", "--check"])
        .assert()
        .success()
        .stdout(contains("Orders:"))
        .stdout(contains("Integrity check passed"));
}
