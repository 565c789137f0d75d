#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn dlog() -> Command {
    cargo_bin_cmd!("driverlog")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_driverlog.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Write an orders fixture file into tempdir and return its path
pub fn write_fixture(name: &str, content: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_orders.json", name));
    fs::write(&path, content).expect("failed to write orders fixture");
    path.to_string_lossy().to_string()
}

/// Two orders for driver drv-1 on 2024-04-05 with a 70-minute idle gap
/// between delivery of the first and pickup of the second.
pub const TWO_ORDER_DAY: &str = r#"[
  {
    "id": "ord-a",
    "enterprise": "ent-1",
    "driver": "drv-1",
    "scheduled_at": "2024-04-05T00:00:00",
    "start_time": "08:00",
    "end_time": "09:00",
    "start_at": "2024-04-05T08:00:00",
    "end_at": "2024-04-05T08:55:00",
    "started_improdutive_time_at": "2024-04-05T08:00:00",
    "started_travel_at": "2024-04-05T08:10:00",
    "completed_at": "2024-04-05T08:40:00",
    "delivered_at": "2024-04-05T08:50:00",
    "waypoints": [
      { "seq": 1, "scheduled_at": "2024-04-05T08:12:00" },
      { "seq": 2, "scheduled_at": "2024-04-05T08:40:00" }
    ]
  },
  {
    "id": "ord-b",
    "enterprise": "ent-1",
    "driver": "drv-1",
    "scheduled_at": "2024-04-05T00:00:00",
    "start_time": "10:00",
    "started_improdutive_time_at": "2024-04-05T10:00:00",
    "started_travel_at": "2024-04-05T10:05:00",
    "completed_at": "2024-04-05T10:35:00",
    "delivered_at": "2024-04-05T10:45:00"
  }
]"#;

/// Same two orders, listed out of start order: the batch must sort them
/// before walking the sequence.
pub const TWO_ORDER_DAY_UNSORTED: &str = r#"[
  {
    "id": "ord-b",
    "enterprise": "ent-1",
    "driver": "drv-1",
    "scheduled_at": "2024-04-05T00:00:00",
    "start_time": "10:00",
    "started_improdutive_time_at": "2024-04-05T10:00:00",
    "started_travel_at": "2024-04-05T10:05:00",
    "completed_at": "2024-04-05T10:35:00",
    "delivered_at": "2024-04-05T10:45:00"
  },
  {
    "id": "ord-a",
    "enterprise": "ent-1",
    "driver": "drv-1",
    "scheduled_at": "2024-04-05T00:00:00",
    "start_time": "08:00",
    "started_improdutive_time_at": "2024-04-05T08:00:00",
    "started_travel_at": "2024-04-05T08:10:00",
    "completed_at": "2024-04-05T08:40:00",
    "delivered_at": "2024-04-05T08:50:00"
  }
]"#;

/// Initialize the DB schema and import the given fixture JSON
pub fn init_db_with_orders(db_path: &str, fixture_name: &str, fixture_json: &str) {
    dlog()
        .args(["--db", db_path, "--test", "init"])
        .assert()
        .success();

    let file = write_fixture(fixture_name, fixture_json);

    dlog()
        .args(["--db", db_path, "import", "--file", &file])
        .assert()
        .success();
}
