use crate::db::pool::DbPool;
use crate::utils::colors::{CYAN, GREY, RESET};
use rusqlite::OptionalExtension;
use std::fs;

fn count_rows(pool: &mut DbPool, table: &str) -> rusqlite::Result<i64> {
    pool.conn
        .query_row(&format!("SELECT COUNT(*) FROM {}", table), [], |row| {
            row.get(0)
        })
}

pub fn print_db_info(pool: &mut DbPool, db_path: &str) -> rusqlite::Result<()> {
    println!();

    //
    // 1) FILE SIZE
    //
    let file_size = fs::metadata(db_path).map(|m| m.len()).unwrap_or(0);
    let file_mb = (file_size as f64) / (1024.0 * 1024.0);

    println!("{}Database:{} {}", CYAN, RESET, db_path);
    println!("{}Size:{}     {:.2} MB", CYAN, RESET, file_mb);
    println!();

    //
    // 2) ROW COUNTS
    //
    let orders = count_rows(pool, "orders")?;
    let waypoints = count_rows(pool, "waypoints")?;
    let working_days = count_rows(pool, "working_days")?;
    let log_lines = count_rows(pool, "log")?;

    println!("{}Orders:{}        {}", CYAN, RESET, orders);
    println!("{}Waypoints:{}     {}", CYAN, RESET, waypoints);
    println!("{}Working days:{}  {}", CYAN, RESET, working_days);
    println!("{}Log lines:{}     {}", CYAN, RESET, log_lines);
    println!();

    //
    // 3) ORDER DATE SPAN
    //
    let span: Option<(String, String)> = pool
        .conn
        .query_row(
            "SELECT MIN(scheduled_at), MAX(scheduled_at) FROM orders WHERE deleted = 0",
            [],
            |row| {
                let min: Option<String> = row.get(0)?;
                let max: Option<String> = row.get(1)?;
                Ok(min.zip(max))
            },
        )
        .optional()?
        .flatten();

    match span {
        Some((min, max)) => {
            println!("{}First order:{} {}", CYAN, RESET, min);
            println!("{}Last order:{}  {}", CYAN, RESET, max);
        }
        None => println!("{}No orders stored.{}", GREY, RESET),
    }

    //
    // 4) LAST PROCESS RUN
    //
    let last_run: Option<String> = pool
        .conn
        .query_row(
            "SELECT MAX(created_at) FROM working_days",
            [],
            |row| row.get(0),
        )
        .optional()?
        .flatten();

    if let Some(ts) = last_run {
        println!("{}Last processed:{} {}", CYAN, RESET, ts);
    }

    println!();
    Ok(())
}
