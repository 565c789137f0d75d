use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::order::{Order, Waypoint};
use crate::models::working_day::DriverWorkingDay;
use chrono::{Local, NaiveDate, NaiveDateTime};
use rusqlite::{Connection, Result, Row, params};

const DB_DATETIME_FMT: &str = "%Y-%m-%d %H:%M:%S";

pub fn datetime_to_db(ts: &NaiveDateTime) -> String {
    ts.format(DB_DATETIME_FMT).to_string()
}

pub fn datetime_from_db(s: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(s, DB_DATETIME_FMT).ok()
}

fn required_datetime(row: &Row, col: &str) -> Result<NaiveDateTime> {
    let raw: String = row.get(col)?;
    datetime_from_db(&raw).ok_or_else(|| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            Box::new(AppError::InvalidDate(raw)),
        )
    })
}

fn optional_datetime(row: &Row, col: &str) -> Result<Option<NaiveDateTime>> {
    let raw: Option<String> = row.get(col)?;
    match raw {
        None => Ok(None),
        Some(s) => {
            let ts = datetime_from_db(&s).ok_or_else(|| {
                rusqlite::Error::FromSqlConversionFailure(
                    0,
                    rusqlite::types::Type::Text,
                    Box::new(AppError::InvalidDate(s)),
                )
            })?;
            Ok(Some(ts))
        }
    }
}

/// Mapping DB → Order. Waypoints are loaded separately by the callers that
/// need them.
pub fn map_order_row(row: &Row) -> Result<Order> {
    Ok(Order {
        id: row.get("id")?,
        enterprise: row.get("enterprise")?,
        driver: row.get("driver")?,
        scheduled_at: required_datetime(row, "scheduled_at")?,
        start_time: row.get("start_time")?,
        end_time: row.get("end_time")?,
        start_at: optional_datetime(row, "start_at")?,
        end_at: optional_datetime(row, "end_at")?,
        started_improdutive_time_at: optional_datetime(row, "started_improdutive_time_at")?,
        started_travel_at: optional_datetime(row, "started_travel_at")?,
        completed_at: optional_datetime(row, "completed_at")?,
        delivered_at: optional_datetime(row, "delivered_at")?,
        waypoints: Vec::new(),
        deleted: row.get::<_, i32>("deleted")? == 1,
        created_at: required_datetime(row, "created_at")?,
    })
}

pub fn load_waypoints(conn: &Connection, order_id: &str) -> AppResult<Vec<Waypoint>> {
    let mut stmt = conn.prepare_cached(
        "SELECT seq, scheduled_at FROM waypoints
         WHERE order_id = ?1
         ORDER BY seq ASC",
    )?;

    let rows = stmt.query_map([order_id], |row| {
        Ok(Waypoint {
            seq: row.get(0)?,
            scheduled_at: {
                let raw: Option<String> = row.get(1)?;
                raw.and_then(|s| datetime_from_db(&s))
            },
        })
    })?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

/// Load the non-deleted orders of one enterprise scheduled within the given
/// calendar day (inclusive start-of-day to end-of-day).
pub fn load_orders_for_day(
    pool: &mut DbPool,
    enterprise: &str,
    date: NaiveDate,
) -> AppResult<Vec<Order>> {
    let day_start = format!("{} 00:00:00", date.format("%Y-%m-%d"));
    let day_end = format!("{} 23:59:59", date.format("%Y-%m-%d"));

    let mut orders = Vec::new();
    {
        let mut stmt = pool.conn.prepare(
            "SELECT * FROM orders
             WHERE deleted = 0
               AND enterprise = ?1
               AND scheduled_at BETWEEN ?2 AND ?3
             ORDER BY scheduled_at ASC",
        )?;

        let rows = stmt.query_map(params![enterprise, day_start, day_end], map_order_row)?;

        for r in rows {
            orders.push(r?);
        }
    }

    for order in &mut orders {
        order.waypoints = load_waypoints(&pool.conn, &order.id)?;
    }

    Ok(orders)
}

/// Insert an order, replacing a previous import of the same id. Waypoints
/// are rewritten as a whole.
pub fn insert_order(conn: &Connection, order: &Order) -> AppResult<()> {
    conn.execute(
        "INSERT OR REPLACE INTO orders
         (id, enterprise, driver, scheduled_at, start_time, end_time,
          start_at, end_at, started_improdutive_time_at, started_travel_at,
          completed_at, delivered_at, deleted, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14)",
        params![
            order.id,
            order.enterprise,
            order.driver,
            datetime_to_db(&order.scheduled_at),
            order.start_time,
            order.end_time,
            order.start_at.as_ref().map(datetime_to_db),
            order.end_at.as_ref().map(datetime_to_db),
            order.started_improdutive_time_at.as_ref().map(datetime_to_db),
            order.started_travel_at.as_ref().map(datetime_to_db),
            order.completed_at.as_ref().map(datetime_to_db),
            order.delivered_at.as_ref().map(datetime_to_db),
            if order.deleted { 1 } else { 0 },
            datetime_to_db(&order.created_at),
        ],
    )?;

    conn.execute("DELETE FROM waypoints WHERE order_id = ?1", [&order.id])?;

    let mut waypoints: Vec<&Waypoint> = order.waypoints.iter().collect();
    waypoints.sort_by_key(|w| w.seq);

    let mut stmt = conn.prepare_cached(
        "INSERT INTO waypoints (order_id, seq, scheduled_at) VALUES (?1, ?2, ?3)",
    )?;
    for w in waypoints {
        stmt.execute(params![
            order.id,
            w.seq,
            w.scheduled_at.as_ref().map(datetime_to_db)
        ])?;
    }

    Ok(())
}

/// Soft-delete an order. Returns false when no row matched.
pub fn soft_delete_order(conn: &Connection, order_id: &str) -> AppResult<bool> {
    let changed = conn.execute("UPDATE orders SET deleted = 1 WHERE id = ?1", [order_id])?;
    Ok(changed > 0)
}

/// Upsert the computed record: one row per driver per day per enterprise.
pub fn save_working_day(conn: &Connection, record: &DriverWorkingDay) -> AppResult<()> {
    let document = serde_json::to_string(record)
        .map_err(|e| AppError::Other(format!("Failed to serialize working day: {e}")))?;

    conn.execute(
        "INSERT INTO working_days (driver, date, enterprise, document, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5)
         ON CONFLICT(driver, date, enterprise)
         DO UPDATE SET document = excluded.document, created_at = excluded.created_at",
        params![
            record.driver,
            record.date.format("%Y-%m-%d").to_string(),
            record.enterprise,
            document,
            Local::now().to_rfc3339(),
        ],
    )?;

    Ok(())
}

/// Load stored working-day records, optionally bounded by a date interval
/// and filtered by driver.
pub fn load_working_days(
    pool: &mut DbPool,
    bounds: Option<(NaiveDate, NaiveDate)>,
    driver: Option<&str>,
) -> AppResult<Vec<DriverWorkingDay>> {
    let mut sql = String::from("SELECT document FROM working_days WHERE 1=1");
    let mut args: Vec<String> = Vec::new();

    if let Some((start, end)) = bounds {
        sql.push_str(&format!(
            " AND date BETWEEN ?{} AND ?{}",
            args.len() + 1,
            args.len() + 2
        ));
        args.push(start.format("%Y-%m-%d").to_string());
        args.push(end.format("%Y-%m-%d").to_string());
    }

    if let Some(d) = driver {
        sql.push_str(&format!(" AND driver = ?{}", args.len() + 1));
        args.push(d.to_string());
    }

    sql.push_str(" ORDER BY date ASC, driver ASC");

    let mut stmt = pool.conn.prepare(&sql)?;
    let params: Vec<&dyn rusqlite::ToSql> = args.iter().map(|s| s as &dyn rusqlite::ToSql).collect();

    let rows = stmt.query_map(rusqlite::params_from_iter(params), |row| {
        row.get::<_, String>(0)
    })?;

    let mut out = Vec::new();
    for r in rows {
        let document = r?;
        let record: DriverWorkingDay = serde_json::from_str(&document)
            .map_err(|e| AppError::Other(format!("Malformed stored working day: {e}")))?;
        out.push(record);
    }

    Ok(out)
}
