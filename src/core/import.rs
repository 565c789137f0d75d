use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::db::queries::insert_order;
use crate::errors::{AppError, AppResult};
use crate::models::order::Order;
use crate::utils::time::parse_time;
use std::fs;

/// High-level business logic for the `import` command.
pub struct ImportLogic;

impl ImportLogic {
    /// Read a JSON array of order records, validate each one at the
    /// boundary and insert them in a single transaction. Re-importing an
    /// order id replaces the previous row.
    pub fn apply(pool: &mut DbPool, file: &str) -> AppResult<usize> {
        let raw = fs::read_to_string(file)?;

        let mut orders: Vec<Order> = serde_json::from_str(&raw)
            .map_err(|e| AppError::Import(format!("{}: {}", file, e)))?;

        for order in &orders {
            validate(order)?;
        }

        // Route order is defined by seq, whatever order the file listed.
        for order in &mut orders {
            order.waypoints.sort_by_key(|w| w.seq);
        }

        let tx = pool.conn.transaction()?;
        for order in &orders {
            insert_order(&tx, order)?;
        }
        tx.commit()?;

        ttlog(
            &pool.conn,
            "import",
            file,
            &format!("Imported {} orders", orders.len()),
        )?;

        Ok(orders.len())
    }
}

/// Boundary validation. Field types are already guaranteed by
/// deserialization; this rejects records that would be unusable downstream.
fn validate(order: &Order) -> AppResult<()> {
    if order.id.trim().is_empty() {
        return Err(AppError::InvalidOrder("empty order id".into()));
    }
    if order.driver.trim().is_empty() {
        return Err(AppError::InvalidOrder(format!(
            "order {}: empty driver",
            order.id
        )));
    }
    if order.enterprise.trim().is_empty() {
        return Err(AppError::InvalidOrder(format!(
            "order {}: empty enterprise",
            order.id
        )));
    }

    if let Some(t) = &order.start_time
        && parse_time(t).is_none()
    {
        return Err(AppError::InvalidTime(format!(
            "order {}: start_time '{}'",
            order.id, t
        )));
    }
    if let Some(t) = &order.end_time
        && parse_time(t).is_none()
    {
        return Err(AppError::InvalidTime(format!(
            "order {}: end_time '{}'",
            order.id, t
        )));
    }

    Ok(())
}
