use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::db::queries::soft_delete_order;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::info;

pub struct DeleteLogic;

impl DeleteLogic {
    /// Soft-delete an order. Already-computed working days keep their
    /// values until the day is reprocessed.
    pub fn apply(pool: &mut DbPool, order_id: &str) -> AppResult<()> {
        if !soft_delete_order(&pool.conn, order_id)? {
            return Err(AppError::OrderNotFound(order_id.to_string()));
        }

        ttlog(&pool.conn, "del", order_id, "Order soft-deleted")?;

        info(format!(
            "Order {} marked as deleted. Re-run `process` for its day to refresh summaries.",
            order_id
        ));

        Ok(())
    }
}
