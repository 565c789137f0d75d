use crate::core::aggregator::aggregate;
use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::db::queries::{load_orders_for_day, save_working_day};
use crate::errors::{AppError, AppResult};
use crate::models::mode::AggregationMode;
use crate::models::order::Order;
use crate::models::working_day::{DriverWorkingDay, WorkingDay};
use crate::ui::messages::{error, success, warning};
use chrono::NaiveDate;
use std::collections::BTreeMap;

/// Outcome of one batch run.
#[derive(Debug, Default)]
pub struct ProcessReport {
    pub orders_seen: usize,
    pub drivers_processed: usize,
    pub drivers_failed: usize,
}

/// High-level business logic for the `process` command.
pub struct ProcessLogic;

impl ProcessLogic {
    /// Process one enterprise/day: retrieve the day's orders, partition by
    /// driver, aggregate both modes and upsert one record per driver.
    ///
    /// A failure on one driver does not stop the others; the run fails only
    /// when retrieval fails or every driver failed.
    pub fn run(pool: &mut DbPool, enterprise: &str, date: NaiveDate) -> AppResult<ProcessReport> {
        let orders = load_orders_for_day(pool, enterprise, date)?;

        let mut report = ProcessReport {
            orders_seen: orders.len(),
            ..Default::default()
        };

        if orders.is_empty() {
            warning(format!("No orders found for {} on {}", enterprise, date));
            return Ok(report);
        }

        let grouped = group_by_driver(orders);
        let driver_count = grouped.len();

        for (driver, mut driver_orders) in grouped {
            sort_by_start(&mut driver_orders);

            let record = build_working_day(&driver, enterprise, date, &driver_orders);

            match save_working_day(&pool.conn, &record) {
                Ok(()) => {
                    report.drivers_processed += 1;
                    success(format!(
                        "{} → {} orders processed",
                        driver,
                        driver_orders.len()
                    ));
                }
                Err(e) => {
                    report.drivers_failed += 1;
                    error(format!("Driver {} failed: {}", driver, e));
                    let _ = ttlog(&pool.conn, "process", &driver, &format!("Driver failed: {e}"));
                }
            }
        }

        if report.drivers_processed == 0 {
            return Err(AppError::Process(format!(
                "All {} drivers failed for {} on {}",
                driver_count, enterprise, date
            )));
        }

        ttlog(
            &pool.conn,
            "process",
            enterprise,
            &format!(
                "Processed {} of {} drivers ({} orders) for {}",
                report.drivers_processed, driver_count, report.orders_seen, date
            ),
        )?;

        Ok(report)
    }
}

/// Partition a day's orders per driver. BTreeMap keeps the run order
/// deterministic.
fn group_by_driver(orders: Vec<Order>) -> BTreeMap<String, Vec<Order>> {
    let mut grouped: BTreeMap<String, Vec<Order>> = BTreeMap::new();

    for order in orders {
        grouped.entry(order.driver.clone()).or_default().push(order);
    }

    grouped
}

/// Ascending start-time sort. Orders missing the slot string fall back to
/// the scheduled timestamps; fully unscheduled orders sort first.
fn sort_by_start(orders: &mut [Order]) {
    orders.sort_by_key(|o| (o.start_slot(), o.start_at, o.scheduled_at));
}

fn build_working_day(
    driver: &str,
    enterprise: &str,
    date: NaiveDate,
    orders: &[Order],
) -> DriverWorkingDay {
    DriverWorkingDay {
        driver: driver.to_string(),
        date,
        enterprise: enterprise.to_string(),
        working_day: WorkingDay {
            realized: aggregate(orders, AggregationMode::Realized),
            foreseen: aggregate(orders, AggregationMode::Foreseen),
        },
        orders: orders.iter().map(|o| o.id.clone()).collect(),
    }
}
