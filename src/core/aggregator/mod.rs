//! Working-day aggregation: walks a driver's chronologically sorted orders
//! and derives duration metrics between lifecycle timestamps and between
//! consecutive orders.

mod foreseen;
mod realized;
mod working_day;

pub use working_day::{INTRA_DAY_THRESHOLD_MIN, aggregate};
