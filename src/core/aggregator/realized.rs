use super::working_day::{Anchors, Endpoint};
use crate::models::order::Order;

/// Anchor extraction from the recorded execution timestamps.
pub(super) fn anchors(order: &Order) -> Anchors {
    Anchors {
        start: Endpoint::from_opt(order.started_improdutive_time_at),
        first_point: Endpoint::from_opt(order.started_travel_at),
        last_point: Endpoint::from_opt(order.completed_at),
        end: Endpoint::from_opt(order.delivered_at),
    }
}
