use super::working_day::{Anchors, Endpoint};
use crate::models::order::Order;
use chrono::{NaiveDateTime, NaiveTime};

/// Anchor extraction from the scheduled plan: the order time window plus the
/// first and last route waypoints.
pub(super) fn anchors(order: &Order) -> Anchors {
    Anchors {
        start: window_endpoint(order.start_at, order.start_slot()),
        first_point: Endpoint::from_opt(order.first_waypoint_at()),
        last_point: Endpoint::from_opt(order.last_waypoint_at()),
        end: window_endpoint(order.end_at, order.end_slot()),
    }
}

/// A scheduled window end comes either as a full timestamp or as a bare
/// "HH:MM" slot; the timestamp wins when both are present.
fn window_endpoint(at: Option<NaiveDateTime>, slot: Option<NaiveTime>) -> Endpoint {
    match (at, slot) {
        (Some(ts), _) => Endpoint::At(ts),
        (None, Some(t)) => Endpoint::Slot(t),
        (None, None) => Endpoint::Missing,
    }
}
