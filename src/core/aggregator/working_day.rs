use crate::models::mode::AggregationMode;
use crate::models::order::Order;
use crate::models::working_day::{ModeBreakdown, Summary, WorkingDayDetail};
use crate::utils::time::{elapsed_minutes, minutes_to_hhmm, wall_clock_elapsed};
use chrono::{NaiveDateTime, NaiveTime};

use super::{foreseen, realized};

/// Inter-order gaps at or above this many minutes count as intra-day idle
/// time; shorter gaps count as on-hold.
pub const INTRA_DAY_THRESHOLD_MIN: i64 = 60;

/// One end of a measured interval.
///
/// Foreseen anchors may only exist as a bare "HH:MM" slot, which carries no
/// date; `span` degrades to wall-clock arithmetic in that case.
#[derive(Debug, Clone, Copy)]
pub(super) enum Endpoint {
    Missing,
    At(NaiveDateTime),
    Slot(NaiveTime),
}

impl Endpoint {
    pub(super) fn from_opt(ts: Option<NaiveDateTime>) -> Self {
        match ts {
            Some(ts) => Endpoint::At(ts),
            None => Endpoint::Missing,
        }
    }

    fn at(self) -> Option<NaiveDateTime> {
        match self {
            Endpoint::At(ts) => Some(ts),
            _ => None,
        }
    }
}

/// The four timestamps one aggregation mode reads from an order.
pub(super) struct Anchors {
    pub start: Endpoint,
    pub first_point: Endpoint,
    pub last_point: Endpoint,
    pub end: Endpoint,
}

fn anchors(order: &Order, mode: AggregationMode) -> Anchors {
    match mode {
        AggregationMode::Realized => realized::anchors(order),
        AggregationMode::Foreseen => foreseen::anchors(order),
    }
}

/// Absolute elapsed minutes between two interval ends. A missing endpoint
/// yields 0; slot endpoints reduce to within-hour wall-clock distance.
fn span(a: Endpoint, b: Endpoint) -> i64 {
    use Endpoint::*;
    match (a, b) {
        (At(x), At(y)) => elapsed_minutes(Some(x), Some(y)),
        (At(x), Slot(t)) | (Slot(t), At(x)) => wall_clock_elapsed(x.time(), t),
        (Slot(x), Slot(y)) => wall_clock_elapsed(x, y),
        _ => 0,
    }
}

/// Aggregate one driver's order sequence into a summary plus one detail row
/// per order.
///
/// `orders` must already be sorted ascending by start time: the gap
/// classification reads consecutive elements. An empty sequence yields a
/// zero-filled summary and no details.
pub fn aggregate(orders: &[Order], mode: AggregationMode) -> ModeBreakdown {
    let mut work_time = 0i64;
    let mut unproductive_time = 0i64;
    let mut productive_time = 0i64;
    let mut on_hold_time = 0i64;
    let mut intra_day = 0i64;
    // Reserved totals: no code path populates these yet.
    let inter_day = 0i64;
    let overtime = 0i64;

    let mut details = Vec::with_capacity(orders.len());

    for (i, order) in orders.iter().enumerate() {
        let a = anchors(order, mode);

        // pickup → travel start
        let unproductive_init = span(a.start, a.first_point);
        // travel end → delivery
        let unproductive_end = span(a.last_point, a.end);
        // travel start → travel end
        let productive = span(a.first_point, a.last_point);
        // pickup → delivery
        let work = span(a.start, a.end);

        unproductive_time += unproductive_init + unproductive_end;
        productive_time += productive;
        work_time += work;

        // Idle gap to the next order. The last order contributes no gap:
        // the running totals stay at their last-accumulated values and its
        // detail row re-emits them unchanged.
        if let Some(next) = orders.get(i + 1) {
            let gap = span(anchors(next, mode).start, a.end);
            if gap < INTRA_DAY_THRESHOLD_MIN {
                on_hold_time += gap;
            } else {
                intra_day += gap;
            }
        }

        details.push(WorkingDayDetail {
            id: order.id.clone(),
            start_at: a.start.at(),
            first_point_at: a.first_point.at(),
            last_point_at: a.last_point.at(),
            end_at: a.end.at(),
            unproductive_time_init: minutes_to_hhmm(unproductive_init),
            unproductive_time_end: minutes_to_hhmm(unproductive_end),
            productive_time: minutes_to_hhmm(productive),
            work_time: minutes_to_hhmm(work),
            // Running day totals, not per-order values.
            on_hold_time: minutes_to_hhmm(on_hold_time),
            overtime: minutes_to_hhmm(overtime),
            intra_day: minutes_to_hhmm(intra_day),
        });
    }

    ModeBreakdown {
        summary: Summary {
            work_time: minutes_to_hhmm(work_time),
            unproductive_time: minutes_to_hhmm(unproductive_time),
            productive_time: minutes_to_hhmm(productive_time),
            on_hold_time: minutes_to_hhmm(on_hold_time),
            intra_day: minutes_to_hhmm(intra_day),
            inter_day: minutes_to_hhmm(inter_day),
            overtime: minutes_to_hhmm(overtime),
        },
        details,
    }
}
