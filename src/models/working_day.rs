//! Computed working-day records: aggregate totals per driver plus the
//! per-order breakdown. All durations are "HH:MM" strings; values are
//! created fresh per aggregation run and never mutated afterwards.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

const ZERO: &str = "00:00";

/// Aggregate totals for one driver's day.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Summary {
    pub work_time: String,
    pub unproductive_time: String,
    pub productive_time: String,
    pub on_hold_time: String,
    pub intra_day: String,
    // Reserved: no code path populates these yet.
    pub inter_day: String,
    pub overtime: String,
}

impl Default for Summary {
    fn default() -> Self {
        Self {
            work_time: ZERO.into(),
            unproductive_time: ZERO.into(),
            productive_time: ZERO.into(),
            on_hold_time: ZERO.into(),
            intra_day: ZERO.into(),
            inter_day: ZERO.into(),
            overtime: ZERO.into(),
        }
    }
}

/// Per-order duration breakdown, with the anchor timestamps the durations
/// were derived from. `on_hold_time`, `overtime` and `intra_day` are the
/// running day totals at that point of the walk, not per-order values.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkingDayDetail {
    pub id: String,
    pub start_at: Option<NaiveDateTime>,
    pub first_point_at: Option<NaiveDateTime>,
    pub last_point_at: Option<NaiveDateTime>,
    pub end_at: Option<NaiveDateTime>,
    pub unproductive_time_init: String,
    pub unproductive_time_end: String,
    pub productive_time: String,
    pub work_time: String,
    pub on_hold_time: String,
    pub overtime: String,
    pub intra_day: String,
}

/// One aggregation mode's output: summary plus one detail row per order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ModeBreakdown {
    pub summary: Summary,
    pub details: Vec<WorkingDayDetail>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WorkingDay {
    pub realized: ModeBreakdown,
    pub foreseen: ModeBreakdown,
}

/// The persisted record: one per driver per day per enterprise.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DriverWorkingDay {
    pub driver: String,
    pub date: NaiveDate,
    pub enterprise: String,
    pub working_day: WorkingDay,
    pub orders: Vec<String>,
}
