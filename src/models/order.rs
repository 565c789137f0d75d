use crate::utils::time::parse_time;
use chrono::{Local, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

/// A scheduled stop along the order route.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Waypoint {
    #[serde(default)]
    pub seq: i64,
    #[serde(default)]
    pub scheduled_at: Option<NaiveDateTime>,
}

/// One delivery order assigned to a driver on a given day.
///
/// Lifecycle timestamps are nullable: an order abandoned mid-flight simply
/// carries `None` for the milestones it never reached. Within one order the
/// milestones are non-decreasing in the happy path, but nothing here assumes
/// that ordering holds.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    pub id: String,
    pub enterprise: String,
    pub driver: String,
    pub scheduled_at: NaiveDateTime,

    // Scheduled window: either full timestamps or bare "HH:MM" slots,
    // depending on how the order was planned.
    #[serde(default)]
    pub start_time: Option<String>,
    #[serde(default)]
    pub end_time: Option<String>,
    #[serde(default)]
    pub start_at: Option<NaiveDateTime>,
    #[serde(default)]
    pub end_at: Option<NaiveDateTime>,

    // Execution milestones, recorded by the driver app.
    #[serde(default)]
    pub started_improdutive_time_at: Option<NaiveDateTime>,
    #[serde(default)]
    pub started_travel_at: Option<NaiveDateTime>,
    #[serde(default)]
    pub completed_at: Option<NaiveDateTime>,
    #[serde(default)]
    pub delivered_at: Option<NaiveDateTime>,

    #[serde(default)]
    pub waypoints: Vec<Waypoint>,

    #[serde(default)]
    pub deleted: bool,
    #[serde(default = "now")]
    pub created_at: NaiveDateTime,
}

fn now() -> NaiveDateTime {
    Local::now().naive_local()
}

impl Order {
    /// Scheduled slot start, when `start_time` is present and parses.
    pub fn start_slot(&self) -> Option<NaiveTime> {
        self.start_time.as_deref().and_then(parse_time)
    }

    /// Scheduled slot end, when `end_time` is present and parses.
    pub fn end_slot(&self) -> Option<NaiveTime> {
        self.end_time.as_deref().and_then(parse_time)
    }

    pub fn first_waypoint_at(&self) -> Option<NaiveDateTime> {
        self.waypoints.first().and_then(|w| w.scheduled_at)
    }

    pub fn last_waypoint_at(&self) -> Option<NaiveDateTime> {
        self.waypoints.last().and_then(|w| w.scheduled_at)
    }
}
