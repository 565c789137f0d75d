//! Time utilities: parsing HH:MM, elapsed-minute computations, formatting
//! minute counts, etc.

use chrono::{NaiveDateTime, NaiveTime};

pub fn parse_time(t: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(t, "%H:%M").ok()
}

/// Absolute elapsed minutes between two timestamps.
/// A missing endpoint yields 0, never an error.
pub fn elapsed_minutes(a: Option<NaiveDateTime>, b: Option<NaiveDateTime>) -> i64 {
    match (a, b) {
        (Some(a), Some(b)) => (b - a).num_minutes().abs(),
        _ => 0,
    }
}

/// Elapsed minutes between two wall-clock times, reduced to the minute
/// component (mod 60). Scheduled "HH:MM" slots carry no date, so only the
/// within-hour distance is kept.
pub fn wall_clock_elapsed(a: NaiveTime, b: NaiveTime) -> i64 {
    (b - a).num_minutes().abs() % 60
}

/// Format a minute count as "HH:MM". Negative inputs clamp to "00:00".
pub fn minutes_to_hhmm(mins: i64) -> String {
    let m = mins.max(0);
    format!("{:02}:{:02}", m / 60, m % 60)
}
