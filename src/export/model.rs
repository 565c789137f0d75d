use crate::models::working_day::DriverWorkingDay;
use serde::Serialize;

/// Flat per-driver summary row for export: one row per aggregation mode.
#[derive(Serialize, Clone, Debug)]
pub struct SummaryExport {
    pub driver: String,
    pub date: String,
    pub enterprise: String,
    pub mode: String,
    pub orders: usize,
    pub work_time: String,
    pub unproductive_time: String,
    pub productive_time: String,
    pub on_hold_time: String,
    pub intra_day: String,
    pub inter_day: String,
    pub overtime: String,
}

/// Flatten one stored record into its realized and foreseen rows.
pub(crate) fn flatten(record: &DriverWorkingDay) -> Vec<SummaryExport> {
    [
        ("realized", &record.working_day.realized),
        ("foreseen", &record.working_day.foreseen),
    ]
    .into_iter()
    .map(|(mode, breakdown)| SummaryExport {
        driver: record.driver.clone(),
        date: record.date.format("%Y-%m-%d").to_string(),
        enterprise: record.enterprise.clone(),
        mode: mode.to_string(),
        orders: record.orders.len(),
        work_time: breakdown.summary.work_time.clone(),
        unproductive_time: breakdown.summary.unproductive_time.clone(),
        productive_time: breakdown.summary.productive_time.clone(),
        on_hold_time: breakdown.summary.on_hold_time.clone(),
        intra_day: breakdown.summary.intra_day.clone(),
        inter_day: breakdown.summary.inter_day.clone(),
        overtime: breakdown.summary.overtime.clone(),
    })
    .collect()
}
