mod fs_utils;
mod json_csv;
pub mod logic;
pub(crate) mod model;
pub(crate) mod range;

pub use logic::ExportLogic;
pub use model::SummaryExport;

use crate::ui::messages::success;
use clap::ValueEnum;
use std::path::Path;

/// Shared completion message for exports.
pub(crate) fn notify_export_success(label: &str, path: &Path) {
    success(format!("{label} export completed: {}", path.display()));
}

#[derive(Clone, Debug, ValueEnum)]
pub enum ExportFormat {
    Csv,
    Json,
}
