// src/export/mod.rs

mod fs_utils;
pub mod logic;
pub mod report;

pub use logic::ExportLogic;

use crate::ui::messages::success;
use std::path::Path;

pub(crate) fn notify_export_success(path: &Path) {
    success(format!("Report written to {}", path.display()));
}
