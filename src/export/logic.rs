// src/export/logic.rs

use crate::errors::{AppError, AppResult};
use crate::export::fs_utils::ensure_writable;
use crate::export::notify_export_success;
use crate::export::report::{default_file_name, format_report};
use crate::models::ScheduleRecord;
use crate::ui::messages::info;
use std::fs;
use std::path::{Path, PathBuf};

/// High-level export flow.
pub struct ExportLogic;

impl ExportLogic {
    /// Write the plain-text report for `record`.
    ///
    /// - `file`: explicit output path, or `None` for the default file name
    ///   inside `export_dir`.
    /// - `force`: overwrite an existing file without asking.
    ///
    /// Returns the path written.
    pub fn export(
        record: &ScheduleRecord,
        file: Option<&str>,
        export_dir: &str,
        force: bool,
    ) -> AppResult<PathBuf> {
        if record.worker_name.trim().is_empty() {
            return Err(AppError::Validation(
                "nothing to export: worker name is empty".into(),
            ));
        }

        let path = match file {
            Some(f) => PathBuf::from(f),
            None => Path::new(export_dir).join(default_file_name(record)),
        };

        ensure_writable(&path, force)?;

        info(format!("Exporting report: {}", path.display()));

        let content = format_report(record);
        fs::write(&path, content)?;

        notify_export_success(&path);
        Ok(path)
    }
}
