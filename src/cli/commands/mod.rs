pub mod config;
pub mod export;
pub mod init;
pub mod list;
pub mod load;
pub mod set;
pub mod show;
pub mod sign;

use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::utils::date;

/// Resolve the worker name from the CLI flag or the configured default.
/// An explicitly passed name wins even when blank, so the save-time
/// validation still sees it.
pub(crate) fn resolve_worker(worker: &Option<String>, cfg: &Config) -> AppResult<String> {
    if let Some(w) = worker {
        return Ok(w.clone());
    }

    if !cfg.default_worker.trim().is_empty() {
        return Ok(cfg.default_worker.clone());
    }

    Err(AppError::Validation(
        "worker name is required (pass --worker or set default_worker in the config)".into(),
    ))
}

pub(crate) fn parse_period(period: &str) -> AppResult<(i32, u32)> {
    date::parse_year_month(period)
        .ok_or_else(|| AppError::InvalidDate(format!("expected YYYY-MM, got '{period}'")))
}
