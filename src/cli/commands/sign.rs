use super::{parse_period, resolve_worker};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::signature::data_url_from_file;
use crate::errors::{AppError, AppResult};
use crate::store::kv::KvStore;
use crate::store::records;
use crate::ui::messages::success;
use std::path::Path;

/// Attach an image file as the timesheet signature, or clear it.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Sign {
        period,
        worker,
        image,
        clear,
    } = cmd
    {
        let (year, month) = parse_period(period)?;
        let worker = resolve_worker(worker, cfg)?;

        let store = KvStore::open(&cfg.database)?;
        let mut record = records::load_or_new(&store, &worker, month, year)?;

        if *clear {
            record.signature = String::new();
        } else if let Some(file) = image {
            record.signature = data_url_from_file(Path::new(file))?;
        } else {
            return Err(AppError::Validation(
                "pass --image FILE to attach a signature, or --clear to remove it".into(),
            ));
        }

        let key = records::save(&store, &record)?;

        if *clear {
            success(format!("Signature cleared (saved as '{key}')"));
        } else {
            success(format!("Signature attached (saved as '{key}')"));
        }
    }

    Ok(())
}
