use super::{parse_period, resolve_worker};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::export::ExportLogic;
use crate::store::kv::KvStore;
use crate::store::records;

/// Export a saved timesheet as a plain-text report.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        period,
        worker,
        file,
        force,
    } = cmd
    {
        let (year, month) = parse_period(period)?;
        let worker = resolve_worker(worker, cfg)?;

        let store = KvStore::open(&cfg.database)?;
        let record = records::load(&store, &records::storage_key(&worker, year, month))?;

        ExportLogic::export(&record, file.as_deref(), &cfg.export_dir, *force)?;
    }

    Ok(())
}
