use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::models::ScheduleRecord;
use crate::store::kv::KvStore;
use crate::store::records;
use crate::ui::messages::{info, success};
use crate::utils::date::month_name;

/// Load a saved timesheet (by key, or the most recent one) and print a
/// summary.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Load { key } = cmd {
        let store = KvStore::open(&cfg.database)?;

        let record = match key {
            Some(k) => Some(records::load(&store, k)?),
            None => records::load_most_recent(&store)?,
        };

        match record {
            Some(record) => print_summary(&record),
            None => info("No saved timesheets yet."),
        }
    }

    Ok(())
}

fn print_summary(record: &ScheduleRecord) {
    success(format!(
        "Loaded timesheet: {} - {} {}",
        record.worker_name,
        month_name(record.month),
        record.year
    ));
    println!(
        "  days recorded: {}, signature: {}",
        record.touched_days(),
        if record.signature.is_empty() {
            "no"
        } else {
            "yes"
        }
    );
}
