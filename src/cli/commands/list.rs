use crate::config::Config;
use crate::errors::AppResult;
use crate::store::kv::KvStore;
use crate::store::records;
use crate::ui::messages::info;
use crate::utils::date::month_name;
use crate::utils::table::{Column, Table};

/// List every saved timesheet from the index, most recent last.
pub fn handle(cfg: &Config) -> AppResult<()> {
    let store = KvStore::open(&cfg.database)?;
    let index = records::load_index(&store)?;

    if index.is_empty() {
        info("No saved timesheets yet.");
        return Ok(());
    }

    let mut table = Table::new(vec![
        Column::new("Key", 34),
        Column::new("Worker", 20),
        Column::new("Period", 16),
        Column::new("Saved", 17),
    ]);

    for entry in &index {
        table.add_row(vec![
            entry.key.clone(),
            entry.worker_name.clone(),
            format!("{} {}", month_name(entry.month), entry.year),
            entry.saved_at.format("%Y-%m-%d %H:%M").to_string(),
        ]);
    }

    print!("{}", table.render());
    Ok(())
}
