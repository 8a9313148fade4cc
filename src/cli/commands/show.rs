use super::{parse_period, resolve_worker};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::calendar::build_month_view;
use crate::errors::AppResult;
use crate::store::kv::KvStore;
use crate::store::records;
use crate::utils::date::month_name;
use crate::utils::table::{Column, Table};
use crate::utils::time::format_time;

/// Render the month view of a timesheet. Column labels match the web
/// version's table.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Show { period, worker } = cmd {
        let (year, month) = parse_period(period)?;
        let worker = resolve_worker(worker, cfg)?;

        let store = KvStore::open(&cfg.database)?;
        let record = records::load_or_new(&store, &worker, month, year)?;

        println!("{} - {} {}", record.worker_name, month_name(month), year);
        if !record.signature.is_empty() {
            println!("(signed)");
        }
        println!();

        let mut table = Table::new(vec![
            Column::new("Día", 10),
            Column::new("Fecha", 5),
            Column::new("Entrada", 8),
            Column::new("Salida", 8),
            Column::new("Horas", 6),
            Column::new("Incidencias", 30),
        ]);

        for row in build_month_view(month, year, &record) {
            table.add_row(vec![
                row.weekday.to_string(),
                row.day.to_string(),
                row.entry.entry.map(format_time).unwrap_or_default(),
                row.entry.exit.map(format_time).unwrap_or_default(),
                row.entry.worked.clone().unwrap_or_else(|| "0:00".into()),
                row.entry.notes.replace('\n', " "),
            ]);
        }

        print!("{}", table.render());
    }

    Ok(())
}
