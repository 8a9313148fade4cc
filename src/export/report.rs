//! Plain-text report rendering.
//!
//! The layout (headings, sentinels, Spanish labels) is byte-compatible with
//! the reports produced by the web version of this tool, so exports stay
//! diffable across versions.

use crate::models::ScheduleRecord;
use crate::store::records::storage_key;
use crate::utils::date::{month_name, weekday_name};
use crate::utils::time::format_time;
use chrono::Datelike;

/// Sentinel for a missing entry or exit time.
const NOT_RECORDED: &str = "No registrada";

/// Render the record as a human-readable report.
///
/// One block per day key, in map order (chronological, since "YYYY-MM-DD"
/// keys sort that way). A record with no day entries yields just the header.
pub fn format_report(record: &ScheduleRecord) -> String {
    let mut out = String::new();

    out.push_str("HORARIO LABORAL\n");
    out.push_str("================\n\n");
    out.push_str(&format!("Trabajador: {}\n", record.worker_name));
    out.push_str(&format!(
        "Período: {} {}\n\n",
        month_name(record.month),
        record.year
    ));
    out.push_str("REGISTRO DE HORARIOS:\n");
    out.push_str("--------------------\n");

    for (date, day) in &record.days {
        out.push_str(&format!("{} {}:\n", weekday_name(*date), date.day()));
        out.push_str(&format!(
            "  Entrada: {}\n",
            day.entry.map(format_time).unwrap_or_else(|| NOT_RECORDED.into())
        ));
        out.push_str(&format!(
            "  Salida: {}\n",
            day.exit.map(format_time).unwrap_or_else(|| NOT_RECORDED.into())
        ));
        out.push_str(&format!(
            "  Horas trabajadas: {}\n",
            day.worked.as_deref().unwrap_or("0:00")
        ));
        if !day.notes.is_empty() {
            out.push_str(&format!("  Incidencias: {}\n", day.notes));
        }
        out.push('\n');
    }

    out
}

/// Default export file name: the storage key plus a `.txt` extension.
pub fn default_file_name(record: &ScheduleRecord) -> String {
    format!(
        "{}.txt",
        storage_key(&record.worker_name, record.year, record.month)
    )
}
