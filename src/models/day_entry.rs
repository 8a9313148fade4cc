use crate::utils::time::{hhmm_opt, worked_duration};
use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

/// One calendar day of the timesheet.
///
/// Wire field names match the legacy data files ("entrada", "salida",
/// "horasTrabajadas", "incidencias"), so schedules saved by the web version
/// load unchanged.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DayEntry {
    #[serde(
        rename = "entrada",
        default,
        with = "hhmm_opt",
        skip_serializing_if = "Option::is_none"
    )]
    pub entry: Option<NaiveTime>,

    #[serde(
        rename = "salida",
        default,
        with = "hhmm_opt",
        skip_serializing_if = "Option::is_none"
    )]
    pub exit: Option<NaiveTime>,

    /// Derived "H:MM" worked hours, present only once both times have been
    /// set together at least once.
    #[serde(
        rename = "horasTrabajadas",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub worked: Option<String>,

    #[serde(
        rename = "incidencias",
        default,
        skip_serializing_if = "String::is_empty"
    )]
    pub notes: String,
}

impl DayEntry {
    pub fn is_empty(&self) -> bool {
        self.entry.is_none() && self.exit.is_none() && self.worked.is_none() && self.notes.is_empty()
    }

    /// Recompute `worked` when both times are present. With only one time
    /// set the previous value is left in place, so clearing a field never
    /// erases the last computed hours.
    pub fn recompute_worked(&mut self) {
        if let (Some(entry), Some(exit)) = (self.entry, self.exit) {
            self.worked = Some(worked_duration(entry, exit));
        }
    }
}
