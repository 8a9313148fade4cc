use super::DayEntry;
use super::flex;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One worker's one-month timesheet.
///
/// `days` is keyed by calendar date; a BTreeMap keeps the keys in
/// "YYYY-MM-DD" order, which is also chronological order, so reports and
/// table views never need to re-sort. Keys from a different month/year may
/// survive in a loaded record; the month view only ever merges the keys that
/// fall inside the selected month.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleRecord {
    #[serde(rename = "workerName")]
    pub worker_name: String,

    /// 1-12. Older data files store this as a string.
    #[serde(deserialize_with = "flex::month")]
    pub month: u32,

    #[serde(deserialize_with = "flex::year")]
    pub year: i32,

    #[serde(rename = "scheduleData", default)]
    pub days: BTreeMap<NaiveDate, DayEntry>,

    /// Opaque signature payload (data URL), empty when unsigned.
    #[serde(default)]
    pub signature: String,
}

impl ScheduleRecord {
    pub fn new(worker_name: &str, month: u32, year: i32) -> Self {
        Self {
            worker_name: worker_name.to_string(),
            month,
            year,
            days: BTreeMap::new(),
            signature: String::new(),
        }
    }

    /// Number of days that actually carry data.
    pub fn touched_days(&self) -> usize {
        self.days.values().filter(|d| !d.is_empty()).count()
    }

    pub fn storage_key(&self) -> String {
        crate::store::records::storage_key(&self.worker_name, self.year, self.month)
    }
}
