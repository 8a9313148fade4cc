//! Month view construction: one row per calendar day, merged with whatever
//! the record already holds for that date.

use crate::models::{DayEntry, ScheduleRecord};
use crate::utils::date::{all_days_of_month, weekday_name};
use chrono::{Datelike, NaiveDate};

#[derive(Debug, Clone, PartialEq)]
pub struct DayRow {
    pub weekday: &'static str,
    pub day: u32,
    pub date: NaiveDate,
    pub entry: DayEntry,
}

/// Build the ordered month view for `month`/`year`.
///
/// An invalid month or year yields no rows at all rather than a guessed
/// calendar. Record entries outside the selected month are ignored.
pub fn build_month_view(month: u32, year: i32, record: &ScheduleRecord) -> Vec<DayRow> {
    all_days_of_month(year, month)
        .into_iter()
        .map(|date| DayRow {
            weekday: weekday_name(date),
            day: date.day(),
            date,
            entry: record.days.get(&date).cloned().unwrap_or_default(),
        })
        .collect()
}
