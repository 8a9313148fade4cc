//! In-memory schedule mutation.

use crate::models::ScheduleRecord;
use chrono::{NaiveDate, NaiveTime};

/// A single editable field of a day entry, carrying its new value.
#[derive(Debug, Clone, PartialEq)]
pub enum DayField {
    Entry(Option<NaiveTime>),
    Exit(Option<NaiveTime>),
    Notes(String),
}

/// Apply one field change to the record, creating the day entry on first
/// touch.
///
/// Worked hours are recomputed only when a time field changed and both times
/// are present afterwards. Clearing one time leaves the previous worked value
/// in place; ordering beyond the midnight-rollover rule is not validated.
pub fn set_day_field(record: &mut ScheduleRecord, date: NaiveDate, field: DayField) {
    let day = record.days.entry(date).or_default();
    let time_changed = !matches!(field, DayField::Notes(_));

    match field {
        DayField::Entry(t) => day.entry = t,
        DayField::Exit(t) => day.exit = t,
        DayField::Notes(s) => day.notes = s,
    }

    if time_changed {
        day.recompute_worked();
    }
}
