use chrono::NaiveDate;
use horario::core::schedule::{DayField, set_day_field};
use horario::models::ScheduleRecord;
use horario::utils::time::parse_time;

fn date(d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 3, d).unwrap()
}

#[test]
fn test_first_touch_creates_day_entry() {
    let mut record = ScheduleRecord::new("Ana", 3, 2025);
    assert!(record.days.is_empty());

    set_day_field(&mut record, date(5), DayField::Notes("llegó tarde".into()));

    assert_eq!(record.days.len(), 1);
    assert_eq!(record.days[&date(5)].notes, "llegó tarde");
}

#[test]
fn test_entry_alone_does_not_compute_worked() {
    let mut record = ScheduleRecord::new("Ana", 3, 2025);

    set_day_field(&mut record, date(5), DayField::Entry(parse_time("09:00")));

    assert!(record.days[&date(5)].worked.is_none());
}

#[test]
fn test_exit_completes_the_pair() {
    let mut record = ScheduleRecord::new("Ana", 3, 2025);

    set_day_field(&mut record, date(5), DayField::Entry(parse_time("09:00")));
    set_day_field(&mut record, date(5), DayField::Exit(parse_time("17:00")));

    assert_eq!(record.days[&date(5)].worked.as_deref(), Some("8:00"));
}

#[test]
fn test_notes_change_does_not_recompute() {
    let mut record = ScheduleRecord::new("Ana", 3, 2025);

    set_day_field(&mut record, date(5), DayField::Entry(parse_time("09:00")));
    set_day_field(&mut record, date(5), DayField::Exit(parse_time("17:00")));
    set_day_field(&mut record, date(5), DayField::Exit(None));
    set_day_field(&mut record, date(5), DayField::Notes("salida olvidada".into()));

    // clearing a time leaves the previous computed value in place
    assert_eq!(record.days[&date(5)].worked.as_deref(), Some("8:00"));
    assert!(record.days[&date(5)].exit.is_none());
}

#[test]
fn test_updating_a_time_recomputes() {
    let mut record = ScheduleRecord::new("Ana", 3, 2025);

    set_day_field(&mut record, date(5), DayField::Entry(parse_time("09:00")));
    set_day_field(&mut record, date(5), DayField::Exit(parse_time("17:00")));
    set_day_field(&mut record, date(5), DayField::Exit(parse_time("18:30")));

    assert_eq!(record.days[&date(5)].worked.as_deref(), Some("9:30"));
}

#[test]
fn test_touched_days_ignores_empty_entries() {
    let mut record = ScheduleRecord::new("Ana", 3, 2025);
    set_day_field(&mut record, date(5), DayField::Entry(parse_time("09:00")));
    set_day_field(&mut record, date(6), DayField::Notes(String::new()));

    assert_eq!(record.touched_days(), 1);
}
