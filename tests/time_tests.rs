use chrono::NaiveTime;
use horario::utils::time::{parse_time, worked_duration};

fn t(s: &str) -> NaiveTime {
    parse_time(s).expect("valid test time")
}

#[test]
fn test_regular_shift() {
    assert_eq!(worked_duration(t("09:00"), t("17:30")), "8:30");
}

#[test]
fn test_minutes_zero_padded() {
    assert_eq!(worked_duration(t("09:05"), t("09:10")), "0:05");
}

#[test]
fn test_zero_duration() {
    assert_eq!(worked_duration(t("09:00"), t("09:00")), "0:00");
}

#[test]
fn test_overnight_rollover() {
    assert_eq!(worked_duration(t("22:00"), t("06:00")), "8:00");
}

#[test]
fn test_one_minute_over_midnight() {
    assert_eq!(worked_duration(t("23:59"), t("00:00")), "0:01");
}

#[test]
fn test_longest_representable_shift() {
    assert_eq!(worked_duration(t("00:00"), t("23:59")), "23:59");
}

#[test]
fn test_parse_time_rejects_garbage() {
    assert!(parse_time("25:00").is_none());
    assert!(parse_time("nine").is_none());
    assert!(parse_time("").is_none());
}
