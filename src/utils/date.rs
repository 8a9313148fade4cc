use chrono::{Datelike, NaiveDate};

/// Weekday names, Sunday-first, as used in the table view and reports.
const DAY_NAMES: [&str; 7] = [
    "Domingo",
    "Lunes",
    "Martes",
    "Miércoles",
    "Jueves",
    "Viernes",
    "Sábado",
];

/// Month names, 1-based.
const MONTH_NAMES: [&str; 12] = [
    "Enero",
    "Febrero",
    "Marzo",
    "Abril",
    "Mayo",
    "Junio",
    "Julio",
    "Agosto",
    "Septiembre",
    "Octubre",
    "Noviembre",
    "Diciembre",
];

/// Parse a "YYYY-MM" period into (year, month).
pub fn parse_year_month(p: &str) -> Option<(i32, u32)> {
    let d = NaiveDate::parse_from_str(&(p.to_string() + "-01"), "%Y-%m-%d").ok()?;
    Some((d.year(), d.month()))
}

pub fn all_days_of_month(year: i32, month: u32) -> Vec<NaiveDate> {
    let mut out = Vec::new();

    let Some(mut d) = NaiveDate::from_ymd_opt(year, month, 1) else {
        return out;
    };

    while d.month() == month {
        out.push(d);
        d = match d.succ_opt() {
            Some(next) => next,
            None => break,
        };
    }

    out
}

/// Number of days in a month, honoring leap years. None for an invalid
/// month/year combination.
pub fn days_in_month(year: i32, month: u32) -> Option<u32> {
    let days = all_days_of_month(year, month).len() as u32;
    if days == 0 { None } else { Some(days) }
}

pub fn weekday_name(d: NaiveDate) -> &'static str {
    DAY_NAMES[d.weekday().num_days_from_sunday() as usize]
}

pub fn month_name(month: u32) -> &'static str {
    MONTH_NAMES
        .get(month.wrapping_sub(1) as usize)
        .copied()
        .unwrap_or("")
}
