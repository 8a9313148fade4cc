//! Time utilities: parsing HH:MM, worked-hours computation, formatting.

use crate::errors::{AppError, AppResult};
use chrono::{NaiveTime, Timelike};

pub fn parse_time(t: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(t, "%H:%M").ok()
}

pub fn format_time(t: NaiveTime) -> String {
    t.format("%H:%M").to_string()
}

fn minutes_from_midnight(t: NaiveTime) -> i64 {
    (t.hour() * 60 + t.minute()) as i64
}

/// Elapsed time between entry and exit, formatted "H:MM" (hours unpadded,
/// minutes zero-padded).
///
/// An exit numerically earlier than the entry is taken to mean the shift
/// crossed midnight, so 24h are added before subtracting. Shifts longer than
/// 24 hours are not representable.
pub fn worked_duration(entry: NaiveTime, exit: NaiveTime) -> String {
    let entry_min = minutes_from_midnight(entry);
    let mut exit_min = minutes_from_midnight(exit);

    if exit_min < entry_min {
        exit_min += 24 * 60;
    }

    let total = exit_min - entry_min;
    format!("{}:{:02}", total / 60, total % 60)
}

pub fn parse_optional_time(input: Option<&String>) -> AppResult<Option<NaiveTime>> {
    if let Some(s) = input {
        let t = parse_time(s).ok_or_else(|| AppError::InvalidTime(s.to_string()))?;
        Ok(Some(t))
    } else {
        Ok(None)
    }
}

/// Serde adapter for optional "HH:MM" fields.
///
/// Legacy data files store times as raw form input values, so an empty
/// string must round-trip to `None` on load.
pub mod hhmm_opt {
    use chrono::NaiveTime;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(t: &Option<NaiveTime>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match t {
            Some(t) => serializer.serialize_str(&super::format_time(*t)),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<NaiveTime>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw: Option<String> = Option::deserialize(deserializer)?;
        match raw.as_deref() {
            None | Some("") => Ok(None),
            Some(s) => super::parse_time(s)
                .map(Some)
                .ok_or_else(|| serde::de::Error::custom(format!("invalid time '{s}'"))),
        }
    }
}
