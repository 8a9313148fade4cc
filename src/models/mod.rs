pub mod day_entry;
pub mod index_entry;
pub mod schedule;

pub use day_entry::DayEntry;
pub use index_entry::IndexEntry;
pub use schedule::ScheduleRecord;

/// Serde helpers for fields the legacy data files store as either JSON
/// numbers or raw input strings.
pub(crate) mod flex {
    use serde::{Deserialize, Deserializer};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum NumOrStr {
        Num(i64),
        Str(String),
    }

    fn as_i64<E: serde::de::Error>(v: NumOrStr) -> Result<i64, E> {
        match v {
            NumOrStr::Num(n) => Ok(n),
            NumOrStr::Str(s) => s
                .trim()
                .parse::<i64>()
                .map_err(|_| E::custom(format!("invalid number '{s}'"))),
        }
    }

    pub fn month<'de, D>(d: D) -> Result<u32, D::Error>
    where
        D: Deserializer<'de>,
    {
        let n = as_i64(NumOrStr::deserialize(d)?)?;
        u32::try_from(n).map_err(|_| serde::de::Error::custom(format!("invalid month {n}")))
    }

    pub fn year<'de, D>(d: D) -> Result<i32, D::Error>
    where
        D: Deserializer<'de>,
    {
        let n = as_i64(NumOrStr::deserialize(d)?)?;
        i32::try_from(n).map_err(|_| serde::de::Error::custom(format!("invalid year {n}")))
    }
}
