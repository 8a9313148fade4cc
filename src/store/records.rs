//! Schedule persistence: full-record snapshots plus a hand-maintained index
//! of everything ever saved.
//!
//! Each record lives under its own storage key; the index lives in full
//! under the fixed `saved_schedules` key. A save is two independent puts
//! (record first, then index) with no transaction across them. With a single
//! writer that cannot race, and keeping the two writes separate preserves the
//! on-disk contract of the legacy data files.

use crate::errors::{AppError, AppResult};
use crate::models::{IndexEntry, ScheduleRecord};
use crate::store::kv::KvStore;
use chrono::{DateTime, Utc};
use regex::Regex;
use std::sync::LazyLock;

/// Fixed key holding the serialized index list.
pub const INDEX_KEY: &str = "saved_schedules";

static WHITESPACE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").expect("valid regex"));

/// Deterministic storage key for one worker/month/year.
///
/// Whitespace runs in the name collapse to underscores; the month is not
/// zero-padded. Both quirks are load-bearing: keys must match those written
/// by the web version.
pub fn storage_key(worker_name: &str, year: i32, month: u32) -> String {
    let slug = WHITESPACE.replace_all(worker_name, "_");
    format!("horario_{slug}_{year}_{month}")
}

/// Persist the record and refresh its index entry, stamped with the current
/// time. Returns the storage key.
pub fn save(store: &KvStore, record: &ScheduleRecord) -> AppResult<String> {
    save_at(store, record, Utc::now())
}

/// Same as [`save`] but with an explicit timestamp. Exposed so tests can
/// control most-recent ordering.
pub fn save_at(
    store: &KvStore,
    record: &ScheduleRecord,
    saved_at: DateTime<Utc>,
) -> AppResult<String> {
    if record.worker_name.trim().is_empty() {
        return Err(AppError::Validation("worker name is required".into()));
    }
    if !(1..=12).contains(&record.month) {
        return Err(AppError::Validation(format!(
            "month must be between 1 and 12, got {}",
            record.month
        )));
    }

    let key = record.storage_key();
    let payload = serde_json::to_string(record).map_err(AppError::Deserialization)?;
    store.put(&key, &payload)?;

    // Read-modify-write of the full index; replaces the entry for this key
    // or appends a new one. Re-saving the same worker/month/year overwrites.
    let mut index = load_index(store)?;
    let entry = IndexEntry {
        key: key.clone(),
        worker_name: record.worker_name.clone(),
        month: record.month,
        year: record.year,
        saved_at,
    };

    if let Some(existing) = index.iter_mut().find(|e| e.key == key) {
        *existing = entry;
    } else {
        index.push(entry);
    }

    let index_payload = serde_json::to_string(&index).map_err(AppError::Deserialization)?;
    store.put(INDEX_KEY, &index_payload)?;

    Ok(key)
}

/// Load the record stored under `key`.
pub fn load(store: &KvStore, key: &str) -> AppResult<ScheduleRecord> {
    let payload = store
        .get(key)?
        .ok_or_else(|| AppError::NotFound(key.to_string()))?;

    serde_json::from_str(&payload).map_err(AppError::Deserialization)
}

/// Load the full saved-schedule index; an absent index means nothing was
/// ever saved.
pub fn load_index(store: &KvStore) -> AppResult<Vec<IndexEntry>> {
    match store.get(INDEX_KEY)? {
        None => Ok(Vec::new()),
        Some(payload) => serde_json::from_str(&payload).map_err(AppError::Deserialization),
    }
}

/// Load the record saved last, if any.
///
/// Ties on `saved_at` keep the first entry in index order. An index entry
/// whose record went missing is treated as "nothing to load" rather than an
/// error; the index simply points at nothing.
pub fn load_most_recent(store: &KvStore) -> AppResult<Option<ScheduleRecord>> {
    let index = load_index(store)?;

    let mut latest: Option<&IndexEntry> = None;
    for entry in &index {
        // Strictly-greater keeps the earliest index entry on a timestamp tie.
        if latest.is_none_or(|cur| entry.saved_at > cur.saved_at) {
            latest = Some(entry);
        }
    }

    let Some(latest) = latest else {
        return Ok(None);
    };

    match load(store, &latest.key) {
        Ok(record) => Ok(Some(record)),
        Err(AppError::NotFound(_)) => Ok(None),
        Err(e) => Err(e),
    }
}

/// Load the record for this worker/month/year, or start a fresh one.
pub fn load_or_new(
    store: &KvStore,
    worker_name: &str,
    month: u32,
    year: i32,
) -> AppResult<ScheduleRecord> {
    match load(store, &storage_key(worker_name, year, month)) {
        Ok(record) => Ok(record),
        Err(AppError::NotFound(_)) => Ok(ScheduleRecord::new(worker_name, month, year)),
        Err(e) => Err(e),
    }
}
