use super::flex;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Catalog entry for one persisted schedule, denormalized so the saved list
/// can be shown without loading every record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndexEntry {
    pub key: String,

    #[serde(rename = "workerName")]
    pub worker_name: String,

    #[serde(deserialize_with = "flex::month")]
    pub month: u32,

    #[serde(deserialize_with = "flex::year")]
    pub year: i32,

    #[serde(rename = "savedDate")]
    pub saved_at: DateTime<Utc>,
}
