//! Folder store records

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A JSON document kept in a named folder
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredFile {
    pub data: serde_json::Value,
    pub created_at: DateTime<Utc>,
    /// Byte length of the compact JSON serialisation of `data`
    pub size: usize,
}

impl StoredFile {
    pub fn new(data: serde_json::Value, created_at: DateTime<Utc>) -> Self {
        let size = data.to_string().len();
        Self { data, created_at, size }
    }
}
