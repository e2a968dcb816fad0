//! Homework domain types

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value as JsonValue};

/// A single homework submission as reported by the review API
///
/// `status` is kept as the raw wire code: an unknown code is only an error
/// once the record is formatted. Fields other than the name and status are
/// preserved in `extra`, so equality covers the whole record as received.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HomeworkRecord {
    pub homework_name: String,
    pub status: String,
    #[serde(flatten)]
    pub extra: Map<String, JsonValue>,
}

impl HomeworkRecord {
    /// Creates a record with no extra fields
    pub fn new(homework_name: impl Into<String>, status: impl Into<String>) -> Self {
        Self {
            homework_name: homework_name.into(),
            status: status.into(),
            extra: Map::new(),
        }
    }
}
