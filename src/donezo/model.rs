use crate::error::{DonezoError, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A single to-do item. IDs are positive, unique within one store, and
/// immutable after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: u64,
    pub title: String,
    pub completed: bool,
}

impl Task {
    pub fn new(id: u64, title: String) -> Self {
        Self {
            id,
            title,
            completed: false,
        }
    }

    /// Strict decode of a single stored record. A missing or mistyped field
    /// is a malformed record, not a default.
    pub fn from_record(record: Value) -> Result<Self> {
        serde_json::from_value(record).map_err(DonezoError::MalformedRecord)
    }
}

/// Completion counts derived from the current collection.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Stats {
    pub total: usize,
    pub completed: usize,
    pub pending: usize,
    /// Percentage in `[0, 100]`; `0.0` for an empty collection.
    pub completion_rate: f64,
}
