//! Habit domain model.
//!
//! # Invariants
//! - `id` is stable and never reused for another habit. Re-adding a habit
//!   with the same name yields a new identity with no completion history.
//! - Per-day completion is tracked outside the record, in the repository's
//!   date-keyed completion log; a habit has no completed flag of its own.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A recurring daily practice the user wants to keep up.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Habit {
    /// Stable opaque identifier; habit identity is by id, never by name.
    pub id: Uuid,
    /// Display name, already trimmed by the repository.
    pub name: String,
    /// Creation time in Unix epoch milliseconds.
    pub created_at: i64,
}

impl Habit {
    /// Creates a habit with a fresh id and the current timestamp.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            created_at: Utc::now().timestamp_millis(),
        }
    }
}
