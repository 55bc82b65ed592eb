//! Calendar-intention domain model.
//!
//! # Invariants
//! - An intention is scoped to exactly one calendar day; several may share
//!   the same day.
//! - Lifecycle is fully explicit: created by the user, toggled done/undone,
//!   removed by the user. Nothing cascades into intentions.

use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A per-date intention set from the calendar view.
///
/// Distinct from `model::goal::Goal`, which is an ongoing rated objective.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Intention {
    /// Stable opaque identifier.
    pub id: Uuid,
    /// Calendar day this intention is set for.
    pub date: NaiveDate,
    /// Display text, already trimmed by the repository.
    pub text: String,
    /// Whether the user marked the intention as done.
    pub done: bool,
    /// Creation time in Unix epoch milliseconds.
    pub created_at: i64,
}

impl Intention {
    /// Creates an intention for `date` with a fresh id, not yet done.
    pub fn new(date: NaiveDate, text: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            date,
            text: text.into(),
            done: false,
            created_at: Utc::now().timestamp_millis(),
        }
    }
}
