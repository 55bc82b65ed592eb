//! Day-note domain model.
//!
//! # Invariants
//! - At most one note exists per calendar day.
//! - Blank text never persists; the repository deletes the entry instead of
//!   storing an empty record.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Free-text journal entry attached to one calendar day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayNote {
    /// Calendar day this note belongs to.
    pub date: NaiveDate,
    /// Stored note body; never blank while persisted.
    pub note: String,
}
