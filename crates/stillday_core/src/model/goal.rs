//! Goal and daily-rating domain models.
//!
//! # Invariants
//! - A `Goal` is an ongoing objective rated day by day, not a per-date
//!   intention (see `model::intention` for those).
//! - `Rating` values are always within 1..=5; out-of-range persisted data
//!   fails deserialization instead of leaking into computations.
//! - At most one `DayRating` exists per `(goal_id, date)` pair; the goal
//!   repository enforces this with upsert-or-delete semantics.

use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// An ongoing objective the user rates daily.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Goal {
    /// Stable opaque identifier.
    pub id: Uuid,
    /// Display name, already trimmed by the repository.
    pub name: String,
    /// Creation time in Unix epoch milliseconds.
    pub created_at: i64,
}

impl Goal {
    /// Creates a goal with a fresh id and the current timestamp.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            created_at: Utc::now().timestamp_millis(),
        }
    }
}

/// Error for rating values outside the 1..=5 scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RatingOutOfRange(pub u8);

impl Display for RatingOutOfRange {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "rating {} is outside the supported range {}..={}",
            self.0,
            Rating::MIN,
            Rating::MAX
        )
    }
}

impl Error for RatingOutOfRange {}

/// A validated 1..=5 daily rating value.
///
/// Serde round-trips through the raw integer, so malformed stored values are
/// rejected at decode time and the containing collection falls back to empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Rating(u8);

impl Rating {
    /// Lowest accepted rating.
    pub const MIN: u8 = 1;
    /// Highest accepted rating.
    pub const MAX: u8 = 5;

    /// Validates and wraps a raw rating value.
    pub fn new(value: u8) -> Result<Self, RatingOutOfRange> {
        if (Self::MIN..=Self::MAX).contains(&value) {
            Ok(Self(value))
        } else {
            Err(RatingOutOfRange(value))
        }
    }

    /// Returns the raw 1..=5 value.
    pub fn get(self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for Rating {
    type Error = RatingOutOfRange;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Rating> for u8 {
    fn from(value: Rating) -> Self {
        value.0
    }
}

impl Display for Rating {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One goal's rating for one calendar day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayRating {
    /// The goal this rating belongs to.
    pub goal_id: Uuid,
    /// Calendar day the rating applies to.
    pub date: NaiveDate,
    /// The recorded 1..=5 value.
    pub rating: Rating,
}
