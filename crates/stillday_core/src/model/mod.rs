//! Domain records persisted by the wellness companion.
//!
//! # Responsibility
//! - Define the canonical serde shapes for habits, goals, ratings, day notes
//!   and calendar intentions.
//!
//! # Invariants
//! - Every entity is identified by an opaque UUID assigned once at creation.
//! - Calendar dates are `NaiveDate` values; their serde form is `YYYY-MM-DD`.
//! - Name/text length caps are a presentation concern and are not enforced
//!   here; repositories only enforce the trimmed-non-empty rule.

pub mod goal;
pub mod habit;
pub mod intention;
pub mod note;
