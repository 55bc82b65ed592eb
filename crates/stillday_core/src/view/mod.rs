//! Pure derived-view computations.
//!
//! # Responsibility
//! - Transform raw repository collections into display-ready aggregates.
//!
//! # Invariants
//! - Nothing here touches storage, the clock, or rendering; every function
//!   is a pure mapping from inputs to values.

pub mod calendar;
pub mod progress;
pub mod trend;
