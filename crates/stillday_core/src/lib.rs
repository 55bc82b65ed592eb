//! Core domain logic for stillday, a single-user wellness companion.
//! This crate is the single source of truth for habit, goal, rating,
//! note and intention invariants; presentation layers stay thin.

pub mod date;
pub mod logging;
pub mod model;
pub mod quotes;
pub mod repo;
pub mod store;
pub mod view;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::goal::{DayRating, Goal, Rating, RatingOutOfRange};
pub use model::habit::Habit;
pub use model::intention::Intention;
pub use model::note::DayNote;
pub use quotes::{quote_for_date, Quote};
pub use repo::goal_repo::{GoalRepository, RatingChange};
pub use repo::habit_repo::HabitRepository;
pub use repo::intention_repo::IntentionRepository;
pub use repo::note_repo::{NoteChange, NoteRepository};
pub use repo::{RepoError, RepoResult};
pub use store::{KeyValueStore, SqliteStore, StoreError, StoreResult};
pub use view::calendar::{month_grid, MonthGrid};
pub use view::trend::{trend_points, TrendPoint};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::{core_version, ping};

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
