//! Entity repositories over the key-value store.
//!
//! # Responsibility
//! - Define per-collection persistence APIs for habits, goals/ratings, day
//!   notes and calendar intentions.
//! - Own the load-modify-save cycle: every mutation rewrites the whole
//!   collection under its versioned key.
//!
//! # Invariants
//! - Reads never raise: missing, unreadable or malformed stored data
//!   degrades to an empty collection with a warning log.
//! - Mutations with blank required text are silent no-ops.
//! - "Today" is always an explicit parameter, never ambient state.

use crate::store::{KeyValueStore, StoreError};
use log::warn;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod goal_repo;
pub mod habit_repo;
pub mod intention_repo;
pub mod note_repo;

/// Versioned store key for the habit collection.
pub const HABITS_KEY: &str = "habits.v1";
/// Versioned store key for the date-keyed habit completion log.
pub const HABIT_COMPLETIONS_KEY: &str = "habit_completions.v1";
/// Versioned store key for the goal collection.
pub const GOALS_KEY: &str = "goals.v1";
/// Versioned store key for the day-rating collection.
pub const GOAL_RATINGS_KEY: &str = "goal_ratings.v1";
/// Versioned store key for the day-note collection.
pub const DAY_NOTES_KEY: &str = "day_notes.v1";
/// Versioned store key for the calendar-intention collection.
pub const INTENTIONS_KEY: &str = "intentions.v1";

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for persistence failures on the write path.
///
/// Read paths never surface errors; see the module invariants.
#[derive(Debug)]
pub enum RepoError {
    Store(StoreError),
    Encode(serde_json::Error),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Store(err) => write!(f, "{err}"),
            Self::Encode(err) => write!(f, "failed to encode collection: {err}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Store(err) => Some(err),
            Self::Encode(err) => Some(err),
        }
    }
}

impl From<StoreError> for RepoError {
    fn from(value: StoreError) -> Self {
        Self::Store(value)
    }
}

impl From<serde_json::Error> for RepoError {
    fn from(value: serde_json::Error) -> Self {
        Self::Encode(value)
    }
}

/// Reads a whole collection, degrading to its default on any failure.
pub(crate) fn load_collection<S, T>(store: &S, key: &str) -> T
where
    S: KeyValueStore,
    T: DeserializeOwned + Default,
{
    match store.get(key) {
        Ok(Some(payload)) => match serde_json::from_str(&payload) {
            Ok(collection) => collection,
            Err(err) => {
                warn!("event=collection_decode module=repo status=error key={key} error={err}");
                T::default()
            }
        },
        Ok(None) => T::default(),
        Err(err) => {
            warn!("event=collection_read module=repo status=error key={key} error={err}");
            T::default()
        }
    }
}

/// Serializes and writes a whole collection under its key.
pub(crate) fn save_collection<S, T>(store: &S, key: &str, collection: &T) -> RepoResult<()>
where
    S: KeyValueStore,
    T: Serialize,
{
    let payload = serde_json::to_string(collection)?;
    store.put(key, &payload)?;
    Ok(())
}
