//! Key-value storage contract and SQLite-backed implementation.
//!
//! # Responsibility
//! - Define the store-adapter seam repositories persist through.
//! - Own connection bootstrap and schema migration for the SQLite backend.
//!
//! # Invariants
//! - Each logical collection lives under one stable, versioned key.
//! - Migration version is tracked via `PRAGMA user_version`.
//! - Missing keys read back as `None`; repositories turn that into empty
//!   collections, never errors.

use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod migrations;
mod sqlite;

pub use sqlite::SqliteStore;

pub type StoreResult<T> = Result<T, StoreError>;

/// Storage-layer error for bootstrap and read/write operations.
#[derive(Debug)]
pub enum StoreError {
    Sqlite(rusqlite::Error),
    UnsupportedSchemaVersion {
        db_version: u32,
        latest_supported: u32,
    },
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Sqlite(err) => write!(f, "{err}"),
            Self::UnsupportedSchemaVersion {
                db_version,
                latest_supported,
            } => write!(
                f,
                "store schema version {db_version} is newer than supported {latest_supported}"
            ),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Sqlite(err) => Some(err),
            Self::UnsupportedSchemaVersion { .. } => None,
        }
    }
}

impl From<rusqlite::Error> for StoreError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Sqlite(value)
    }
}

/// Durable scoped read/write of named collection payloads.
///
/// The contract is intentionally whole-value: repositories read and write a
/// collection's full serialized form under one key, there is no partial API.
pub trait KeyValueStore {
    /// Returns the payload stored under `key`, or `None` when absent.
    fn get(&self, key: &str) -> StoreResult<Option<String>>;
    /// Stores `value` under `key`, replacing any previous payload.
    fn put(&self, key: &str, value: &str) -> StoreResult<()>;
    /// Removes `key`; succeeds whether or not the key existed.
    fn remove(&self, key: &str) -> StoreResult<()>;
}
