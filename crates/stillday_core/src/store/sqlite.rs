//! SQLite-backed key-value store.
//!
//! # Responsibility
//! - Open file or in-memory SQLite databases for collection storage.
//! - Configure connection pragmas and apply migrations before first use.
//!
//! # Invariants
//! - Returned stores have migrations fully applied.
//! - `put` replaces the whole payload for a key; there are no partial writes.

use super::migrations::apply_migrations;
use super::{KeyValueStore, StoreResult};
use log::{error, info};
use rusqlite::{params, Connection, OptionalExtension};
use std::path::Path;
use std::time::{Duration, Instant};

/// Key-value store persisted in a single SQLite table.
pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    /// Opens a database file and applies all pending migrations.
    ///
    /// # Side effects
    /// - Emits `store_open` logging events with duration and status.
    pub fn open(path: impl AsRef<Path>) -> StoreResult<Self> {
        Self::open_with(|| Connection::open(path), "file")
    }

    /// Opens an in-memory database, mainly for tests and previews.
    pub fn open_in_memory() -> StoreResult<Self> {
        Self::open_with(Connection::open_in_memory, "memory")
    }

    fn open_with(
        open: impl FnOnce() -> rusqlite::Result<Connection>,
        mode: &str,
    ) -> StoreResult<Self> {
        let started_at = Instant::now();
        info!("event=store_open module=store status=start mode={mode}");

        let result = open().map_err(Into::into).and_then(|mut conn| {
            bootstrap_connection(&mut conn)?;
            Ok(Self { conn })
        });

        match &result {
            Ok(_) => info!(
                "event=store_open module=store status=ok mode={mode} duration_ms={}",
                started_at.elapsed().as_millis()
            ),
            Err(err) => error!(
                "event=store_open module=store status=error mode={mode} duration_ms={} error={err}",
                started_at.elapsed().as_millis()
            ),
        }

        result
    }
}

impl KeyValueStore for SqliteStore {
    fn get(&self, key: &str) -> StoreResult<Option<String>> {
        let value = self
            .conn
            .query_row(
                "SELECT value FROM kv_collections WHERE key = ?1;",
                [key],
                |row| row.get(0),
            )
            .optional()?;
        Ok(value)
    }

    fn put(&self, key: &str, value: &str) -> StoreResult<()> {
        self.conn.execute(
            "INSERT INTO kv_collections (key, value, updated_at)
             VALUES (?1, ?2, (strftime('%s', 'now') * 1000))
             ON CONFLICT(key) DO UPDATE SET
                value = excluded.value,
                updated_at = excluded.updated_at;",
            params![key, value],
        )?;
        Ok(())
    }

    fn remove(&self, key: &str) -> StoreResult<()> {
        self.conn
            .execute("DELETE FROM kv_collections WHERE key = ?1;", [key])?;
        Ok(())
    }
}

fn bootstrap_connection(conn: &mut Connection) -> StoreResult<()> {
    conn.execute_batch("PRAGMA foreign_keys = ON;")?;
    conn.busy_timeout(Duration::from_secs(5))?;
    apply_migrations(conn)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::SqliteStore;
    use crate::store::KeyValueStore;

    #[test]
    fn missing_key_reads_back_as_none() {
        let store = SqliteStore::open_in_memory().unwrap();
        assert_eq!(store.get("nothing.v1").unwrap(), None);
    }

    #[test]
    fn put_replaces_previous_payload() {
        let store = SqliteStore::open_in_memory().unwrap();
        store.put("sample.v1", "[1]").unwrap();
        store.put("sample.v1", "[1,2]").unwrap();
        assert_eq!(store.get("sample.v1").unwrap().as_deref(), Some("[1,2]"));
    }

    #[test]
    fn remove_is_idempotent() {
        let store = SqliteStore::open_in_memory().unwrap();
        store.put("sample.v1", "[]").unwrap();
        store.remove("sample.v1").unwrap();
        store.remove("sample.v1").unwrap();
        assert_eq!(store.get("sample.v1").unwrap(), None);
    }
}
