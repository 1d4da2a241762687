// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use diesel::prelude::*;
use diesel::upsert::excluded;
use std::path::Path;
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::{debug, info};

use crate::connection::{JournalMode, open_ledger_database};
use crate::data_models::NewKvEntry;
use crate::diesel_schema::kv_entries;
use crate::error::PersistenceError;

/// Atomic counter for generating unique in-memory database names.
///
/// Each call to `SqliteStore::new_in_memory()` receives a unique sequential
/// ID, so concurrently running tests never share a database.
static DB_COUNTER: AtomicU64 = AtomicU64::new(0);

/// A synchronous blob store addressed by string keys.
///
/// Values are opaque to the store. Both operations complete before they
/// return.
pub trait KeyValueStore {
    /// Reads the value stored under `key`, or `None` when the key is absent.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing store cannot be read.
    fn get(&mut self, key: &str) -> Result<Option<Vec<u8>>, PersistenceError>;

    /// Stores `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing store cannot be written.
    fn set(&mut self, key: &str, value: &[u8]) -> Result<(), PersistenceError>;
}

/// A `KeyValueStore` backed by a single `SQLite` table.
pub struct SqliteStore {
    conn: SqliteConnection,
}

impl SqliteStore {
    /// Creates a store over a fresh in-memory `SQLite` database.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be initialized.
    pub fn new_in_memory() -> Result<Self, PersistenceError> {
        let db_id: u64 = DB_COUNTER.fetch_add(1, Ordering::SeqCst);
        let shared_memory_url: String = format!("file:memdb_kv_{db_id}?mode=memory&cache=shared");

        let conn: SqliteConnection =
            open_ledger_database(&shared_memory_url, JournalMode::Default)?;

        Ok(Self { conn })
    }

    /// Creates a store over a file-based `SQLite` database, creating the file
    /// if needed.
    ///
    /// # Arguments
    ///
    /// * `path` - The path to the `SQLite` database file
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened or initialized.
    pub fn new_with_file<P: AsRef<Path>>(path: P) -> Result<Self, PersistenceError> {
        let path_str: &str = path.as_ref().to_str().ok_or_else(|| {
            PersistenceError::InitializationError("Invalid database path".to_string())
        })?;

        let conn: SqliteConnection = open_ledger_database(path_str, JournalMode::WriteAhead)?;
        info!(path = path_str, "Opened ledger file");

        Ok(Self { conn })
    }
}

impl KeyValueStore for SqliteStore {
    fn get(&mut self, key: &str) -> Result<Option<Vec<u8>>, PersistenceError> {
        let value: Option<Vec<u8>> = kv_entries::table
            .filter(kv_entries::entry_key.eq(key))
            .select(kv_entries::entry_value)
            .first::<Vec<u8>>(&mut self.conn)
            .optional()?;

        debug!(key, found = value.is_some(), "Read entry");
        Ok(value)
    }

    fn set(&mut self, key: &str, value: &[u8]) -> Result<(), PersistenceError> {
        let entry: NewKvEntry<'_> = NewKvEntry {
            entry_key: key,
            entry_value: value,
        };

        diesel::insert_into(kv_entries::table)
            .values(&entry)
            .on_conflict(kv_entries::entry_key)
            .do_update()
            .set(kv_entries::entry_value.eq(excluded(kv_entries::entry_value)))
            .execute(&mut self.conn)?;

        debug!(key, bytes = value.len(), "Wrote entry");
        Ok(())
    }
}
