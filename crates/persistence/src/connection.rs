// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Opening the ledger database.
//!
//! Every connection is migrated before it is handed out, so a fresh file and
//! an in-memory database both start with the `kv_entries` table present.

use diesel::{Connection, RunQueryDsl, SqliteConnection};
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};
use tracing::{debug, info};

use crate::error::PersistenceError;

const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

/// How a database should be opened.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JournalMode {
    /// Keep `SQLite`'s default rollback journal. Used for memory databases.
    Default,
    /// Switch a file database to write-ahead logging.
    WriteAhead,
}

fn pragma(conn: &mut SqliteConnection, statement: &str) -> Result<(), PersistenceError> {
    // Diesel has no PRAGMA DSL.
    diesel::sql_query(statement)
        .execute(conn)
        .map_err(|e| PersistenceError::QueryFailed(format!("{statement}: {e}")))?;
    Ok(())
}

/// Connects to `database_url`, applies the journal mode and brings the
/// schema up to date.
///
/// # Arguments
///
/// * `database_url` - A file path or a shared-cache memory URI
/// * `journal` - The journal mode to apply before migrating
///
/// # Errors
///
/// Returns an error if the connection, a PRAGMA, or a migration fails.
pub fn open_ledger_database(
    database_url: &str,
    journal: JournalMode,
) -> Result<SqliteConnection, PersistenceError> {
    let mut conn: SqliteConnection = SqliteConnection::establish(database_url)?;

    if journal == JournalMode::WriteAhead {
        pragma(&mut conn, "PRAGMA journal_mode = WAL")?;
    }

    let applied: usize = conn
        .run_pending_migrations(MIGRATIONS)
        .map_err(|e| PersistenceError::MigrationFailed(e.to_string()))?
        .len();
    if applied > 0 {
        info!(database_url, applied, "Applied ledger migrations");
    } else {
        debug!(database_url, "Ledger schema up to date");
    }

    Ok(conn)
}
