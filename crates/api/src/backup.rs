// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Backup and restore of the whole aggregate.

use time::Date;
use tracing::{info, warn};
use tutor_billing::{Command, IdGenerator, State, TransitionResult};
use tutor_billing_persistence::{KeyValueStore, PersistenceError, export_backup, parse_backup};

use crate::error::ApiError;
use crate::request_response::ApiResult;
use crate::store::BillingStore;

/// Renders the aggregate as a pretty-printed JSON backup document.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn create_backup(state: &State) -> Result<String, ApiError> {
    Ok(export_backup(state)?)
}

/// The suggested file name for a backup taken on `date`.
#[must_use]
pub fn backup_file_name(date: Date) -> String {
    format!("tutor_backup_{date}.json")
}

/// Replaces the whole aggregate with the contents of a backup document.
///
/// Top-level keys missing from the document take their default values.
///
/// # Errors
///
/// Returns `ApiError::InvalidBackup` if the document cannot be read, in which
/// case the current aggregate is unchanged. Returns a persistence error if
/// the restored aggregate cannot be written.
pub fn restore_backup<S: KeyValueStore, G: IdGenerator>(
    store: &mut BillingStore<S, G>,
    document: &str,
) -> Result<ApiResult<()>, ApiError> {
    let restored: State = parse_backup(document).map_err(|e| {
        warn!(error = %e, "Rejected backup document");
        match e {
            PersistenceError::InvalidBackup(message) => ApiError::InvalidBackup { message },
            other => ApiError::Persistence(other),
        }
    })?;

    let result: TransitionResult = store.dispatch(Command::ReplaceState {
        state: Box::new(restored),
    })?;
    info!(counts = %result.event.after, "Restored backup");

    Ok(ApiResult {
        response: (),
        event: result.event,
    })
}
