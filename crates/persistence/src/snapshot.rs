// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! JSON encoding of the billing aggregate.
//!
//! The persisted snapshot and the backup document share one format: the
//! aggregate serialized with camelCase keys. Missing top-level keys read as
//! their defaults, so an older or partial document merges over the default
//! aggregate.

use tracing::{info, warn};
use tutor_billing::State;

use crate::error::PersistenceError;
use crate::store::KeyValueStore;

/// The key the aggregate is stored under.
pub const STATE_KEY: &str = "tutor_billing_db";

/// Serializes the aggregate for storage.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn encode_state(state: &State) -> Result<Vec<u8>, PersistenceError> {
    Ok(serde_json::to_vec(state)?)
}

/// Deserializes a stored aggregate.
///
/// # Errors
///
/// Returns an error if the bytes are not a valid aggregate document.
pub fn decode_state(bytes: &[u8]) -> Result<State, PersistenceError> {
    Ok(serde_json::from_slice(bytes)?)
}

/// Loads the aggregate from the store.
///
/// An absent key yields the default aggregate. So does a stored value that
/// cannot be decoded; that case is logged and otherwise ignored.
///
/// # Errors
///
/// Returns an error only if the store itself cannot be read.
pub fn load_state<S: KeyValueStore>(store: &mut S) -> Result<State, PersistenceError> {
    let Some(bytes) = store.get(STATE_KEY)? else {
        info!("No stored aggregate found, starting from defaults");
        return Ok(State::default());
    };

    match decode_state(&bytes) {
        Ok(state) => {
            info!(
                sessions = state.sessions.len(),
                rate_rules = state.rate_rules.len(),
                "Loaded stored aggregate"
            );
            Ok(state)
        }
        Err(e) => {
            warn!(error = %e, "Stored aggregate is unreadable, starting from defaults");
            Ok(State::default())
        }
    }
}

/// Writes the aggregate to the store, replacing the previous snapshot.
///
/// # Errors
///
/// Returns an error if serialization or the store write fails.
pub fn save_state<S: KeyValueStore>(store: &mut S, state: &State) -> Result<(), PersistenceError> {
    let bytes: Vec<u8> = encode_state(state)?;
    store.set(STATE_KEY, &bytes)
}

/// Renders the aggregate as a pretty-printed backup document.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn export_backup(state: &State) -> Result<String, PersistenceError> {
    Ok(serde_json::to_string_pretty(state)?)
}

/// Reads a backup document.
///
/// Missing top-level keys take their default values.
///
/// # Errors
///
/// Returns `PersistenceError::InvalidBackup` if the document is not JSON or
/// does not describe an aggregate.
pub fn parse_backup(document: &str) -> Result<State, PersistenceError> {
    serde_json::from_str(document).map_err(|e| PersistenceError::InvalidBackup(e.to_string()))
}
