// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The state store: the only owner of the live aggregate.

use tracing::{debug, error, info};
use tutor_billing::{Command, IdGenerator, State, TransitionResult, UuidGenerator, apply};
use tutor_billing_persistence::{KeyValueStore, load_state, save_state};

use crate::error::{ApiError, translate_core_error};

/// Holds the current aggregate and mirrors every transition into a
/// key-value store.
///
/// Each `dispatch` runs to completion before the next one can start, since
/// it takes `&mut self`.
pub struct BillingStore<S, G = UuidGenerator> {
    store: S,
    state: State,
    ids: G,
}

impl<S: KeyValueStore> BillingStore<S, UuidGenerator> {
    /// Opens a store, loading the persisted aggregate and generating UUIDs
    /// for new entities.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing store cannot be read.
    pub fn open(store: S) -> Result<Self, ApiError> {
        Self::open_with_ids(store, UuidGenerator)
    }
}

impl<S: KeyValueStore, G: IdGenerator> BillingStore<S, G> {
    /// Opens a store with a specific identifier source.
    ///
    /// An empty or unreadable store starts from the default aggregate.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing store cannot be read.
    pub fn open_with_ids(mut store: S, ids: G) -> Result<Self, ApiError> {
        let state: State = load_state(&mut store)?;
        Ok(Self { store, state, ids })
    }

    /// Returns the current aggregate.
    #[must_use]
    pub const fn state(&self) -> &State {
        &self.state
    }

    /// Applies a command, commits the new aggregate, and persists it.
    ///
    /// A rejected command changes nothing. If the write fails after the
    /// command succeeded, the new aggregate stays committed in memory and the
    /// write error is returned.
    ///
    /// # Errors
    ///
    /// Returns an error if the command is rejected or the write fails.
    pub fn dispatch(&mut self, command: Command) -> Result<TransitionResult, ApiError> {
        let result: TransitionResult =
            apply(&self.state, command, &mut self.ids).map_err(translate_core_error)?;
        debug!(event = %result.event, "Applied transition");

        self.state = result.new_state.clone();

        if let Err(e) = save_state(&mut self.store, &self.state) {
            error!(
                action = %result.event.action.name,
                error = %e,
                "Failed to persist aggregate"
            );
            return Err(e.into());
        }

        info!(
            action = %result.event.action.name,
            counts = %result.event.after,
            "Transition persisted"
        );
        Ok(result)
    }

    /// Returns the backing store, consuming this handle.
    pub fn into_inner(self) -> S {
        self.store
    }
}
