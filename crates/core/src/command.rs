// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::state::State;
use time::Date;
use tutor_billing_domain::{CatalogKind, EntityId, RateQuery, RateScope, SessionStatus, Theme};

/// The editable fields of a session.
///
/// Rate and amount are not part of this set: they are always derived from
/// the rule table when a session is logged or revised.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionDetails {
    /// The calendar date of the session.
    pub date: Date,
    /// The center the session was taught at.
    pub center_id: EntityId,
    /// The subject taught.
    pub subject_id: EntityId,
    /// The grade standard taught.
    pub standard_id: EntityId,
    /// Length in hours.
    pub duration: f64,
    /// Lifecycle status.
    pub status: SessionStatus,
}

impl SessionDetails {
    /// Returns the pricing context of these details.
    #[must_use]
    pub const fn query(&self) -> RateQuery<'_> {
        RateQuery::new(&self.center_id, &self.subject_id, &self.standard_id)
    }
}

/// A command represents user intent as data only.
///
/// Commands are the only way to request state changes. The set is closed:
/// every command is handled by `apply`.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Replace the whole aggregate (restore from backup).
    ReplaceState {
        /// The aggregate to install.
        state: Box<State>,
    },
    /// Merge new values into the settings.
    UpdateSettings {
        /// New tutor name, if changing.
        tutor_name: Option<String>,
        /// New theme, if changing.
        theme: Option<Theme>,
    },
    /// Add an entry to a catalog.
    AddCatalogEntry {
        /// The catalog to add to.
        kind: CatalogKind,
        /// The entry name.
        name: String,
    },
    /// Remove an entry from a catalog. References to it are left in place.
    DeleteCatalogEntry {
        /// The catalog to remove from.
        kind: CatalogKind,
        /// The entry to remove.
        id: EntityId,
    },
    /// Add a rate rule, or overwrite the rate of the rule that already has
    /// this exact scope.
    AddRateRule {
        /// The rule scope.
        scope: RateScope,
        /// The hourly rate.
        rate_per_hour: f64,
    },
    /// Overwrite an existing rule. No scope collision check is made.
    UpdateRateRule {
        /// The rule to overwrite.
        id: EntityId,
        /// The new scope.
        scope: RateScope,
        /// The new hourly rate.
        rate_per_hour: f64,
    },
    /// Remove a rate rule.
    DeleteRateRule {
        /// The rule to remove.
        id: EntityId,
    },
    /// Log a new session, pricing it against the current rule table.
    LogSession {
        /// The session fields.
        details: SessionDetails,
    },
    /// Overwrite a session's fields and re-price it against the current
    /// rule table.
    ReviseSession {
        /// The session to revise.
        id: EntityId,
        /// The new session fields.
        details: SessionDetails,
    },
    /// Remove a session.
    DeleteSession {
        /// The session to remove.
        id: EntityId,
    },
}

impl Command {
    /// Returns the action name recorded for this command.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::ReplaceState { .. } => "ReplaceState",
            Self::UpdateSettings { .. } => "UpdateSettings",
            Self::AddCatalogEntry { .. } => "AddCatalogEntry",
            Self::DeleteCatalogEntry { .. } => "DeleteCatalogEntry",
            Self::AddRateRule { .. } => "AddRateRule",
            Self::UpdateRateRule { .. } => "UpdateRateRule",
            Self::DeleteRateRule { .. } => "DeleteRateRule",
            Self::LogSession { .. } => "LogSession",
            Self::ReviseSession { .. } => "ReviseSession",
            Self::DeleteSession { .. } => "DeleteSession",
        }
    }
}
