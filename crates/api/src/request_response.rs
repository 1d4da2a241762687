// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API request and response data transfer objects.
//!
//! Requests carry raw, unvalidated text as typed by the user. Responses carry
//! resolved display names alongside the stored values.

use time::Date;
use tutor_billing::State;
use tutor_billing_audit::TransitionEvent;
use tutor_billing_domain::{
    CatalogKind, EntityId, RateRule, RateScope, Session, SessionStatus, display_name, scope_label,
};

/// API request to log or revise a session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionRequest {
    /// The session date (`YYYY-MM-DD`).
    pub date: String,
    /// The center id.
    pub center_id: String,
    /// The subject id.
    pub subject_id: String,
    /// The standard id.
    pub standard_id: String,
    /// The duration in hours.
    pub duration: String,
    /// The status; `None` means completed.
    pub status: Option<String>,
}

/// API request to add or edit a rate rule.
///
/// A blank or absent scope field is a wildcard.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RateRuleRequest {
    /// The center scope.
    pub center_id: Option<String>,
    /// The subject scope.
    pub subject_id: Option<String>,
    /// The standard scope.
    pub standard_id: Option<String>,
    /// The hourly rate.
    pub rate_per_hour: String,
}

/// API request for a price preview.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuoteRequest {
    /// The center, if chosen.
    pub center_id: Option<String>,
    /// The subject, if chosen.
    pub subject_id: Option<String>,
    /// The standard, if chosen.
    pub standard_id: Option<String>,
    /// The duration in hours; blank previews the rate alone.
    pub duration: String,
}

/// The result of an API operation that changed state.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResult<T> {
    /// The API response.
    pub response: T,
    /// The transition event generated by this operation.
    pub event: TransitionEvent,
}

/// API response for a saved rate rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaveRateRuleResponse {
    /// The id of the rule that now holds the rate.
    pub rule_id: EntityId,
    /// Whether the rate was merged into a rule that already had this scope.
    pub merged: bool,
    /// A success message.
    pub message: String,
}

/// API response for a delete.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteResponse {
    /// Whether anything was removed.
    pub removed: bool,
    /// A human-readable message.
    pub message: String,
}

/// A rate rule with each scope dimension resolved for display.
#[derive(Debug, Clone, PartialEq)]
pub struct RateRuleRow {
    /// The rule id.
    pub id: EntityId,
    /// Center name, or "Any".
    pub center: String,
    /// Subject name, or "Any".
    pub subject: String,
    /// Standard name, or "Any".
    pub standard: String,
    /// The hourly rate.
    pub rate_per_hour: f64,
}

impl RateRuleRow {
    /// Resolves a rule's scope against the catalogs in `state`.
    #[must_use]
    pub fn from_rule(state: &State, rule: &RateRule) -> Self {
        let scope: RateScope = rule.scope();
        let label = |kind: CatalogKind| -> String {
            scope_label(state.catalog(kind), scope.reference(kind)).to_string()
        };
        Self {
            id: rule.id.clone(),
            center: label(CatalogKind::Center),
            subject: label(CatalogKind::Subject),
            standard: label(CatalogKind::Standard),
            rate_per_hour: rule.rate_per_hour,
        }
    }
}

/// A session with its references resolved for display.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionRow {
    /// The session id.
    pub id: EntityId,
    /// The session date.
    pub date: Date,
    /// The referenced center id.
    pub center_id: EntityId,
    /// Center name, or "—".
    pub center: String,
    /// Subject name, or "—".
    pub subject: String,
    /// Standard name, or "—".
    pub standard: String,
    /// Duration in hours.
    pub duration: f64,
    /// Lifecycle status.
    pub status: SessionStatus,
    /// Frozen hourly rate.
    pub rate: f64,
    /// Frozen amount.
    pub amount: f64,
}

impl SessionRow {
    /// Resolves a session's references against the catalogs in `state`.
    #[must_use]
    pub fn from_session(state: &State, session: &Session) -> Self {
        Self {
            id: session.id.clone(),
            date: session.date,
            center_id: session.center_id.clone(),
            center: display_name(state.catalog(CatalogKind::Center), &session.center_id)
                .to_string(),
            subject: display_name(state.catalog(CatalogKind::Subject), &session.subject_id)
                .to_string(),
            standard: display_name(state.catalog(CatalogKind::Standard), &session.standard_id)
                .to_string(),
            duration: session.duration,
            status: session.status,
            rate: session.rate,
            amount: session.amount,
        }
    }
}
