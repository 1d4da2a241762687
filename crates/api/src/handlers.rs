// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Operations over the billing store.
//!
//! Write operations validate raw input at this boundary, translate it into a
//! core command, and dispatch it through the store. Read operations are pure
//! projections over the current aggregate.

use tracing::info;
use tutor_billing::{Command, IdGenerator, Quote, SessionDetails, State, TransitionResult};
use tutor_billing_domain::{
    CatalogEntry, CatalogKind, DomainError, EntityId, RateQuery, RateScope, SessionStatus, Theme,
    parse_iso_date, parse_number,
};
use tutor_billing_persistence::KeyValueStore;

use crate::error::{ApiError, translate_domain_error};
use crate::request_response::{
    ApiResult, DeleteResponse, QuoteRequest, RateRuleRequest, RateRuleRow, SaveRateRuleResponse,
    SessionRequest, SessionRow,
};
use crate::store::BillingStore;

/// Reads a required reference, rejecting blank input.
fn parse_required_id(kind: CatalogKind, raw: &str) -> Result<EntityId, ApiError> {
    let trimmed: &str = raw.trim();
    if trimmed.is_empty() {
        return Err(translate_domain_error(DomainError::MissingReference(kind)));
    }
    Ok(EntityId::new(trimmed))
}

/// Reads an optional reference; blank input is treated as absent.
fn parse_optional_id(raw: Option<&str>) -> Option<EntityId> {
    raw.map(str::trim)
        .filter(|value| !value.is_empty())
        .map(EntityId::new)
}

fn parse_rate(raw: &str) -> Result<f64, ApiError> {
    parse_number(raw).ok_or_else(|| {
        translate_domain_error(DomainError::InvalidRate(format!(
            "Rate per hour must be a number, got '{}'",
            raw.trim()
        )))
    })
}

fn parse_duration(raw: &str) -> Result<f64, ApiError> {
    parse_number(raw).ok_or_else(|| {
        translate_domain_error(DomainError::InvalidDuration(format!(
            "Duration must be a number of hours, got '{}'",
            raw.trim()
        )))
    })
}

fn parse_status(raw: Option<&str>) -> Result<SessionStatus, ApiError> {
    match raw.map(str::trim).filter(|value| !value.is_empty()) {
        Some(value) => value.parse().map_err(translate_domain_error),
        None => Ok(SessionStatus::default()),
    }
}

/// Validates a session request into command details.
///
/// # Errors
///
/// Returns an error if the date is not a valid `YYYY-MM-DD` date, a
/// reference is blank, the duration is not a number, or the status is
/// unknown.
pub fn parse_session_request(request: &SessionRequest) -> Result<SessionDetails, ApiError> {
    let center_id: EntityId = parse_required_id(CatalogKind::Center, &request.center_id)?;
    let subject_id: EntityId = parse_required_id(CatalogKind::Subject, &request.subject_id)?;
    let standard_id: EntityId = parse_required_id(CatalogKind::Standard, &request.standard_id)?;
    let date: time::Date = parse_iso_date(&request.date).map_err(translate_domain_error)?;
    let duration: f64 = parse_duration(&request.duration)?;
    let status: SessionStatus = parse_status(request.status.as_deref())?;

    Ok(SessionDetails {
        date,
        center_id,
        subject_id,
        standard_id,
        duration,
        status,
    })
}

// ============================================================================
// Catalogs
// ============================================================================

/// Adds an entry to a catalog.
///
/// # Errors
///
/// Returns an error if the name is blank or the write fails.
pub fn add_catalog_entry<S: KeyValueStore, G: IdGenerator>(
    store: &mut BillingStore<S, G>,
    kind: CatalogKind,
    name: &str,
) -> Result<ApiResult<CatalogEntry>, ApiError> {
    let result: TransitionResult = store.dispatch(Command::AddCatalogEntry {
        kind,
        name: name.to_string(),
    })?;

    let entry: CatalogEntry = result
        .affected_id
        .as_ref()
        .and_then(|id| {
            result
                .new_state
                .catalog(kind)
                .iter()
                .find(|entry| &entry.id == id)
        })
        .cloned()
        .ok_or_else(|| ApiError::ResourceNotFound {
            resource_type: kind.title().to_string(),
            message: String::from("Entry missing after add"),
        })?;

    info!(kind = %kind, id = %entry.id, name = %entry.name, "Added catalog entry");
    Ok(ApiResult {
        response: entry,
        event: result.event,
    })
}

/// Removes an entry from a catalog.
///
/// Rate rules and sessions that reference the entry are kept as they are.
///
/// # Errors
///
/// Returns an error if the write fails.
pub fn delete_catalog_entry<S: KeyValueStore, G: IdGenerator>(
    store: &mut BillingStore<S, G>,
    kind: CatalogKind,
    id: &str,
) -> Result<ApiResult<DeleteResponse>, ApiError> {
    let result: TransitionResult = store.dispatch(Command::DeleteCatalogEntry {
        kind,
        id: EntityId::new(id.trim()),
    })?;

    let removed: bool = result.affected_id.is_some();
    Ok(ApiResult {
        response: DeleteResponse {
            removed,
            message: if removed {
                format!("Deleted {kind} '{}'", id.trim())
            } else {
                format!("No {kind} with id '{}'", id.trim())
            },
        },
        event: result.event,
    })
}

/// Lists a catalog in insertion order.
#[must_use]
pub fn list_catalog(state: &State, kind: CatalogKind) -> Vec<CatalogEntry> {
    state.catalog(kind).to_vec()
}

// ============================================================================
// Rate rules
// ============================================================================

/// Adds a rate rule, or edits one when `rule_id` is given.
///
/// Adding a rule whose scope matches an existing rule overwrites that rule's
/// rate. Editing overwrites scope and rate with no collision check.
///
/// # Errors
///
/// Returns an error if the rate is not a positive number, the rule to edit
/// does not exist, or the write fails.
pub fn save_rate_rule<S: KeyValueStore, G: IdGenerator>(
    store: &mut BillingStore<S, G>,
    rule_id: Option<&str>,
    request: &RateRuleRequest,
) -> Result<ApiResult<SaveRateRuleResponse>, ApiError> {
    let rate_per_hour: f64 = parse_rate(&request.rate_per_hour)?;
    let scope: RateScope = RateScope::new(
        parse_optional_id(request.center_id.as_deref()),
        parse_optional_id(request.subject_id.as_deref()),
        parse_optional_id(request.standard_id.as_deref()),
    );

    let command: Command = match parse_optional_id(rule_id) {
        Some(id) => Command::UpdateRateRule {
            id,
            scope,
            rate_per_hour,
        },
        None => Command::AddRateRule {
            scope,
            rate_per_hour,
        },
    };
    let is_edit: bool = matches!(command, Command::UpdateRateRule { .. });

    let result: TransitionResult = store.dispatch(command)?;
    let merged: bool = !is_edit && result.event.is_size_preserving();
    let rule_id: EntityId = result
        .affected_id
        .clone()
        .ok_or_else(|| ApiError::ResourceNotFound {
            resource_type: String::from("Rate rule"),
            message: String::from("Rule missing after save"),
        })?;

    let message: String = if is_edit {
        format!("Updated rate rule '{rule_id}'")
    } else if merged {
        format!("Rate merged into existing rule '{rule_id}' with the same scope")
    } else {
        format!("Added rate rule '{rule_id}'")
    };

    Ok(ApiResult {
        response: SaveRateRuleResponse {
            rule_id,
            merged,
            message,
        },
        event: result.event,
    })
}

/// Removes a rate rule. Sessions priced by it keep their frozen amounts.
///
/// # Errors
///
/// Returns an error if the write fails.
pub fn delete_rate_rule<S: KeyValueStore, G: IdGenerator>(
    store: &mut BillingStore<S, G>,
    rule_id: &str,
) -> Result<ApiResult<DeleteResponse>, ApiError> {
    let result: TransitionResult = store.dispatch(Command::DeleteRateRule {
        id: EntityId::new(rule_id.trim()),
    })?;

    let removed: bool = result.affected_id.is_some();
    Ok(ApiResult {
        response: DeleteResponse {
            removed,
            message: if removed {
                format!("Deleted rate rule '{}'", rule_id.trim())
            } else {
                format!("No rate rule with id '{}'", rule_id.trim())
            },
        },
        event: result.event,
    })
}

/// Lists rate rules in storage order with scope names resolved.
#[must_use]
pub fn list_rate_rules(state: &State) -> Vec<RateRuleRow> {
    state
        .rate_rules
        .iter()
        .map(|rule| RateRuleRow::from_rule(state, rule))
        .collect()
}

/// Previews the price of a session context against the current rules.
///
/// Unchosen dimensions only match wildcard rules. A blank duration prices
/// zero hours.
///
/// # Errors
///
/// Returns an error if the duration is present but not a number.
pub fn quote(state: &State, request: &QuoteRequest) -> Result<Quote, ApiError> {
    let duration: f64 = if request.duration.trim().is_empty() {
        0.0
    } else {
        parse_duration(&request.duration)?
    };

    let center_id: Option<EntityId> = parse_optional_id(request.center_id.as_deref());
    let subject_id: Option<EntityId> = parse_optional_id(request.subject_id.as_deref());
    let standard_id: Option<EntityId> = parse_optional_id(request.standard_id.as_deref());
    let query: RateQuery<'_> = RateQuery {
        center_id: center_id.as_ref(),
        subject_id: subject_id.as_ref(),
        standard_id: standard_id.as_ref(),
    };

    Ok(state.quote(&query, duration))
}

// ============================================================================
// Sessions
// ============================================================================

fn session_row_for(result: &TransitionResult) -> Result<SessionRow, ApiError> {
    result
        .affected_id
        .as_ref()
        .and_then(|id| result.new_state.find_session(id))
        .map(|session| SessionRow::from_session(&result.new_state, session))
        .ok_or_else(|| ApiError::ResourceNotFound {
            resource_type: String::from("Session"),
            message: String::from("Session missing after save"),
        })
}

/// Logs a session, pricing it against the current rules.
///
/// # Errors
///
/// Returns an error if the request fails validation or the write fails.
pub fn log_session<S: KeyValueStore, G: IdGenerator>(
    store: &mut BillingStore<S, G>,
    request: &SessionRequest,
) -> Result<ApiResult<SessionRow>, ApiError> {
    let details: SessionDetails = parse_session_request(request)?;
    let result: TransitionResult = store.dispatch(Command::LogSession { details })?;
    let row: SessionRow = session_row_for(&result)?;

    Ok(ApiResult {
        response: row,
        event: result.event,
    })
}

/// Overwrites a session's fields and re-prices it against the current rules.
///
/// # Errors
///
/// Returns an error if the request fails validation, the session does not
/// exist, or the write fails.
pub fn revise_session<S: KeyValueStore, G: IdGenerator>(
    store: &mut BillingStore<S, G>,
    session_id: &str,
    request: &SessionRequest,
) -> Result<ApiResult<SessionRow>, ApiError> {
    let details: SessionDetails = parse_session_request(request)?;
    let result: TransitionResult = store.dispatch(Command::ReviseSession {
        id: EntityId::new(session_id.trim()),
        details,
    })?;
    let row: SessionRow = session_row_for(&result)?;

    Ok(ApiResult {
        response: row,
        event: result.event,
    })
}

/// Removes a session.
///
/// # Errors
///
/// Returns an error if the write fails.
pub fn delete_session<S: KeyValueStore, G: IdGenerator>(
    store: &mut BillingStore<S, G>,
    session_id: &str,
) -> Result<ApiResult<DeleteResponse>, ApiError> {
    let result: TransitionResult = store.dispatch(Command::DeleteSession {
        id: EntityId::new(session_id.trim()),
    })?;

    let removed: bool = result.affected_id.is_some();
    Ok(ApiResult {
        response: DeleteResponse {
            removed,
            message: if removed {
                format!("Deleted session '{}'", session_id.trim())
            } else {
                format!("No session with id '{}'", session_id.trim())
            },
        },
        event: result.event,
    })
}

/// Lists sessions newest first, optionally filtered by status.
///
/// Sessions on the same date keep their insertion order.
#[must_use]
pub fn list_sessions(state: &State, status: Option<SessionStatus>) -> Vec<SessionRow> {
    let mut rows: Vec<SessionRow> = state
        .sessions
        .iter()
        .filter(|session| status.is_none_or(|wanted| session.status == wanted))
        .map(|session| SessionRow::from_session(state, session))
        .collect();
    rows.sort_by(|a, b| b.date.cmp(&a.date));
    rows
}

// ============================================================================
// Settings
// ============================================================================

/// Updates the tutor name and/or theme.
///
/// # Errors
///
/// Returns an error if the name is blank, the theme is unknown, or the
/// write fails.
pub fn update_settings<S: KeyValueStore, G: IdGenerator>(
    store: &mut BillingStore<S, G>,
    tutor_name: Option<&str>,
    theme: Option<&str>,
) -> Result<ApiResult<()>, ApiError> {
    let tutor_name: Option<String> = match tutor_name.map(str::trim) {
        Some("") => {
            return Err(ApiError::InvalidInput {
                field: String::from("tutor_name"),
                message: String::from("Tutor name cannot be empty"),
            });
        }
        other => other.map(str::to_string),
    };
    let theme: Option<Theme> = theme
        .map(str::parse::<Theme>)
        .transpose()
        .map_err(translate_domain_error)?;

    let result: TransitionResult = store.dispatch(Command::UpdateSettings { tutor_name, theme })?;
    Ok(ApiResult {
        response: (),
        event: result.event,
    })
}

/// Switches between the light and dark theme.
///
/// # Errors
///
/// Returns an error if the write fails.
pub fn toggle_theme<S: KeyValueStore, G: IdGenerator>(
    store: &mut BillingStore<S, G>,
) -> Result<ApiResult<Theme>, ApiError> {
    let theme: Theme = store.state().settings.theme.toggled();
    let result: TransitionResult = store.dispatch(Command::UpdateSettings {
        tutor_name: None,
        theme: Some(theme),
    })?;

    Ok(ApiResult {
        response: theme,
        event: result.event,
    })
}
