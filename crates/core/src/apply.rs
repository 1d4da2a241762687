// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::command::{Command, SessionDetails};
use crate::error::CoreError;
use crate::ids::IdGenerator;
use crate::state::{Quote, State, TransitionResult};
use tutor_billing_audit::{Action, StateSnapshot, TransitionEvent};
use tutor_billing_domain::{
    CatalogEntry, CatalogKind, DomainError, EntityId, RateRule, RateScope, Session, Theme,
    validate_catalog_name, validate_duration, validate_rate_per_hour, validate_reference,
};

/// The outcome of one command before it is wrapped in a `TransitionResult`.
struct Applied {
    new_state: State,
    details: Option<String>,
    affected_id: Option<EntityId>,
}

/// Applies a command to the current state, producing a new state and a
/// transition event.
///
/// The input state is never modified. New identifiers are drawn from `ids`.
///
/// # Arguments
///
/// * `state` - The current state (immutable)
/// * `command` - The command to apply
/// * `ids` - The identifier source for entities this command creates
///
/// # Returns
///
/// * `Ok(TransitionResult)` containing the new state and transition event
/// * `Err(CoreError)` if the command is invalid
///
/// # Errors
///
/// Returns an error if:
/// - A name, rate, duration, or required reference fails validation
/// - An update names a rate rule or session that does not exist
pub fn apply(
    state: &State,
    command: Command,
    ids: &mut impl IdGenerator,
) -> Result<TransitionResult, CoreError> {
    let action_name: &'static str = command.name();
    let before: StateSnapshot = state.to_snapshot();

    let applied: Applied = match command {
        Command::ReplaceState { state: replacement } => Applied {
            details: Some(format!(
                "Replaced state ({} sessions, {} rate rules)",
                replacement.sessions.len(),
                replacement.rate_rules.len()
            )),
            new_state: *replacement,
            affected_id: None,
        },
        Command::UpdateSettings { tutor_name, theme } => {
            apply_update_settings(state, tutor_name, theme)
        }
        Command::AddCatalogEntry { kind, name } => apply_add_catalog_entry(state, kind, &name, ids)?,
        Command::DeleteCatalogEntry { kind, id } => apply_delete_catalog_entry(state, kind, id),
        Command::AddRateRule {
            scope,
            rate_per_hour,
        } => apply_add_rate_rule(state, scope, rate_per_hour, ids)?,
        Command::UpdateRateRule {
            id,
            scope,
            rate_per_hour,
        } => apply_update_rate_rule(state, id, scope, rate_per_hour)?,
        Command::DeleteRateRule { id } => apply_delete_rate_rule(state, id),
        Command::LogSession { details } => apply_log_session(state, details, ids)?,
        Command::ReviseSession { id, details } => apply_revise_session(state, id, details)?,
        Command::DeleteSession { id } => apply_delete_session(state, id),
    };

    let after: StateSnapshot = applied.new_state.to_snapshot();
    let event: TransitionEvent =
        TransitionEvent::new(Action::new(action_name, applied.details), before, after);

    Ok(TransitionResult {
        new_state: applied.new_state,
        event,
        affected_id: applied.affected_id,
    })
}

fn apply_update_settings(
    state: &State,
    tutor_name: Option<String>,
    theme: Option<Theme>,
) -> Applied {
    let mut new_state: State = state.clone();
    if let Some(name) = tutor_name {
        new_state.settings.tutor_name = name;
    }
    if let Some(theme) = theme {
        new_state.settings.theme = theme;
    }

    Applied {
        details: Some(format!(
            "Settings: tutor name '{}', theme {}",
            new_state.settings.tutor_name, new_state.settings.theme
        )),
        new_state,
        affected_id: None,
    }
}

fn apply_add_catalog_entry(
    state: &State,
    kind: CatalogKind,
    name: &str,
    ids: &mut impl IdGenerator,
) -> Result<Applied, CoreError> {
    let name: String = validate_catalog_name(kind, name)?;
    let id: EntityId = ids.next_id();

    let mut new_state: State = state.clone();
    new_state
        .catalog_mut(kind)
        .push(CatalogEntry::new(id.clone(), name.clone()));

    Ok(Applied {
        new_state,
        details: Some(format!("Added {kind} '{name}' ({id})")),
        affected_id: Some(id),
    })
}

fn apply_delete_catalog_entry(state: &State, kind: CatalogKind, id: EntityId) -> Applied {
    // References from rules and sessions are intentionally left dangling.
    let mut new_state: State = state.clone();
    let entries: &mut Vec<CatalogEntry> = new_state.catalog_mut(kind);
    let before_len: usize = entries.len();
    entries.retain(|entry| entry.id != id);
    let removed: bool = entries.len() != before_len;

    Applied {
        new_state,
        details: Some(if removed {
            format!("Deleted {kind} {id}")
        } else {
            format!("No {kind} {id} to delete")
        }),
        affected_id: removed.then_some(id),
    }
}

fn apply_add_rate_rule(
    state: &State,
    scope: RateScope,
    rate_per_hour: f64,
    ids: &mut impl IdGenerator,
) -> Result<Applied, CoreError> {
    validate_rate_per_hour(rate_per_hour)?;

    let mut new_state: State = state.clone();

    // A new rule with a scope that already exists overwrites that rule's rate
    // instead of adding an ambiguous duplicate.
    if let Some(existing) = new_state
        .rate_rules
        .iter_mut()
        .find(|rule| rule.has_scope(&scope))
    {
        existing.rate_per_hour = rate_per_hour;
        let id: EntityId = existing.id.clone();
        return Ok(Applied {
            new_state,
            details: Some(format!(
                "Merged into existing rate rule {id} at {rate_per_hour}/hr"
            )),
            affected_id: Some(id),
        });
    }

    let id: EntityId = ids.next_id();
    new_state
        .rate_rules
        .push(RateRule::new(id.clone(), scope, rate_per_hour));

    Ok(Applied {
        new_state,
        details: Some(format!("Added rate rule {id} at {rate_per_hour}/hr")),
        affected_id: Some(id),
    })
}

fn apply_update_rate_rule(
    state: &State,
    id: EntityId,
    scope: RateScope,
    rate_per_hour: f64,
) -> Result<Applied, CoreError> {
    validate_rate_per_hour(rate_per_hour)?;

    let mut new_state: State = state.clone();
    let rule: &mut RateRule = new_state
        .rate_rules
        .iter_mut()
        .find(|rule| rule.id == id)
        .ok_or_else(|| DomainError::RateRuleNotFound(id.to_string()))?;

    // No collision check here: an edit may give this rule the same scope as
    // another one, and resolution then picks whichever is stored first.
    rule.set_scope(scope);
    rule.rate_per_hour = rate_per_hour;

    Ok(Applied {
        new_state,
        details: Some(format!("Updated rate rule {id} to {rate_per_hour}/hr")),
        affected_id: Some(id),
    })
}

fn apply_delete_rate_rule(state: &State, id: EntityId) -> Applied {
    let mut new_state: State = state.clone();
    let before_len: usize = new_state.rate_rules.len();
    new_state.rate_rules.retain(|rule| rule.id != id);
    let removed: bool = new_state.rate_rules.len() != before_len;

    Applied {
        new_state,
        details: Some(if removed {
            format!("Deleted rate rule {id}")
        } else {
            format!("No rate rule {id} to delete")
        }),
        affected_id: removed.then_some(id),
    }
}

/// Checks the fields every session write requires.
fn validate_session_details(details: &SessionDetails) -> Result<(), DomainError> {
    validate_reference(CatalogKind::Center, &details.center_id)?;
    validate_reference(CatalogKind::Subject, &details.subject_id)?;
    validate_reference(CatalogKind::Standard, &details.standard_id)?;
    validate_duration(details.duration)
}

/// Builds a session record with a freshly frozen price.
fn priced_session(state: &State, id: EntityId, details: SessionDetails) -> Session {
    let quote: Quote = state.quote(&details.query(), details.duration);
    Session {
        id,
        date: details.date,
        center_id: details.center_id,
        subject_id: details.subject_id,
        standard_id: details.standard_id,
        duration: details.duration,
        status: details.status,
        rate: quote.rate,
        amount: quote.amount,
    }
}

fn apply_log_session(
    state: &State,
    details: SessionDetails,
    ids: &mut impl IdGenerator,
) -> Result<Applied, CoreError> {
    validate_session_details(&details)?;

    let id: EntityId = ids.next_id();
    let session: Session = priced_session(state, id.clone(), details);
    let summary: String = format!(
        "Logged {} session {id} on {}: {}h at {}/hr = {}",
        session.status, session.date, session.duration, session.rate, session.amount
    );

    let mut new_state: State = state.clone();
    new_state.sessions.push(session);

    Ok(Applied {
        new_state,
        details: Some(summary),
        affected_id: Some(id),
    })
}

fn apply_revise_session(
    state: &State,
    id: EntityId,
    details: SessionDetails,
) -> Result<Applied, CoreError> {
    validate_session_details(&details)?;

    let position: usize = state
        .sessions
        .iter()
        .position(|session| session.id == id)
        .ok_or_else(|| DomainError::SessionNotFound(id.to_string()))?;

    // Revising always re-prices from the current rule table.
    let session: Session = priced_session(state, id.clone(), details);
    let summary: String = format!(
        "Revised session {id}: {}h at {}/hr = {}",
        session.duration, session.rate, session.amount
    );

    let mut new_state: State = state.clone();
    new_state.sessions[position] = session;

    Ok(Applied {
        new_state,
        details: Some(summary),
        affected_id: Some(id),
    })
}

fn apply_delete_session(state: &State, id: EntityId) -> Applied {
    let mut new_state: State = state.clone();
    let before_len: usize = new_state.sessions.len();
    new_state.sessions.retain(|session| session.id != id);
    let removed: bool = new_state.sessions.len() != before_len;

    Applied {
        new_state,
        details: Some(if removed {
            format!("Deleted session {id}")
        } else {
            format!("No session {id} to delete")
        }),
        affected_id: removed.then_some(id),
    }
}
