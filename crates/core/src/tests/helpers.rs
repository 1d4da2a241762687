// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{Command, SequentialIdGenerator, SessionDetails, State, TransitionResult, apply};
use time::Date;
use tutor_billing_domain::{CatalogEntry, EntityId, RateScope, SessionStatus, parse_iso_date};

pub fn create_test_ids() -> SequentialIdGenerator {
    SequentialIdGenerator::new("t")
}

/// A state with two entries in each catalog and no rules or sessions.
pub fn create_test_state() -> State {
    let mut state: State = State::new();
    state.centers = vec![
        CatalogEntry::new(EntityId::new("north"), "North Center"),
        CatalogEntry::new(EntityId::new("south"), "South Center"),
    ];
    state.subjects = vec![
        CatalogEntry::new(EntityId::new("math"), "Math"),
        CatalogEntry::new(EntityId::new("science"), "Science"),
    ];
    state.standards = vec![
        CatalogEntry::new(EntityId::new("std10"), "10"),
        CatalogEntry::new(EntityId::new("std12"), "12"),
    ];
    state
}

pub fn create_test_date(value: &str) -> Date {
    parse_iso_date(value).unwrap()
}

pub fn create_test_details(
    date: &str,
    center: &str,
    subject: &str,
    standard: &str,
    duration: f64,
) -> SessionDetails {
    SessionDetails {
        date: create_test_date(date),
        center_id: EntityId::new(center),
        subject_id: EntityId::new(subject),
        standard_id: EntityId::new(standard),
        duration,
        status: SessionStatus::Completed,
    }
}

pub fn scope(center: Option<&str>, subject: Option<&str>, standard: Option<&str>) -> RateScope {
    RateScope::new(
        center.map(EntityId::new),
        subject.map(EntityId::new),
        standard.map(EntityId::new),
    )
}

/// Applies a command that is expected to succeed and returns the new state.
pub fn apply_ok(state: &State, command: Command, ids: &mut SequentialIdGenerator) -> State {
    let result: TransitionResult = apply(state, command, ids).unwrap();
    result.new_state
}

/// Adds a rule and returns the new state.
pub fn with_rule(
    state: &State,
    rule_scope: RateScope,
    rate_per_hour: f64,
    ids: &mut SequentialIdGenerator,
) -> State {
    apply_ok(
        state,
        Command::AddRateRule {
            scope: rule_scope,
            rate_per_hour,
        },
        ids,
    )
}
