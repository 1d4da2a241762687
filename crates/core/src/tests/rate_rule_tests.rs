// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::tests::helpers::{apply_ok, create_test_ids, create_test_state, scope, with_rule};
use crate::{Command, CoreError, SequentialIdGenerator, State, TransitionResult, apply};
use tutor_billing_domain::{DomainError, EntityId, RateQuery, SpecificityTier};

#[test]
fn test_add_rate_rule_appends_in_storage_order() {
    let mut ids: SequentialIdGenerator = create_test_ids();
    let state: State = with_rule(&State::new(), scope(None, Some("math"), None), 500.0, &mut ids);
    let state: State = with_rule(&state, scope(None, None, None), 300.0, &mut ids);

    assert_eq!(state.rate_rules.len(), 2);
    assert_eq!(state.rate_rules[0].id.as_str(), "t-1");
    assert_eq!(state.rate_rules[1].id.as_str(), "t-2");
}

#[test]
fn test_add_rate_rule_with_existing_scope_overwrites_rate() {
    let mut ids: SequentialIdGenerator = create_test_ids();
    let state: State = with_rule(
        &State::new(),
        scope(Some("north"), Some("math"), None),
        400.0,
        &mut ids,
    );

    let result: TransitionResult = apply(
        &state,
        Command::AddRateRule {
            scope: scope(Some("north"), Some("math"), None),
            rate_per_hour: 650.0,
        },
        &mut ids,
    )
    .unwrap();

    assert_eq!(result.new_state.rate_rules.len(), 1);
    assert_eq!(result.new_state.rate_rules[0].rate_per_hour, 650.0);
    assert_eq!(result.affected_id, Some(EntityId::new("t-1")));
    assert!(result.event.is_size_preserving());
}

#[test]
fn test_add_rate_rule_rejects_non_positive_rates() {
    let state: State = State::new();
    let mut ids: SequentialIdGenerator = create_test_ids();

    for rate in [0.0, -100.0, f64::NAN] {
        let result: Result<TransitionResult, CoreError> = apply(
            &state,
            Command::AddRateRule {
                scope: scope(None, None, None),
                rate_per_hour: rate,
            },
            &mut ids,
        );
        assert!(matches!(
            result,
            Err(CoreError::DomainViolation(DomainError::InvalidRate(_)))
        ));
    }
}

#[test]
fn test_update_rate_rule_overwrites_scope_and_rate() {
    let mut ids: SequentialIdGenerator = create_test_ids();
    let state: State = with_rule(&State::new(), scope(None, None, None), 300.0, &mut ids);

    let updated: State = apply_ok(
        &state,
        Command::UpdateRateRule {
            id: EntityId::new("t-1"),
            scope: scope(None, Some("science"), None),
            rate_per_hour: 550.0,
        },
        &mut ids,
    );

    assert_eq!(updated.rate_rules.len(), 1);
    assert_eq!(updated.rate_rules[0].subject_id, Some(EntityId::new("science")));
    assert_eq!(updated.rate_rules[0].rate_per_hour, 550.0);
}

#[test]
fn test_update_rate_rule_may_collide_with_another_scope() {
    let mut ids: SequentialIdGenerator = create_test_ids();
    let state: State = with_rule(&State::new(), scope(None, Some("math"), None), 500.0, &mut ids);
    let state: State = with_rule(&state, scope(None, None, None), 300.0, &mut ids);

    let updated: State = apply_ok(
        &state,
        Command::UpdateRateRule {
            id: EntityId::new("t-2"),
            scope: scope(None, Some("math"), None),
            rate_per_hour: 900.0,
        },
        &mut ids,
    );

    assert_eq!(updated.rate_rules.len(), 2);
    let (c, s, st): (EntityId, EntityId, EntityId) = (
        EntityId::new("north"),
        EntityId::new("math"),
        EntityId::new("std10"),
    );
    // The first stored rule still wins the tie.
    assert_eq!(updated.quote(&RateQuery::new(&c, &s, &st), 1.0).rate, 500.0);
}

#[test]
fn test_update_unknown_rate_rule_is_rejected() {
    let state: State = State::new();
    let mut ids: SequentialIdGenerator = create_test_ids();

    let result: Result<TransitionResult, CoreError> = apply(
        &state,
        Command::UpdateRateRule {
            id: EntityId::new("missing"),
            scope: scope(None, None, None),
            rate_per_hour: 300.0,
        },
        &mut ids,
    );

    assert_eq!(
        result.unwrap_err(),
        CoreError::DomainViolation(DomainError::RateRuleNotFound(String::from("missing")))
    );
}

#[test]
fn test_delete_rate_rule_removes_only_that_rule() {
    let mut ids: SequentialIdGenerator = create_test_ids();
    let state: State = with_rule(&State::new(), scope(None, Some("math"), None), 500.0, &mut ids);
    let state: State = with_rule(&state, scope(None, None, None), 300.0, &mut ids);

    let deleted: State = apply_ok(
        &state,
        Command::DeleteRateRule {
            id: EntityId::new("t-1"),
        },
        &mut ids,
    );

    assert_eq!(deleted.rate_rules.len(), 1);
    assert_eq!(deleted.rate_rules[0].id.as_str(), "t-2");
}

#[test]
fn test_quote_reports_matching_rule_and_tier() {
    let mut ids: SequentialIdGenerator = create_test_ids();
    let state: State = with_rule(
        &create_test_state(),
        scope(None, Some("math"), Some("std10")),
        500.0,
        &mut ids,
    );
    let (c, s, st): (EntityId, EntityId, EntityId) = (
        EntityId::new("south"),
        EntityId::new("math"),
        EntityId::new("std10"),
    );

    let quote = state.quote(&RateQuery::new(&c, &s, &st), 1.5);

    assert_eq!(quote.rate, 500.0);
    assert_eq!(quote.amount, 750.0);
    assert_eq!(quote.rule_id, Some(EntityId::new("t-1")));
    assert_eq!(quote.tier, Some(SpecificityTier::SubjectStandard));
}

#[test]
fn test_quote_without_any_rule_is_zero() {
    let state: State = create_test_state();
    let (c, s, st): (EntityId, EntityId, EntityId) = (
        EntityId::new("north"),
        EntityId::new("math"),
        EntityId::new("std10"),
    );

    let quote = state.quote(&RateQuery::new(&c, &s, &st), 2.0);

    assert_eq!(quote.rate, 0.0);
    assert_eq!(quote.amount, 0.0);
    assert!(quote.rule_id.is_none());
    assert!(quote.tier.is_none());
}
