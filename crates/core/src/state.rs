// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use serde::{Deserialize, Serialize};
use tutor_billing_audit::{StateSnapshot, TransitionEvent};
use tutor_billing_domain::{
    CatalogEntry, CatalogKind, EntityId, RateMatch, RateQuery, RateRule, RateScope, Session,
    Settings, SpecificityTier, resolve_rule,
};

/// The complete aggregate: settings, the three catalogs, the rate rule
/// table, and the session ledger.
///
/// Exactly one instance exists per persistence scope. Transitions never
/// mutate a `State` in place; they produce a new one.
///
/// Missing top-level keys deserialize to their defaults, so a partial
/// snapshot merges over the default aggregate.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct State {
    /// User preferences.
    pub settings: Settings,
    /// Teaching centers.
    pub centers: Vec<CatalogEntry>,
    /// Subjects.
    pub subjects: Vec<CatalogEntry>,
    /// Grade standards.
    pub standards: Vec<CatalogEntry>,
    /// Rate rules in storage order. Order matters for tie-breaks.
    pub rate_rules: Vec<RateRule>,
    /// Sessions in insertion order.
    pub sessions: Vec<Session>,
}

impl State {
    /// Creates the default aggregate: default settings and empty collections.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the entries of one catalog.
    #[must_use]
    pub fn catalog(&self, kind: CatalogKind) -> &[CatalogEntry] {
        match kind {
            CatalogKind::Center => &self.centers,
            CatalogKind::Subject => &self.subjects,
            CatalogKind::Standard => &self.standards,
        }
    }

    pub(crate) const fn catalog_mut(&mut self, kind: CatalogKind) -> &mut Vec<CatalogEntry> {
        match kind {
            CatalogKind::Center => &mut self.centers,
            CatalogKind::Subject => &mut self.subjects,
            CatalogKind::Standard => &mut self.standards,
        }
    }

    /// Finds a rate rule by id.
    #[must_use]
    pub fn find_rate_rule(&self, id: &EntityId) -> Option<&RateRule> {
        self.rate_rules.iter().find(|rule| &rule.id == id)
    }

    /// Finds the first rate rule with exactly this scope.
    #[must_use]
    pub fn find_rate_rule_by_scope(&self, scope: &RateScope) -> Option<&RateRule> {
        self.rate_rules.iter().find(|rule| rule.has_scope(scope))
    }

    /// Finds a session by id.
    #[must_use]
    pub fn find_session(&self, id: &EntityId) -> Option<&Session> {
        self.sessions.iter().find(|session| &session.id == id)
    }

    /// Prices `duration` hours in the context of `query` against the
    /// current rule table.
    #[must_use]
    pub fn quote(&self, query: &RateQuery<'_>, duration: f64) -> Quote {
        let matched: Option<RateMatch<'_>> = resolve_rule(&self.rate_rules, query);
        let rate: f64 = matched.map_or(0.0, |m| m.rule.rate_per_hour);
        Quote {
            rate,
            amount: rate * duration,
            rule_id: matched.map(|m| m.rule.id.clone()),
            tier: matched.map(|m| m.tier),
        }
    }

    /// Converts the state to a summary snapshot for transition events.
    #[must_use]
    pub fn to_snapshot(&self) -> StateSnapshot {
        StateSnapshot {
            centers: self.centers.len(),
            subjects: self.subjects.len(),
            standards: self.standards.len(),
            rate_rules: self.rate_rules.len(),
            sessions: self.sessions.len(),
        }
    }
}

/// The price of a session context at a point in time.
#[derive(Debug, Clone, PartialEq)]
pub struct Quote {
    /// The resolved hourly rate (`0.0` when nothing matched).
    pub rate: f64,
    /// `rate * duration`.
    pub amount: f64,
    /// The rule that supplied the rate.
    pub rule_id: Option<EntityId>,
    /// The tier the rule matched at.
    pub tier: Option<SpecificityTier>,
}

/// The result of a successful state transition.
///
/// Transitions are atomic: they either succeed completely or fail without side effects.
#[derive(Debug, Clone, PartialEq)]
pub struct TransitionResult {
    /// The new state after the transition.
    pub new_state: State,
    /// The event recording this transition.
    pub event: TransitionEvent,
    /// The entity created or changed by the transition, when there is one.
    ///
    /// For a merged rate rule this is the id of the existing rule.
    pub affected_id: Option<EntityId>,
}
