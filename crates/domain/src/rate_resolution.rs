// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Hourly rate resolution.
//!
//! A session is priced by walking eight fixed specificity tiers, from the
//! fully pinned (center, subject, standard) rule down to the global default.
//! The first tier that contains a matching rule decides the rate; inside a
//! tier the earliest rule in storage order wins.
//!
//! The tier order is pricing policy. Reordering it changes what every newly
//! logged or revised session is billed at.

use crate::types::{EntityId, RateRule};

/// How a tier constrains one scope dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DimensionMatch {
    /// The rule pins this dimension to the queried value.
    Exact,
    /// The rule leaves this dimension as a wildcard.
    Any,
}

impl DimensionMatch {
    fn accepts(self, rule_value: Option<&EntityId>, query_value: Option<&EntityId>) -> bool {
        match self {
            Self::Exact => matches!((rule_value, query_value), (Some(r), Some(q)) if r == q),
            Self::Any => rule_value.is_none(),
        }
    }
}

/// One of the eight specificity tiers, most specific first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SpecificityTier {
    /// Center, subject and standard all pinned.
    CenterSubjectStandard,
    /// Subject and standard pinned, any center.
    SubjectStandard,
    /// Center and subject pinned, any standard.
    CenterSubject,
    /// Center and standard pinned, any subject.
    CenterStandard,
    /// Subject pinned only.
    SubjectOnly,
    /// Center pinned only.
    CenterOnly,
    /// Standard pinned only.
    StandardOnly,
    /// Nothing pinned: the global default.
    GlobalDefault,
}

impl SpecificityTier {
    /// Every tier in resolution order.
    pub const ORDER: [Self; 8] = [
        Self::CenterSubjectStandard,
        Self::SubjectStandard,
        Self::CenterSubject,
        Self::CenterStandard,
        Self::SubjectOnly,
        Self::CenterOnly,
        Self::StandardOnly,
        Self::GlobalDefault,
    ];

    /// Returns the 1-based rank of this tier (1 = most specific).
    #[must_use]
    pub const fn rank(self) -> u8 {
        match self {
            Self::CenterSubjectStandard => 1,
            Self::SubjectStandard => 2,
            Self::CenterSubject => 3,
            Self::CenterStandard => 4,
            Self::SubjectOnly => 5,
            Self::CenterOnly => 6,
            Self::StandardOnly => 7,
            Self::GlobalDefault => 8,
        }
    }

    /// Returns a short human-readable description.
    #[must_use]
    pub const fn describe(self) -> &'static str {
        match self {
            Self::CenterSubjectStandard => "center + subject + standard",
            Self::SubjectStandard => "subject + standard",
            Self::CenterSubject => "center + subject",
            Self::CenterStandard => "center + standard",
            Self::SubjectOnly => "subject",
            Self::CenterOnly => "center",
            Self::StandardOnly => "standard",
            Self::GlobalDefault => "default",
        }
    }

    /// The (center, subject, standard) pattern a rule must have to sit in
    /// this tier.
    const fn pattern(self) -> (DimensionMatch, DimensionMatch, DimensionMatch) {
        use DimensionMatch::{Any, Exact};
        match self {
            Self::CenterSubjectStandard => (Exact, Exact, Exact),
            Self::SubjectStandard => (Any, Exact, Exact),
            Self::CenterSubject => (Exact, Exact, Any),
            Self::CenterStandard => (Exact, Any, Exact),
            Self::SubjectOnly => (Any, Exact, Any),
            Self::CenterOnly => (Exact, Any, Any),
            Self::StandardOnly => (Any, Any, Exact),
            Self::GlobalDefault => (Any, Any, Any),
        }
    }

    fn matches(self, rule: &RateRule, query: &RateQuery<'_>) -> bool {
        let (center, subject, standard) = self.pattern();
        center.accepts(rule.center_id.as_ref(), query.center_id)
            && subject.accepts(rule.subject_id.as_ref(), query.subject_id)
            && standard.accepts(rule.standard_id.as_ref(), query.standard_id)
    }
}

impl std::fmt::Display for SpecificityTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "tier {} ({})", self.rank(), self.describe())
    }
}

/// The pricing context being resolved.
///
/// A dimension may be absent, for example while a session form is still
/// being filled in. An absent value never satisfies a pinned dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RateQuery<'a> {
    /// The center being priced.
    pub center_id: Option<&'a EntityId>,
    /// The subject being priced.
    pub subject_id: Option<&'a EntityId>,
    /// The standard being priced.
    pub standard_id: Option<&'a EntityId>,
}

impl<'a> RateQuery<'a> {
    /// Creates a query with every dimension present.
    #[must_use]
    pub const fn new(
        center_id: &'a EntityId,
        subject_id: &'a EntityId,
        standard_id: &'a EntityId,
    ) -> Self {
        Self {
            center_id: Some(center_id),
            subject_id: Some(subject_id),
            standard_id: Some(standard_id),
        }
    }
}

/// The rule that priced a query, and the tier it was found in.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RateMatch<'r> {
    /// The winning rule.
    pub rule: &'r RateRule,
    /// The tier the rule was matched at.
    pub tier: SpecificityTier,
}

/// Finds the rule that prices `query`.
///
/// Returns `None` when no rule in any tier matches.
#[must_use]
pub fn resolve_rule<'r>(rules: &'r [RateRule], query: &RateQuery<'_>) -> Option<RateMatch<'r>> {
    SpecificityTier::ORDER.iter().find_map(|tier| {
        rules
            .iter()
            .find(|rule| tier.matches(rule, query))
            .map(|rule| RateMatch { rule, tier: *tier })
    })
}

/// Resolves the hourly rate for `query`.
///
/// This is total: when no rule matches the rate is `0.0`.
#[must_use]
pub fn resolve_rate(rules: &[RateRule], query: &RateQuery<'_>) -> f64 {
    resolve_rule(rules, query).map_or(0.0, |m| m.rule.rate_per_hour)
}
