// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]

/// Represents the specific action performed.
///
/// An action describes what state change occurred.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Action {
    /// The name of the action (e.g., "`LogSession`", "`AddRateRule`").
    pub name: String,
    /// Optional additional details about the action.
    pub details: Option<String>,
}

impl Action {
    /// Creates a new Action.
    ///
    /// # Arguments
    ///
    /// * `name` - The name of the action
    /// * `details` - Optional additional details
    #[must_use]
    pub fn new(name: &str, details: Option<String>) -> Self {
        Self {
            name: name.to_string(),
            details,
        }
    }
}

/// Collection sizes of the aggregate at a point in time.
///
/// This is a summary, not a copy of the aggregate; the aggregate itself is
/// the unit of persistence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StateSnapshot {
    /// Number of centers.
    pub centers: usize,
    /// Number of subjects.
    pub subjects: usize,
    /// Number of standards.
    pub standards: usize,
    /// Number of rate rules.
    pub rate_rules: usize,
    /// Number of sessions.
    pub sessions: usize,
}

impl std::fmt::Display for StateSnapshot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "centers={},subjects={},standards={},rate_rules={},sessions={}",
            self.centers, self.subjects, self.standards, self.rate_rules, self.sessions
        )
    }
}

/// An immutable record of one applied state transition.
///
/// Every successful transition produces exactly one event, capturing:
/// - What action was performed (action)
/// - The aggregate summary before the transition (before)
/// - The aggregate summary after the transition (after)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransitionEvent {
    /// The action that was performed.
    pub action: Action,
    /// The state before the transition.
    pub before: StateSnapshot,
    /// The state after the transition.
    pub after: StateSnapshot,
}

impl TransitionEvent {
    /// Creates a new `TransitionEvent`.
    #[must_use]
    pub const fn new(action: Action, before: StateSnapshot, after: StateSnapshot) -> Self {
        Self {
            action,
            before,
            after,
        }
    }

    /// Returns whether the transition left every collection the same size.
    ///
    /// Edits and merges report `true` here even though content changed.
    #[must_use]
    pub fn is_size_preserving(&self) -> bool {
        self.before == self.after
    }
}

impl std::fmt::Display for TransitionEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.action.details {
            Some(details) => write!(f, "{}: {details}", self.action.name),
            None => f.write_str(&self.action.name),
        }
    }
}
