// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::types::CatalogKind;

/// Errors that can occur during domain validation.
#[derive(Debug, Clone, PartialEq)]
pub enum DomainError {
    /// A catalog entry name is empty or invalid.
    InvalidName {
        /// The catalog the entry belongs to.
        kind: CatalogKind,
        /// Why the name was rejected.
        reason: String,
    },
    /// A rate is missing, non-numeric, or not positive.
    InvalidRate(String),
    /// A session duration is missing, non-numeric, or not positive.
    InvalidDuration(String),
    /// A required catalog reference is blank.
    MissingReference(CatalogKind),
    /// A date could not be parsed.
    DateParseError {
        /// The invalid date string.
        date_string: String,
        /// The parsing error message.
        error: String,
    },
    /// A session status string is not recognized.
    InvalidStatus(String),
    /// A theme string is not recognized.
    InvalidTheme(String),
    /// A catalog kind string is not recognized.
    InvalidCatalogKind(String),
    /// The referenced rate rule does not exist.
    RateRuleNotFound(String),
    /// The referenced session does not exist.
    SessionNotFound(String),
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidName { kind, reason } => {
                write!(f, "Invalid {kind} name: {reason}")
            }
            Self::InvalidRate(msg) => write!(f, "Invalid rate: {msg}"),
            Self::InvalidDuration(msg) => write!(f, "Invalid duration: {msg}"),
            Self::MissingReference(kind) => write!(f, "A {kind} must be selected"),
            Self::DateParseError { date_string, error } => {
                write!(f, "Failed to parse date '{date_string}': {error}")
            }
            Self::InvalidStatus(value) => write!(
                f,
                "Invalid session status '{value}' (must be completed, scheduled, or cancelled)"
            ),
            Self::InvalidTheme(value) => {
                write!(f, "Invalid theme '{value}' (must be light or dark)")
            }
            Self::InvalidCatalogKind(value) => write!(
                f,
                "Invalid catalog '{value}' (must be center, subject, or standard)"
            ),
            Self::RateRuleNotFound(id) => write!(f, "Rate rule '{id}' not found"),
            Self::SessionNotFound(id) => write!(f, "Session '{id}' not found"),
        }
    }
}

impl std::error::Error for DomainError {}
