// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for the API layer.

use thiserror::Error;
use tutor_billing::CoreError;
use tutor_billing_domain::DomainError;
use tutor_billing_persistence::PersistenceError;

/// API-level errors.
///
/// These are distinct from domain/core errors and represent the API contract.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// Invalid input was provided.
    #[error("Invalid input for field '{field}': {message}")]
    InvalidInput {
        /// The field that was invalid.
        field: String,
        /// A human-readable description of the error.
        message: String,
    },
    /// A requested resource was not found.
    #[error("{resource_type} not found: {message}")]
    ResourceNotFound {
        /// The type of resource that was not found.
        resource_type: String,
        /// A human-readable description of what was not found.
        message: String,
    },
    /// A backup document could not be restored.
    #[error("Invalid backup: {message}")]
    InvalidBackup {
        /// Why the document was rejected.
        message: String,
    },
    /// Rendering an export failed.
    #[error("Export failed: {message}")]
    Export {
        /// A description of the failure.
        message: String,
    },
    /// The store could not be read or written.
    #[error(transparent)]
    Persistence(#[from] PersistenceError),
}

/// Translates a domain error into an API error.
///
/// This translation is explicit and ensures domain errors are not leaked directly.
#[must_use]
pub fn translate_domain_error(err: DomainError) -> ApiError {
    match err {
        DomainError::InvalidName { kind, reason } => ApiError::InvalidInput {
            field: String::from("name"),
            message: format!("Invalid {kind} name: {reason}"),
        },
        DomainError::InvalidRate(msg) => ApiError::InvalidInput {
            field: String::from("rate_per_hour"),
            message: msg,
        },
        DomainError::InvalidDuration(msg) => ApiError::InvalidInput {
            field: String::from("duration"),
            message: msg,
        },
        DomainError::MissingReference(kind) => ApiError::InvalidInput {
            field: format!("{kind}_id"),
            message: format!("A {kind} must be selected"),
        },
        DomainError::DateParseError { date_string, error } => ApiError::InvalidInput {
            field: String::from("date"),
            message: format!("Failed to parse date '{date_string}': {error}"),
        },
        DomainError::InvalidStatus(value) => ApiError::InvalidInput {
            field: String::from("status"),
            message: format!("Unknown session status '{value}'"),
        },
        DomainError::InvalidTheme(value) => ApiError::InvalidInput {
            field: String::from("theme"),
            message: format!("Unknown theme '{value}'"),
        },
        DomainError::InvalidCatalogKind(value) => ApiError::InvalidInput {
            field: String::from("catalog"),
            message: format!("Unknown catalog '{value}'"),
        },
        DomainError::RateRuleNotFound(id) => ApiError::ResourceNotFound {
            resource_type: String::from("Rate rule"),
            message: format!("Rate rule '{id}' does not exist"),
        },
        DomainError::SessionNotFound(id) => ApiError::ResourceNotFound {
            resource_type: String::from("Session"),
            message: format!("Session '{id}' does not exist"),
        },
    }
}

/// Translates a core error into an API error.
///
/// This translation is explicit and ensures core errors are not leaked directly.
#[must_use]
pub fn translate_core_error(err: CoreError) -> ApiError {
    match err {
        CoreError::DomainViolation(domain_err) => translate_domain_error(domain_err),
    }
}
