// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use crate::types::{CatalogKind, EntityId};
use time::Date;
use time::format_description::BorrowedFormatItem;

/// The `YYYY-MM-DD` form used for every session date.
pub const ISO_DATE_FORMAT: &[BorrowedFormatItem<'static>] =
    time::macros::format_description!("[year]-[month]-[day]");

/// Validates a catalog entry name and returns it trimmed.
///
/// # Arguments
///
/// * `kind` - The catalog the name is destined for
/// * `name` - The raw name
///
/// # Errors
///
/// Returns an error if the name is empty after trimming.
pub fn validate_catalog_name(kind: CatalogKind, name: &str) -> Result<String, DomainError> {
    let trimmed: &str = name.trim();
    if trimmed.is_empty() {
        return Err(DomainError::InvalidName {
            kind,
            reason: String::from("Name cannot be empty"),
        });
    }
    Ok(trimmed.to_string())
}

/// Validates an hourly rate.
///
/// # Errors
///
/// Returns an error if the rate is not a finite number greater than zero.
pub fn validate_rate_per_hour(rate_per_hour: f64) -> Result<(), DomainError> {
    if !rate_per_hour.is_finite() || rate_per_hour <= 0.0 {
        return Err(DomainError::InvalidRate(format!(
            "Rate per hour must be a positive number, got {rate_per_hour}"
        )));
    }
    Ok(())
}

/// Validates a session duration in hours.
///
/// # Errors
///
/// Returns an error if the duration is not a finite number greater than zero.
pub fn validate_duration(duration: f64) -> Result<(), DomainError> {
    if !duration.is_finite() || duration <= 0.0 {
        return Err(DomainError::InvalidDuration(format!(
            "Duration must be a positive number of hours, got {duration}"
        )));
    }
    Ok(())
}

/// Validates that a required catalog reference is present.
///
/// Presence is all that is checked: a reference to a deleted entry is
/// still accepted.
///
/// # Errors
///
/// Returns an error if the reference is blank.
pub fn validate_reference(kind: CatalogKind, id: &EntityId) -> Result<(), DomainError> {
    if id.is_blank() {
        return Err(DomainError::MissingReference(kind));
    }
    Ok(())
}

/// Parses a `YYYY-MM-DD` date.
///
/// # Errors
///
/// Returns an error if the string is not a valid calendar date.
pub fn parse_iso_date(value: &str) -> Result<Date, DomainError> {
    Date::parse(value.trim(), ISO_DATE_FORMAT).map_err(|e| DomainError::DateParseError {
        date_string: value.to_string(),
        error: e.to_string(),
    })
}

/// Parses a numeric form field such as a rate or a duration.
///
/// Returns `None` for blank or non-numeric input.
#[must_use]
pub fn parse_number(value: &str) -> Option<f64> {
    value.trim().parse::<f64>().ok().filter(|n| n.is_finite())
}
