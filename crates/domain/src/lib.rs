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
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod error;
mod lookup;
mod rate_resolution;
mod types;
mod validation;

#[cfg(test)]
mod tests;

pub use error::DomainError;
pub use lookup::{
    MISSING_PLACEHOLDER, WILDCARD_LABEL, display_name, find_entry, name_or, scope_label,
};
pub use rate_resolution::{RateMatch, RateQuery, SpecificityTier, resolve_rate, resolve_rule};
pub use types::{
    CatalogEntry, CatalogKind, EntityId, RateRule, RateScope, Session, SessionStatus, Settings,
    Theme,
};
pub use validation::{
    ISO_DATE_FORMAT, parse_iso_date, parse_number, validate_catalog_name, validate_duration,
    validate_rate_per_hour, validate_reference,
};
