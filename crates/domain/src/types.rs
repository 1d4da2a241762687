// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use serde::{Deserialize, Deserializer, Serialize};
use std::str::FromStr;
use time::Date;

time::serde::format_description!(iso_date, Date, "[year]-[month]-[day]");

/// An opaque, client-generated identifier.
///
/// Identifiers are never allocated centrally and are only ever compared for
/// equality. A reference held by one entity may point at an entry that no
/// longer exists; lookups must tolerate that.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntityId(String);

impl EntityId {
    /// Creates a new `EntityId` from any string-like value.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Returns the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns whether the identifier is blank.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl std::fmt::Display for EntityId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(&self.0)
    }
}

impl From<&str> for EntityId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for EntityId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// The three reference catalogs a tutor maintains.
///
/// Centers, subjects and standards are structurally identical; the kind
/// only decides which list of the aggregate an entry lives in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CatalogKind {
    /// A teaching center.
    Center,
    /// A subject taught.
    Subject,
    /// A grade standard.
    Standard,
}

impl CatalogKind {
    /// Returns the singular lowercase label of this kind.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Center => "center",
            Self::Subject => "subject",
            Self::Standard => "standard",
        }
    }

    /// Returns the column title used in tables and exports.
    #[must_use]
    pub const fn title(&self) -> &'static str {
        match self {
            Self::Center => "Center",
            Self::Subject => "Subject",
            Self::Standard => "Standard",
        }
    }
}

impl std::fmt::Display for CatalogKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for CatalogKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "center" | "centers" => Ok(Self::Center),
            "subject" | "subjects" => Ok(Self::Subject),
            "standard" | "standards" => Ok(Self::Standard),
            _ => Err(DomainError::InvalidCatalogKind(s.to_string())),
        }
    }
}

/// A named entry in one of the reference catalogs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogEntry {
    /// The entry's identifier.
    pub id: EntityId,
    /// The display name. Not required to be unique.
    pub name: String,
}

impl CatalogEntry {
    /// Creates a new `CatalogEntry`.
    #[must_use]
    pub fn new(id: EntityId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

/// Reads an optional scope reference, treating a blank string as a wildcard.
///
/// Older snapshots stored an unselected scope as `""` rather than `null`.
fn wildcard_reference<'de, D>(deserializer: D) -> Result<Option<EntityId>, D::Error>
where
    D: Deserializer<'de>,
{
    let value: Option<String> = Option::deserialize(deserializer)?;
    Ok(value.filter(|v| !v.trim().is_empty()).map(EntityId::from))
}

/// The (center, subject, standard) scope of a rate rule.
///
/// `None` in a dimension is a wildcard that applies to any value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RateScope {
    /// The center this scope is pinned to, if any.
    #[serde(default, deserialize_with = "wildcard_reference")]
    pub center_id: Option<EntityId>,
    /// The subject this scope is pinned to, if any.
    #[serde(default, deserialize_with = "wildcard_reference")]
    pub subject_id: Option<EntityId>,
    /// The standard this scope is pinned to, if any.
    #[serde(default, deserialize_with = "wildcard_reference")]
    pub standard_id: Option<EntityId>,
}

impl RateScope {
    /// Creates a scope from three optional references.
    #[must_use]
    pub const fn new(
        center_id: Option<EntityId>,
        subject_id: Option<EntityId>,
        standard_id: Option<EntityId>,
    ) -> Self {
        Self {
            center_id,
            subject_id,
            standard_id,
        }
    }

    /// The all-wildcard scope (the global default rule).
    #[must_use]
    pub const fn any() -> Self {
        Self {
            center_id: None,
            subject_id: None,
            standard_id: None,
        }
    }

    /// Returns whether every dimension is a wildcard.
    #[must_use]
    pub const fn is_global_default(&self) -> bool {
        self.center_id.is_none() && self.subject_id.is_none() && self.standard_id.is_none()
    }

    /// Returns the reference held for a catalog dimension.
    #[must_use]
    pub const fn reference(&self, kind: CatalogKind) -> Option<&EntityId> {
        match kind {
            CatalogKind::Center => self.center_id.as_ref(),
            CatalogKind::Subject => self.subject_id.as_ref(),
            CatalogKind::Standard => self.standard_id.as_ref(),
        }
    }
}

/// A rate resolution rule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RateRule {
    /// The rule's identifier.
    pub id: EntityId,
    /// Center scope (`None` = any center).
    #[serde(default, deserialize_with = "wildcard_reference")]
    pub center_id: Option<EntityId>,
    /// Subject scope (`None` = any subject).
    #[serde(default, deserialize_with = "wildcard_reference")]
    pub subject_id: Option<EntityId>,
    /// Standard scope (`None` = any standard).
    #[serde(default, deserialize_with = "wildcard_reference")]
    pub standard_id: Option<EntityId>,
    /// The hourly rate this rule yields. Always positive.
    pub rate_per_hour: f64,
}

impl RateRule {
    /// Creates a new rule for a scope.
    #[must_use]
    pub fn new(id: EntityId, scope: RateScope, rate_per_hour: f64) -> Self {
        Self {
            id,
            center_id: scope.center_id,
            subject_id: scope.subject_id,
            standard_id: scope.standard_id,
            rate_per_hour,
        }
    }

    /// Returns a copy of this rule's scope.
    #[must_use]
    pub fn scope(&self) -> RateScope {
        RateScope::new(
            self.center_id.clone(),
            self.subject_id.clone(),
            self.standard_id.clone(),
        )
    }

    /// Returns whether this rule is scoped exactly like `scope`.
    #[must_use]
    pub fn has_scope(&self, scope: &RateScope) -> bool {
        self.center_id == scope.center_id
            && self.subject_id == scope.subject_id
            && self.standard_id == scope.standard_id
    }

    /// Overwrites the scope of this rule.
    pub fn set_scope(&mut self, scope: RateScope) {
        self.center_id = scope.center_id;
        self.subject_id = scope.subject_id;
        self.standard_id = scope.standard_id;
    }
}

/// The lifecycle status of a tutoring session.
///
/// Status is independent of pricing: every session carries a rate and an
/// amount, but only completed sessions count toward earnings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SessionStatus {
    /// The session took place.
    #[default]
    Completed,
    /// The session is planned.
    Scheduled,
    /// The session was called off.
    Cancelled,
}

impl SessionStatus {
    /// Returns the lowercase string form used in snapshots.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Completed => "completed",
            Self::Scheduled => "scheduled",
            Self::Cancelled => "cancelled",
        }
    }

    /// Returns whether sessions with this status count toward earnings.
    #[must_use]
    pub const fn is_billable(&self) -> bool {
        matches!(self, Self::Completed)
    }
}

impl std::fmt::Display for SessionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for SessionStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "completed" => Ok(Self::Completed),
            "scheduled" => Ok(Self::Scheduled),
            "cancelled" | "canceled" => Ok(Self::Cancelled),
            _ => Err(DomainError::InvalidStatus(s.to_string())),
        }
    }
}

/// A logged tutoring session.
///
/// `rate` and `amount` are a frozen snapshot taken when the session was
/// logged or last revised. They are never recomputed from the current rule
/// table on read.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    /// The session's identifier.
    pub id: EntityId,
    /// The calendar date of the session.
    #[serde(with = "iso_date")]
    pub date: Date,
    /// The center the session was taught at.
    pub center_id: EntityId,
    /// The subject taught.
    pub subject_id: EntityId,
    /// The grade standard taught.
    pub standard_id: EntityId,
    /// Length of the session in hours.
    pub duration: f64,
    /// Lifecycle status.
    #[serde(default)]
    pub status: SessionStatus,
    /// Hourly rate resolved at write time.
    #[serde(default)]
    pub rate: f64,
    /// `rate * duration` at write time.
    #[serde(default)]
    pub amount: f64,
}

impl Session {
    /// Returns whether this session counts toward earnings.
    #[must_use]
    pub const fn is_billable(&self) -> bool {
        self.status.is_billable()
    }

    /// Returns whether the session falls within `[start, end]` (inclusive).
    #[must_use]
    pub fn falls_within(&self, start: Date, end: Date) -> bool {
        self.date >= start && self.date <= end
    }
}

/// The UI theme preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    /// Light theme.
    #[default]
    Light,
    /// Dark theme.
    Dark,
}

impl Theme {
    /// Returns the other theme.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Returns the lowercase string form used in snapshots.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }
}

impl std::fmt::Display for Theme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            _ => Err(DomainError::InvalidTheme(s.to_string())),
        }
    }
}

/// Process-wide user preferences.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Settings {
    /// The tutor's name as printed on statements.
    pub tutor_name: String,
    /// The theme preference.
    pub theme: Theme,
}

impl Settings {
    /// The tutor name used before one is configured.
    pub const DEFAULT_TUTOR_NAME: &'static str = "Tutor";
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            tutor_name: String::from(Self::DEFAULT_TUTOR_NAME),
            theme: Theme::Light,
        }
    }
}
