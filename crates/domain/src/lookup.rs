// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Resolve-or-placeholder lookups for catalog references.
//!
//! References are weak: an id may outlive the entry it pointed to. None of
//! these helpers fail on a dangling id.

use crate::types::{CatalogEntry, EntityId};

/// Placeholder shown for a session reference that no longer resolves.
pub const MISSING_PLACEHOLDER: &str = "—";

/// Label shown for a wildcard or dangling rate rule scope.
pub const WILDCARD_LABEL: &str = "Any";

/// Finds a catalog entry by id.
#[must_use]
pub fn find_entry<'a>(entries: &'a [CatalogEntry], id: &EntityId) -> Option<&'a CatalogEntry> {
    entries.iter().find(|entry| &entry.id == id)
}

/// Returns the name of the entry with `id`, or `placeholder` if there is none.
#[must_use]
pub fn name_or<'a>(entries: &'a [CatalogEntry], id: &EntityId, placeholder: &'a str) -> &'a str {
    find_entry(entries, id).map_or(placeholder, |entry| entry.name.as_str())
}

/// Returns the display name for a session reference.
#[must_use]
pub fn display_name<'a>(entries: &'a [CatalogEntry], id: &EntityId) -> &'a str {
    name_or(entries, id, MISSING_PLACEHOLDER)
}

/// Returns the display name for a rate rule scope dimension.
///
/// Wildcards and dangling references both read as "Any".
#[must_use]
pub fn scope_label<'a>(entries: &'a [CatalogEntry], id: Option<&EntityId>) -> &'a str {
    id.map_or(WILDCARD_LABEL, |id| name_or(entries, id, WILDCARD_LABEL))
}
