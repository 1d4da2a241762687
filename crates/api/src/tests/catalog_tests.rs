// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use tutor_billing_domain::{CatalogEntry, CatalogKind};

use crate::tests::helpers::{
    TestStore, create_seeded_store, create_test_store, log, session_request,
};
use crate::{
    ApiError, ApiResult, DeleteResponse, add_catalog_entry, delete_catalog_entry, list_catalog,
    list_sessions,
};

#[test]
fn test_add_catalog_entry_returns_created_entry() {
    let mut store: TestStore = create_test_store();

    let result: ApiResult<CatalogEntry> =
        add_catalog_entry(&mut store, CatalogKind::Center, "  Sunrise Academy ").unwrap();

    assert_eq!(result.response.name, "Sunrise Academy");
    assert_eq!(result.response.id.as_str(), "id-1");
    assert_eq!(result.event.action.name, "AddCatalogEntry");
    assert_eq!(list_catalog(store.state(), CatalogKind::Center).len(), 1);
}

#[test]
fn test_blank_name_is_rejected_as_invalid_input() {
    let mut store: TestStore = create_test_store();

    let result: Result<ApiResult<CatalogEntry>, ApiError> =
        add_catalog_entry(&mut store, CatalogKind::Subject, "   ");

    assert!(matches!(
        result,
        Err(ApiError::InvalidInput { ref field, .. }) if field == "name"
    ));
    assert!(store.state().subjects.is_empty());
}

#[test]
fn test_catalogs_are_independent() {
    let (store, _seeded) = create_seeded_store();

    assert_eq!(list_catalog(store.state(), CatalogKind::Center).len(), 2);
    assert_eq!(list_catalog(store.state(), CatalogKind::Subject).len(), 2);
    assert_eq!(list_catalog(store.state(), CatalogKind::Standard).len(), 1);
}

#[test]
fn test_deleted_center_shows_placeholder_in_session_list() {
    let (mut store, seeded) = create_seeded_store();
    log(
        &mut store,
        &session_request("2024-03-05", &seeded.north, &seeded.math, &seeded.ten, "1", None),
    );

    let result: ApiResult<DeleteResponse> =
        delete_catalog_entry(&mut store, CatalogKind::Center, seeded.north.as_str()).unwrap();

    assert!(result.response.removed);
    let rows = list_sessions(store.state(), None);
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].center, "—");
    assert_eq!(rows[0].center_id, seeded.north);
    assert_eq!(rows[0].subject, "Math");
}

#[test]
fn test_deleting_unknown_entry_reports_nothing_removed() {
    let (mut store, _seeded) = create_seeded_store();

    let result: ApiResult<DeleteResponse> =
        delete_catalog_entry(&mut store, CatalogKind::Standard, "missing").unwrap();

    assert!(!result.response.removed);
    assert_eq!(store.state().standards.len(), 1);
}
