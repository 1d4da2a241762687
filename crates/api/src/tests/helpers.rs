// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Test helper functions and fixtures.

use time::Date;
use tutor_billing::SequentialIdGenerator;
use tutor_billing_domain::{CatalogKind, EntityId, parse_iso_date};
use tutor_billing_persistence::{KeyValueStore, PersistenceError, SqliteStore};

use crate::{
    BillingStore, RateRuleRequest, SessionRequest, SessionRow, add_catalog_entry, log_session,
    save_rate_rule,
};

pub type TestStore = BillingStore<SqliteStore, SequentialIdGenerator>;

/// Ids of the catalog entries created by `create_seeded_store`.
pub struct Seeded {
    pub north: EntityId,
    pub south: EntityId,
    pub math: EntityId,
    pub science: EntityId,
    pub ten: EntityId,
}

/// A store whose reads find nothing and whose writes always fail.
pub struct FailingStore;

impl KeyValueStore for FailingStore {
    fn get(&mut self, _key: &str) -> Result<Option<Vec<u8>>, PersistenceError> {
        Ok(None)
    }

    fn set(&mut self, _key: &str, _value: &[u8]) -> Result<(), PersistenceError> {
        Err(PersistenceError::Unavailable(String::from("disk full")))
    }
}

pub fn create_test_store() -> TestStore {
    BillingStore::open_with_ids(
        SqliteStore::new_in_memory().unwrap(),
        SequentialIdGenerator::new("id"),
    )
    .unwrap()
}

/// A store with two centers, two subjects and one standard.
pub fn create_seeded_store() -> (TestStore, Seeded) {
    let mut store: TestStore = create_test_store();
    let mut add = |kind: CatalogKind, name: &str| -> EntityId {
        add_catalog_entry(&mut store, kind, name)
            .unwrap()
            .response
            .id
    };

    let seeded: Seeded = Seeded {
        north: add(CatalogKind::Center, "North Center"),
        south: add(CatalogKind::Center, "South Center"),
        math: add(CatalogKind::Subject, "Math"),
        science: add(CatalogKind::Subject, "Science"),
        ten: add(CatalogKind::Standard, "10"),
    };
    (store, seeded)
}

pub fn create_test_date(value: &str) -> Date {
    parse_iso_date(value).unwrap()
}

pub fn session_request(
    date: &str,
    center: &EntityId,
    subject: &EntityId,
    standard: &EntityId,
    duration: &str,
    status: Option<&str>,
) -> SessionRequest {
    SessionRequest {
        date: date.to_string(),
        center_id: center.to_string(),
        subject_id: subject.to_string(),
        standard_id: standard.to_string(),
        duration: duration.to_string(),
        status: status.map(str::to_string),
    }
}

pub fn rate_request(
    center: Option<&EntityId>,
    subject: Option<&EntityId>,
    standard: Option<&EntityId>,
    rate: &str,
) -> RateRuleRequest {
    RateRuleRequest {
        center_id: center.map(EntityId::to_string),
        subject_id: subject.map(EntityId::to_string),
        standard_id: standard.map(EntityId::to_string),
        rate_per_hour: rate.to_string(),
    }
}

/// Adds the rules `[{Math, 10} = 500, {} = 300]`.
pub fn add_standard_rules(store: &mut TestStore, seeded: &Seeded) {
    save_rate_rule(
        store,
        None,
        &rate_request(None, Some(&seeded.math), Some(&seeded.ten), "500"),
    )
    .unwrap();
    save_rate_rule(store, None, &rate_request(None, None, None, "300")).unwrap();
}

/// Logs a session and returns its row.
pub fn log(store: &mut TestStore, request: &SessionRequest) -> SessionRow {
    log_session(store, request).unwrap().response
}
