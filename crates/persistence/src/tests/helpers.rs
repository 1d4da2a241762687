// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use std::path::PathBuf;
use std::sync::atomic::{AtomicU64, Ordering};
use time::{Date, Month};
use tutor_billing::State;
use tutor_billing_domain::{
    CatalogEntry, EntityId, RateRule, RateScope, Session, SessionStatus, Theme,
};

static FILE_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Returns a database path in the temp directory that no other test uses.
pub fn create_test_db_path() -> PathBuf {
    let n: u64 = FILE_COUNTER.fetch_add(1, Ordering::SeqCst);
    std::env::temp_dir().join(format!(
        "tutor_billing_test_{}_{n}.sqlite3",
        std::process::id()
    ))
}

/// Removes a test database together with its WAL side files.
pub fn remove_test_db(path: &PathBuf) {
    for suffix in ["", "-wal", "-shm"] {
        let mut name = path.clone().into_os_string();
        name.push(suffix);
        let _ = std::fs::remove_file(PathBuf::from(name));
    }
}

/// A small aggregate with one entry per catalog, two rules and a session.
pub fn create_test_state() -> State {
    let mut state: State = State::new();
    state.settings.tutor_name = String::from("Asha");
    state.settings.theme = Theme::Dark;
    state.centers = vec![CatalogEntry::new(EntityId::new("c1"), "North Center")];
    state.subjects = vec![CatalogEntry::new(EntityId::new("s1"), "Math")];
    state.standards = vec![CatalogEntry::new(EntityId::new("st1"), "10")];
    state.rate_rules = vec![
        RateRule::new(
            EntityId::new("r1"),
            RateScope::new(None, Some(EntityId::new("s1")), Some(EntityId::new("st1"))),
            500.0,
        ),
        RateRule::new(EntityId::new("r2"), RateScope::any(), 300.0),
    ];
    state.sessions = vec![Session {
        id: EntityId::new("x1"),
        date: Date::from_calendar_date(2024, Month::March, 5).unwrap(),
        center_id: EntityId::new("c1"),
        subject_id: EntityId::new("s1"),
        standard_id: EntityId::new("st1"),
        duration: 2.0,
        status: SessionStatus::Completed,
        rate: 500.0,
        amount: 1000.0,
    }];
    state
}
