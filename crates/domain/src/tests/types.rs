// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{
    CatalogKind, DomainError, EntityId, RateRule, RateScope, Session, SessionStatus, Settings,
    Theme,
};
use time::macros::date;

#[test]
fn test_entity_id_blank_detection() {
    assert!(EntityId::new("").is_blank());
    assert!(EntityId::new("   ").is_blank());
    assert!(!EntityId::new("c1").is_blank());
}

#[test]
fn test_session_status_parsing() {
    assert_eq!(
        "completed".parse::<SessionStatus>().unwrap(),
        SessionStatus::Completed
    );
    assert_eq!(
        "Scheduled".parse::<SessionStatus>().unwrap(),
        SessionStatus::Scheduled
    );
    assert_eq!(
        "canceled".parse::<SessionStatus>().unwrap(),
        SessionStatus::Cancelled
    );
    assert!(matches!(
        "done".parse::<SessionStatus>(),
        Err(DomainError::InvalidStatus(_))
    ));
}

#[test]
fn test_only_completed_sessions_are_billable() {
    assert!(SessionStatus::Completed.is_billable());
    assert!(!SessionStatus::Scheduled.is_billable());
    assert!(!SessionStatus::Cancelled.is_billable());
}

#[test]
fn test_theme_toggle_and_parse() {
    assert_eq!(Theme::Light.toggled(), Theme::Dark);
    assert_eq!(Theme::Dark.toggled(), Theme::Light);
    assert_eq!("DARK".parse::<Theme>().unwrap(), Theme::Dark);
    assert!("blue".parse::<Theme>().is_err());
}

#[test]
fn test_catalog_kind_accepts_singular_and_plural() {
    assert_eq!("center".parse::<CatalogKind>().unwrap(), CatalogKind::Center);
    assert_eq!(
        "Subjects".parse::<CatalogKind>().unwrap(),
        CatalogKind::Subject
    );
    assert_eq!(
        "standard".parse::<CatalogKind>().unwrap(),
        CatalogKind::Standard
    );
    assert!("room".parse::<CatalogKind>().is_err());
}

#[test]
fn test_default_settings() {
    let settings: Settings = Settings::default();
    assert_eq!(settings.tutor_name, "Tutor");
    assert_eq!(settings.theme, Theme::Light);
}

#[test]
fn test_settings_fill_missing_fields_from_defaults() {
    let settings: Settings = serde_json::from_str(r#"{"theme":"dark"}"#).unwrap();
    assert_eq!(settings.tutor_name, "Tutor");
    assert_eq!(settings.theme, Theme::Dark);
}

#[test]
fn test_rate_rule_serializes_wildcards_as_null() {
    let rule: RateRule = RateRule::new(
        EntityId::new("r1"),
        RateScope::new(None, Some(EntityId::new("math")), None),
        450.0,
    );

    let json: serde_json::Value = serde_json::to_value(&rule).unwrap();

    assert_eq!(json["id"], "r1");
    assert!(json["centerId"].is_null());
    assert_eq!(json["subjectId"], "math");
    assert!(json["standardId"].is_null());
    assert_eq!(json["ratePerHour"], 450.0);
}

#[test]
fn test_rate_rule_reads_blank_and_missing_scope_as_wildcard() {
    let rule: RateRule = serde_json::from_str(
        r#"{"id":"r1","centerId":"","subjectId":"math","ratePerHour":300}"#,
    )
    .unwrap();

    assert_eq!(rule.center_id, None);
    assert_eq!(rule.subject_id, Some(EntityId::new("math")));
    assert_eq!(rule.standard_id, None);
    assert!(rule.has_scope(&RateScope::new(None, Some(EntityId::new("math")), None)));
}

#[test]
fn test_global_default_scope() {
    assert!(RateScope::any().is_global_default());
    assert!(!RateScope::new(Some(EntityId::new("c")), None, None).is_global_default());
}

#[test]
fn test_session_json_shape() {
    let session: Session = Session {
        id: EntityId::new("s1"),
        date: date!(2026 - 03 - 05),
        center_id: EntityId::new("c1"),
        subject_id: EntityId::new("m1"),
        standard_id: EntityId::new("t1"),
        duration: 1.5,
        status: SessionStatus::Scheduled,
        rate: 400.0,
        amount: 600.0,
    };

    let json: serde_json::Value = serde_json::to_value(&session).unwrap();

    assert_eq!(json["date"], "2026-03-05");
    assert_eq!(json["centerId"], "c1");
    assert_eq!(json["status"], "scheduled");
    assert_eq!(json["amount"], 600.0);

    let parsed: Session = serde_json::from_value(json).unwrap();
    assert_eq!(parsed, session);
}

#[test]
fn test_session_date_range_is_inclusive() {
    let session: Session = serde_json::from_str(
        r#"{"id":"s1","date":"2026-03-31","centerId":"c","subjectId":"s","standardId":"t","duration":1,"status":"completed","rate":100,"amount":100}"#,
    )
    .unwrap();

    assert!(session.falls_within(date!(2026 - 03 - 01), date!(2026 - 03 - 31)));
    assert!(session.falls_within(date!(2026 - 03 - 31), date!(2026 - 03 - 31)));
    assert!(!session.falls_within(date!(2026 - 04 - 01), date!(2026 - 04 - 30)));
}
