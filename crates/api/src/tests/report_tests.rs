// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use time::Date;
use tutor_billing_domain::CatalogKind;

use crate::tests::helpers::{
    Seeded, TestStore, add_standard_rules, create_seeded_store, create_test_date, log,
    session_request,
};
use crate::{
    ALL_CENTERS_LABEL, Report, ReportGroup, ReportQuery, build_report, delete_catalog_entry,
};

/// Three completed March sessions plus noise that no report should count.
pub fn create_march_ledger() -> (TestStore, Seeded) {
    let (mut store, seeded) = create_seeded_store();
    add_standard_rules(&mut store, &seeded);

    log(
        &mut store,
        &session_request("2024-03-05", &seeded.north, &seeded.math, &seeded.ten, "2", None),
    );
    log(
        &mut store,
        &session_request("2024-03-03", &seeded.south, &seeded.science, &seeded.ten, "1", None),
    );
    log(
        &mut store,
        &session_request(
            "2024-03-10",
            &seeded.north,
            &seeded.science,
            &seeded.ten,
            "1.5",
            None,
        ),
    );
    log(
        &mut store,
        &session_request(
            "2024-03-12",
            &seeded.north,
            &seeded.math,
            &seeded.ten,
            "1",
            Some("scheduled"),
        ),
    );
    log(
        &mut store,
        &session_request(
            "2024-03-14",
            &seeded.south,
            &seeded.math,
            &seeded.ten,
            "1",
            Some("cancelled"),
        ),
    );
    log(
        &mut store,
        &session_request("2024-04-01", &seeded.north, &seeded.math, &seeded.ten, "1", None),
    );

    (store, seeded)
}

pub fn march() -> ReportQuery {
    ReportQuery::new(
        create_test_date("2024-03-01"),
        create_test_date("2024-03-31"),
        None,
    )
}

fn group_summary(groups: &[ReportGroup]) -> Vec<(&str, usize, f64, f64)> {
    groups
        .iter()
        .map(|group| (group.name.as_str(), group.sessions, group.hours, group.amount))
        .collect()
}

#[test]
fn test_report_counts_only_completed_sessions_in_range() {
    let (store, _seeded) = create_march_ledger();

    let report: Report = build_report(store.state(), &march());

    assert_eq!(report.session_count(), 3);
    assert_eq!(report.total_hours, 4.5);
    assert_eq!(report.total_amount, 1750.0);
    assert_eq!(report.center_label, ALL_CENTERS_LABEL);
}

#[test]
fn test_report_rows_are_oldest_first() {
    let (store, _seeded) = create_march_ledger();

    let report: Report = build_report(store.state(), &march());

    let dates: Vec<Date> = report.rows.iter().map(|row| row.date).collect();
    assert_eq!(
        dates,
        vec![
            create_test_date("2024-03-03"),
            create_test_date("2024-03-05"),
            create_test_date("2024-03-10"),
        ]
    );
}

#[test]
fn test_groups_follow_first_appearance() {
    let (store, _seeded) = create_march_ledger();

    let report: Report = build_report(store.state(), &march());

    assert_eq!(
        group_summary(&report.by_center),
        vec![("South Center", 1, 1.0, 300.0), ("North Center", 2, 3.5, 1450.0)]
    );
    assert_eq!(
        group_summary(&report.by_subject),
        vec![("Science", 2, 2.5, 750.0), ("Math", 1, 2.0, 1000.0)]
    );
}

#[test]
fn test_deleted_centers_keep_separate_groups() {
    let (mut store, seeded) = create_march_ledger();
    for center in [&seeded.north, &seeded.south] {
        delete_catalog_entry(&mut store, CatalogKind::Center, center.as_str()).unwrap();
    }

    let report: Report = build_report(store.state(), &march());

    assert_eq!(
        group_summary(&report.by_center),
        vec![("—", 1, 1.0, 300.0), ("—", 2, 3.5, 1450.0)]
    );
    assert_eq!(report.by_center[0].id, seeded.south);
    assert_eq!(report.by_center[1].id, seeded.north);
    assert_eq!(report.total_amount, 1750.0);
}

#[test]
fn test_center_filter_restricts_rows_and_labels_heading() {
    let (store, seeded) = create_march_ledger();

    let report: Report = build_report(
        store.state(),
        &ReportQuery::new(
            create_test_date("2024-03-01"),
            create_test_date("2024-03-31"),
            Some(seeded.north.clone()),
        ),
    );

    assert_eq!(report.center_label, "North Center");
    assert_eq!(report.session_count(), 2);
    assert!(report.rows.iter().all(|row| row.center_id == seeded.north));
    assert_eq!(report.total_amount, 1450.0);
}

#[test]
fn test_range_bounds_are_inclusive() {
    let (store, _seeded) = create_march_ledger();

    let report: Report = build_report(
        store.state(),
        &ReportQuery::new(
            create_test_date("2024-03-05"),
            create_test_date("2024-03-10"),
            None,
        ),
    );

    assert_eq!(report.session_count(), 2);
    assert_eq!(report.total_hours, 3.5);
}

#[test]
fn test_empty_range_yields_zero_totals() {
    let (store, _seeded) = create_march_ledger();

    let report: Report = build_report(
        store.state(),
        &ReportQuery::new(
            create_test_date("2023-01-01"),
            create_test_date("2023-12-31"),
            None,
        ),
    );

    assert!(report.rows.is_empty());
    assert!(report.by_center.is_empty());
    assert_eq!(report.total_amount, 0.0);
}

#[test]
fn test_month_to_date_query() {
    let query: ReportQuery = ReportQuery::month_to_date(create_test_date("2024-03-17"));

    assert_eq!(query.start, create_test_date("2024-03-01"));
    assert_eq!(query.end, create_test_date("2024-03-17"));
    assert_eq!(query.center_id, None);
}

#[test]
fn test_rows_for_center() {
    let (store, seeded) = create_march_ledger();
    let report: Report = build_report(store.state(), &march());

    let south: Vec<Date> = report
        .rows_for_center(&seeded.south)
        .map(|row| row.date)
        .collect();

    assert_eq!(south, vec![create_test_date("2024-03-03")]);
}
