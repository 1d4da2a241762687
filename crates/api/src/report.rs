// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The billing report projection.
//!
//! A report covers the completed sessions in an inclusive date range,
//! optionally restricted to one center. Only frozen session amounts are
//! summed; the current rule table is never consulted.
//!
//! Groups are keyed by reference id, not display name, so two deleted
//! centers stay in separate groups even though both are labelled "—".

use time::Date;
use tutor_billing::State;
use tutor_billing_domain::{CatalogEntry, CatalogKind, EntityId, Session, display_name};

use crate::request_response::SessionRow;

/// Label used in place of a center name when the report is not filtered.
pub const ALL_CENTERS_LABEL: &str = "All Centers";

/// The selection a report is built from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportQuery {
    /// First day included.
    pub start: Date,
    /// Last day included.
    pub end: Date,
    /// Restrict to this center.
    pub center_id: Option<EntityId>,
}

impl ReportQuery {
    /// Creates a query for an inclusive range.
    #[must_use]
    pub const fn new(start: Date, end: Date, center_id: Option<EntityId>) -> Self {
        Self {
            start,
            end,
            center_id,
        }
    }

    /// The first of `today`'s month through `today`, all centers.
    #[must_use]
    pub fn month_to_date(today: Date) -> Self {
        let start: Date = today.replace_day(1).unwrap_or(today);
        Self::new(start, today, None)
    }

    fn includes(&self, session: &Session) -> bool {
        session.is_billable()
            && session.falls_within(self.start, self.end)
            && self
                .center_id
                .as_ref()
                .is_none_or(|center_id| &session.center_id == center_id)
    }
}

/// Hours and earnings for one center or subject.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportGroup {
    /// The grouped reference.
    pub id: EntityId,
    /// Its display name, or "—" if it no longer exists.
    pub name: String,
    /// Number of sessions in the group.
    pub sessions: usize,
    /// Summed duration.
    pub hours: f64,
    /// Summed frozen amounts.
    pub amount: f64,
}

/// A built report.
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    /// The selection this report was built from.
    pub query: ReportQuery,
    /// The center filter for headings: its name, or "All Centers".
    pub center_label: String,
    /// Matching sessions, oldest first.
    pub rows: Vec<SessionRow>,
    /// Per-center totals in order of first appearance.
    pub by_center: Vec<ReportGroup>,
    /// Per-subject totals in order of first appearance.
    pub by_subject: Vec<ReportGroup>,
    /// Summed duration of every row.
    pub total_hours: f64,
    /// Summed amount of every row.
    pub total_amount: f64,
}

impl Report {
    /// Number of sessions in the report.
    #[must_use]
    pub fn session_count(&self) -> usize {
        self.rows.len()
    }

    /// Rows belonging to one center group, oldest first.
    pub fn rows_for_center<'a>(
        &'a self,
        center_id: &'a EntityId,
    ) -> impl Iterator<Item = &'a SessionRow> + 'a {
        self.rows.iter().filter(move |row| &row.center_id == center_id)
    }
}

fn add_to_group(groups: &mut Vec<ReportGroup>, id: &EntityId, name: &str, session: &Session) {
    if let Some(group) = groups.iter_mut().find(|group| &group.id == id) {
        group.sessions += 1;
        group.hours += session.duration;
        group.amount += session.amount;
        return;
    }
    groups.push(ReportGroup {
        id: id.clone(),
        name: name.to_string(),
        sessions: 1,
        hours: session.duration,
        amount: session.amount,
    });
}

/// Builds the report for `query`.
#[must_use]
pub fn build_report(state: &State, query: &ReportQuery) -> Report {
    let mut matching: Vec<&Session> = state
        .sessions
        .iter()
        .filter(|session| query.includes(session))
        .collect();
    matching.sort_by_key(|session| session.date);

    let centers: &[CatalogEntry] = state.catalog(CatalogKind::Center);
    let subjects: &[CatalogEntry] = state.catalog(CatalogKind::Subject);

    let mut by_center: Vec<ReportGroup> = Vec::new();
    let mut by_subject: Vec<ReportGroup> = Vec::new();
    let mut total_hours: f64 = 0.0;
    let mut total_amount: f64 = 0.0;

    for session in &matching {
        add_to_group(
            &mut by_center,
            &session.center_id,
            display_name(centers, &session.center_id),
            session,
        );
        add_to_group(
            &mut by_subject,
            &session.subject_id,
            display_name(subjects, &session.subject_id),
            session,
        );
        total_hours += session.duration;
        total_amount += session.amount;
    }

    let center_label: String = query.center_id.as_ref().map_or_else(
        || ALL_CENTERS_LABEL.to_string(),
        |id| display_name(centers, id).to_string(),
    );

    Report {
        query: query.clone(),
        center_label,
        rows: matching
            .into_iter()
            .map(|session| SessionRow::from_session(state, session))
            .collect(),
        by_center,
        by_subject,
        total_hours,
        total_amount,
    }
}
