// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The dashboard projection: this month's earnings and what is coming up.

use time::Date;
use tutor_billing::State;
use tutor_billing_domain::{Session, SessionStatus};

use crate::request_response::SessionRow;

/// How many upcoming sessions the dashboard lists.
pub const UPCOMING_LIMIT: usize = 5;

/// Summary figures for one day's view of the ledger.
#[derive(Debug, Clone, PartialEq)]
pub struct Dashboard {
    /// Earnings from completed sessions in the current calendar month.
    pub month_earnings: f64,
    /// Hours of completed sessions in the current calendar month.
    pub month_hours: f64,
    /// Count of completed sessions in the current calendar month.
    pub month_sessions: usize,
    /// The next scheduled sessions dated today or later, soonest first.
    pub upcoming: Vec<SessionRow>,
    /// Whether no centers exist yet.
    pub needs_setup: bool,
}

fn in_month_of(session: &Session, today: Date) -> bool {
    session.date.year() == today.year() && session.date.month() == today.month()
}

/// Builds the dashboard as seen on `today`.
#[must_use]
pub fn build_dashboard(state: &State, today: Date) -> Dashboard {
    let mut month_earnings: f64 = 0.0;
    let mut month_hours: f64 = 0.0;
    let mut month_sessions: usize = 0;

    for session in state
        .sessions
        .iter()
        .filter(|session| session.is_billable() && in_month_of(session, today))
    {
        month_earnings += session.amount;
        month_hours += session.duration;
        month_sessions += 1;
    }

    let mut upcoming: Vec<&Session> = state
        .sessions
        .iter()
        .filter(|session| session.status == SessionStatus::Scheduled && session.date >= today)
        .collect();
    upcoming.sort_by_key(|session| session.date);

    Dashboard {
        month_earnings,
        month_hours,
        month_sessions,
        upcoming: upcoming
            .into_iter()
            .take(UPCOMING_LIMIT)
            .map(|session| SessionRow::from_session(state, session))
            .collect(),
        needs_setup: state.centers.is_empty(),
    }
}
