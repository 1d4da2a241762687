// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The boundary of Tutor Billing.
//!
//! Raw user input is validated here before it becomes a core command, and
//! every read-only view (session lists, reports, exports, dashboard) is a
//! projection over the aggregate held by [`BillingStore`].

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
#![allow(clippy::multiple_crate_versions)]

mod backup;
mod csv_export;
mod dashboard;
mod error;
mod format;
mod handlers;
mod report;
mod request_response;
mod statement;
mod store;

#[cfg(test)]
mod tests;

pub use backup::{backup_file_name, create_backup, restore_backup};
pub use csv_export::{CSV_HEADERS, csv_file_name, render_csv};
pub use dashboard::{Dashboard, UPCOMING_LIMIT, build_dashboard};
pub use error::{ApiError, translate_core_error, translate_domain_error};
pub use format::{format_currency, format_date, format_hours, format_rate};
pub use handlers::{
    add_catalog_entry, delete_catalog_entry, delete_rate_rule, delete_session, list_catalog,
    list_rate_rules, list_sessions, log_session, parse_session_request, quote, revise_session,
    save_rate_rule, toggle_theme, update_settings,
};
pub use report::{ALL_CENTERS_LABEL, Report, ReportGroup, ReportQuery, build_report};
pub use request_response::{
    ApiResult, DeleteResponse, QuoteRequest, RateRuleRequest, RateRuleRow, SaveRateRuleResponse,
    SessionRequest, SessionRow,
};
pub use statement::render_statement;
pub use store::BillingStore;
