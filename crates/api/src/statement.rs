// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Printable plain-text statement of a billing report.

use std::fmt::Write;

use crate::format::{format_currency, format_date, format_hours};
use crate::report::{Report, ReportGroup};

const RULE_WIDTH: usize = 72;

/// Renders a report as a printable statement.
///
/// The statement opens with the tutor's name, the period and the center
/// filter, then a summary line, one section per center with its sessions and
/// a subtotal, and finally the grand total.
#[must_use]
pub fn render_statement(report: &Report, tutor_name: &str) -> String {
    let mut out: String = String::new();
    match write_statement(&mut out, report, tutor_name) {
        Ok(()) => out,
        Err(std::fmt::Error) => String::new(),
    }
}

fn write_statement(out: &mut impl Write, report: &Report, tutor_name: &str) -> std::fmt::Result {
    let heavy: String = "=".repeat(RULE_WIDTH);

    writeln!(out, "Billing Report")?;
    writeln!(out, "{tutor_name}")?;
    writeln!(
        out,
        "{} — {} | {}",
        format_date(report.query.start),
        format_date(report.query.end),
        report.center_label
    )?;
    writeln!(out, "{heavy}")?;
    writeln!(
        out,
        "Total Hours: {}h   Total Earnings: {}   Sessions: {}",
        format_hours(report.total_hours),
        format_currency(report.total_amount),
        report.session_count()
    )?;

    for group in &report.by_center {
        write_center_section(out, report, group)?;
    }

    writeln!(out)?;
    writeln!(out, "{heavy}")?;
    writeln!(
        out,
        "Grand Total: {}h — {}",
        format_hours(report.total_hours),
        format_currency(report.total_amount)
    )
}

fn write_center_section(
    out: &mut impl Write,
    report: &Report,
    group: &ReportGroup,
) -> std::fmt::Result {
    writeln!(out)?;
    writeln!(out, "{}", group.name)?;
    writeln!(out, "{}", "-".repeat(RULE_WIDTH))?;
    writeln!(
        out,
        "{:<12} {:<16} {:<10} {:>6} {:>10} {:>12}",
        "Date", "Subject", "Standard", "Hours", "Rate", "Amount"
    )?;
    for row in report.rows_for_center(&group.id) {
        writeln!(
            out,
            "{:<12} {:<16} {:<10} {:>6} {:>10} {:>12}",
            format_date(row.date),
            row.subject,
            row.standard,
            row.duration,
            format_currency(row.rate),
            format_currency(row.amount)
        )?;
    }
    writeln!(
        out,
        "{:<40} {:>6} {:>10} {:>12}",
        format!("Subtotal — {}", group.name),
        format_hours(group.hours),
        "",
        format_currency(group.amount)
    )
}
