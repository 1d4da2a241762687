// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Terminal output for lists and summaries.

use tutor_billing::Quote;
use tutor_billing_api::{
    Dashboard, RateRuleRow, Report, ReportGroup, SessionRow, format_currency, format_date,
    format_hours, format_rate,
};
use tutor_billing_domain::{CatalogEntry, CatalogKind, Settings};

pub fn print_catalog(kind: CatalogKind, entries: &[CatalogEntry]) {
    if entries.is_empty() {
        println!("No {kind} entries yet.");
        return;
    }
    println!("{:<38} {}", "ID", kind.title());
    for entry in entries {
        println!("{:<38} {}", entry.id, entry.name);
    }
}

pub fn print_rate_rules(rows: &[RateRuleRow]) {
    if rows.is_empty() {
        println!("No rate rules yet. Sessions will be priced at ₹0.");
        return;
    }
    println!(
        "{:<38} {:<18} {:<14} {:<10} {:>12}",
        "ID", "Center", "Subject", "Standard", "Rate"
    );
    for row in rows {
        println!(
            "{:<38} {:<18} {:<14} {:<10} {:>12}",
            row.id,
            row.center,
            row.subject,
            row.standard,
            format_rate(row.rate_per_hour)
        );
    }
}

pub fn print_quote(quote: &Quote) {
    match (&quote.rule_id, quote.tier) {
        (Some(rule_id), Some(tier)) => {
            println!("Rate:   {} (rule {rule_id}, {tier})", format_rate(quote.rate));
        }
        _ => println!("Rate:   {} (no matching rule)", format_rate(quote.rate)),
    }
    println!("Amount: {}", format_currency(quote.amount));
}

pub fn print_sessions(rows: &[SessionRow]) {
    if rows.is_empty() {
        println!("No sessions.");
        return;
    }
    println!(
        "{:<38} {:<12} {:<18} {:<14} {:<10} {:>6} {:<10} {:>12}",
        "ID", "Date", "Center", "Subject", "Standard", "Hours", "Status", "Amount"
    );
    for row in rows {
        println!(
            "{:<38} {:<12} {:<18} {:<14} {:<10} {:>6} {:<10} {:>12}",
            row.id,
            format_date(row.date),
            row.center,
            row.subject,
            row.standard,
            format_hours(row.duration),
            row.status,
            format_currency(row.amount)
        );
    }
}

pub fn print_dashboard(dashboard: &Dashboard) {
    if dashboard.needs_setup {
        println!("No centers yet. Start with `tutor-billing center add <name>`.");
        println!();
    }
    println!("This month");
    println!("  Earnings: {}", format_currency(dashboard.month_earnings));
    println!("  Hours:    {}h", format_hours(dashboard.month_hours));
    println!("  Sessions: {}", dashboard.month_sessions);
    println!();
    println!("Upcoming");
    if dashboard.upcoming.is_empty() {
        println!("  Nothing scheduled.");
    }
    for row in &dashboard.upcoming {
        println!(
            "  {:<12} {:<18} {} / {} ({}h)",
            format_date(row.date),
            row.center,
            row.subject,
            row.standard,
            format_hours(row.duration)
        );
    }
}

fn print_groups(title: &str, groups: &[ReportGroup]) {
    println!("{title}");
    for group in groups {
        println!(
            "  {:<24} {:>4} sessions {:>7}h {:>14}",
            group.name,
            group.sessions,
            format_hours(group.hours),
            format_currency(group.amount)
        );
    }
}

pub fn print_report(report: &Report) {
    println!(
        "{} to {} | {}",
        format_date(report.query.start),
        format_date(report.query.end),
        report.center_label
    );
    println!(
        "Total: {}h, {} across {} sessions",
        format_hours(report.total_hours),
        format_currency(report.total_amount),
        report.session_count()
    );
    if report.rows.is_empty() {
        return;
    }
    println!();
    print_groups("By center", &report.by_center);
    println!();
    print_groups("By subject", &report.by_subject);
}

pub fn print_settings(settings: &Settings) {
    println!("Tutor name: {}", settings.tutor_name);
    println!("Theme:      {}", settings.theme);
}
