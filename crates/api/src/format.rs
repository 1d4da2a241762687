// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Display formatting for money, hours and dates.

use time::Date;
use time::format_description::BorrowedFormatItem;

/// `05 Mar 2024`.
const DISPLAY_DATE_FORMAT: &[BorrowedFormatItem<'static>] =
    time::macros::format_description!("[day] [month repr:short] [year]");

/// Formats an amount as whole rupees with Indian digit grouping.
///
/// The last three digits form one group and the rest are grouped in pairs:
/// `1234567.0` becomes `₹12,34,567`.
#[must_use]
pub fn format_currency(amount: f64) -> String {
    let rounded: f64 = amount.round();
    let digits: String = format!("{:.0}", rounded.abs());
    let sign: &str = if rounded < 0.0 { "-" } else { "" };
    format!("{sign}₹{}", group_indian(&digits))
}

/// Formats an hourly rate, e.g. `₹500/hr`.
#[must_use]
pub fn format_rate(rate: f64) -> String {
    format!("{}/hr", format_currency(rate))
}

/// Formats an hour total with one decimal place.
#[must_use]
pub fn format_hours(hours: f64) -> String {
    format!("{hours:.1}")
}

/// Formats a date as `DD Mon YYYY`.
#[must_use]
pub fn format_date(date: Date) -> String {
    date.format(DISPLAY_DATE_FORMAT).unwrap_or_else(|_| date.to_string())
}

fn group_indian(digits: &str) -> String {
    if digits.len() <= 3 {
        return digits.to_string();
    }

    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut groups: Vec<&str> = Vec::new();
    let mut end: usize = head.len();
    while end > 2 {
        groups.push(&head[end - 2..end]);
        end -= 2;
    }
    groups.push(&head[..end]);
    groups.reverse();

    format!("{},{tail}", groups.join(","))
}
