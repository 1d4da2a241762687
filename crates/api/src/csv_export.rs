// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! CSV export of a billing report.

use csv::Writer;
use time::Date;

use crate::error::ApiError;
use crate::report::Report;
use crate::request_response::SessionRow;

/// Column headers of the export.
pub const CSV_HEADERS: [&str; 7] = [
    "Date", "Center", "Subject", "Standard", "Hours", "Rate", "Amount",
];

fn export_error(err: impl std::fmt::Display) -> ApiError {
    ApiError::Export {
        message: err.to_string(),
    }
}

fn session_record(row: &SessionRow) -> [String; 7] {
    [
        row.date.to_string(),
        row.center.clone(),
        row.subject.clone(),
        row.standard.clone(),
        row.duration.to_string(),
        row.rate.to_string(),
        row.amount.to_string(),
    ]
}

/// Renders a report as CSV: a header, one row per session in date order,
/// and a closing `TOTAL` row with summed hours and amount.
///
/// # Errors
///
/// Returns an error if the CSV writer fails.
pub fn render_csv(report: &Report) -> Result<String, ApiError> {
    let mut writer: Writer<Vec<u8>> = Writer::from_writer(Vec::new());

    writer.write_record(CSV_HEADERS).map_err(export_error)?;
    for row in &report.rows {
        writer
            .write_record(session_record(row))
            .map_err(export_error)?;
    }
    let total_hours: String = report.total_hours.to_string();
    let total_amount: String = report.total_amount.to_string();
    writer
        .write_record(["", "", "", "TOTAL", total_hours.as_str(), "", total_amount.as_str()])
        .map_err(export_error)?;

    let bytes: Vec<u8> = writer.into_inner().map_err(export_error)?;
    String::from_utf8(bytes).map_err(export_error)
}

/// The suggested file name for an export covering `[start, end]`.
#[must_use]
pub fn csv_file_name(start: Date, end: Date) -> String {
    format!("billing_{start}_{end}.csv")
}
