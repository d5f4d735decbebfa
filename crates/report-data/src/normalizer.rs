//! Row normalization: raw spreadsheet rows into validated transactions.
//!
//! Each row is validated independently and in order; rows that fail any step
//! are dropped without becoming errors. Only the aggregate "nothing survived"
//! condition is surfaced to the caller.

use calamine::Data;
use chrono::NaiveDate;
use tracing::debug;

use report_core::columns;
use report_core::models::Transaction;
use report_core::{ReportError, Result};

use crate::workbook::RawRow;

// ── Public API ────────────────────────────────────────────────────────────────

/// Convert raw rows into validated transactions, preserving original row
/// order among survivors.
///
/// Returns [`ReportError::NoValidTransactions`] when no row survives, so the
/// caller reports a format problem instead of rendering an empty report.
pub fn normalize_rows(rows: &[RawRow]) -> Result<Vec<Transaction>> {
    let transactions: Vec<Transaction> = rows.iter().filter_map(normalize_row).collect();

    debug!(
        "Normalized {} of {} raw rows",
        transactions.len(),
        rows.len()
    );

    if transactions.is_empty() {
        return Err(ReportError::NoValidTransactions);
    }
    Ok(transactions)
}

/// Validate a single raw row, returning `None` when any field fails.
///
/// A row becomes a [`Transaction`] only if the date parses, the employee
/// name is non-empty after trimming, and the amount is present and finite.
pub fn normalize_row(row: &RawRow) -> Option<Transaction> {
    let date = row.get(columns::DATE).and_then(parse_date_cell)?;

    let employee = row
        .get(columns::EMPLOYEE)
        .and_then(text_cell)
        .map(str::trim)
        .filter(|name| !name.is_empty())?
        .to_string();

    let total = row.get(columns::TOTAL).and_then(amount_cell)?;

    let operation_type = row
        .get(columns::OPERATION_TYPE)
        .and_then(text_cell)
        .map(|s| s.trim().to_lowercase())
        .unwrap_or_default();

    Some(Transaction {
        date,
        total,
        operation_type,
        employee,
    })
}

/// Parse `DD.MM.YYYY`, tolerating a trailing time-of-day component after the
/// first whitespace.
///
/// Year tokens starting with `"202"` are truncated to their first four
/// characters before parsing: exports occasionally render these years with a
/// stray symbol appended after the digits.
pub fn parse_date(text: &str) -> Option<NaiveDate> {
    let date_part = text.split_whitespace().next()?;
    let parts: Vec<&str> = date_part.split('.').collect();
    if parts.len() != 3 {
        return None;
    }
    let (day, month, year_token) = (parts[0], parts[1], parts[2]);

    let year_token: String = if year_token.starts_with("202") {
        year_token.chars().take(4).collect()
    } else {
        year_token.to_string()
    };

    let year: i32 = year_token.parse().ok()?;
    let month: u32 = month.parse().ok()?;
    let day: u32 = day.parse().ok()?;
    NaiveDate::from_ymd_opt(year, month, day)
}

/// Parse a locale-formatted amount such as `"1 234,56"`: strip all
/// whitespace (including non-breaking spaces), swap the first decimal comma
/// for a point, then parse. Non-finite results are rejected.
pub fn parse_amount(text: &str) -> Option<f64> {
    let cleaned: String = text.chars().filter(|c| !c.is_whitespace()).collect();
    let cleaned = cleaned.replacen(',', ".", 1);
    cleaned.parse::<f64>().ok().filter(|v| v.is_finite())
}

// ── Cell access ───────────────────────────────────────────────────────────────

/// The cell's text, when it is a text cell.
fn text_cell(cell: &Data) -> Option<&str> {
    match cell {
        Data::String(s) => Some(s.as_str()),
        _ => None,
    }
}

/// Dates must arrive as text in the expected `DD.MM.YYYY` shape; numeric or
/// date-typed cells do not qualify.
fn parse_date_cell(cell: &Data) -> Option<NaiveDate> {
    text_cell(cell).and_then(parse_date)
}

/// Extract the amount from a cell. Numeric cells are used as-is (date-typed
/// cells count as numeric through their serial value); text cells go through
/// [`parse_amount`]. Anything else rejects the row.
fn amount_cell(cell: &Data) -> Option<f64> {
    match cell {
        Data::Float(f) => Some(*f),
        Data::Int(i) => Some(*i as f64),
        Data::DateTime(dt) => Some(dt.as_f64()),
        Data::String(s) => parse_amount(s),
        _ => None,
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
