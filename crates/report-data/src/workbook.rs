//! Workbook loading for the expense report analyzer.
//!
//! Opens an XLSX/XLS container from an in-memory byte buffer and converts the
//! first worksheet into header-keyed raw rows for the normalizer.

use std::collections::HashMap;
use std::io::Cursor;

use calamine::{open_workbook_auto_from_rs, Data, Reader};
use tracing::debug;

use report_core::{ReportError, Result};

// ── RawRow ────────────────────────────────────────────────────────────────────

/// An untyped spreadsheet row: header label → cell value.
///
/// Empty cells are omitted, so an absent key means the cell was blank or the
/// column does not exist at all. Exists only between workbook reading and
/// normalization.
pub type RawRow = HashMap<String, Data>;

// ── Public API ────────────────────────────────────────────────────────────────

/// Read the first worksheet of the workbook in `bytes` into raw rows.
///
/// The first row is treated as the header row; every following row becomes a
/// [`RawRow`] keyed by the header text above each cell. Rows without a single
/// non-empty cell are dropped.
pub fn read_rows_from_bytes(bytes: &[u8]) -> Result<Vec<RawRow>> {
    let mut workbook = open_workbook_auto_from_rs(Cursor::new(bytes))?;

    let sheet_name = workbook
        .sheet_names()
        .first()
        .cloned()
        .ok_or(ReportError::EmptyWorkbook)?;

    let range = workbook.worksheet_range(&sheet_name)?;
    let mut rows = range.rows();

    // Header labels by column index. Non-text header cells leave their
    // column unlabelled, which hides it from the normalizer.
    let headers: Vec<Option<String>> = match rows.next() {
        Some(header_row) => header_row
            .iter()
            .map(|cell| match cell {
                Data::String(s) => Some(s.trim().to_string()),
                _ => None,
            })
            .collect(),
        None => Vec::new(),
    };

    let mut raw_rows: Vec<RawRow> = Vec::new();
    for row in rows {
        let mut map = RawRow::new();
        for (header, cell) in headers.iter().zip(row.iter()) {
            let Some(label) = header else { continue };
            if matches!(cell, Data::Empty) {
                continue;
            }
            map.insert(label.clone(), cell.clone());
        }
        if map.is_empty() {
            continue;
        }
        raw_rows.push(map);
    }

    debug!("Sheet '{}': {} raw rows read", sheet_name, raw_rows.len());
    Ok(raw_rows)
}

// ── Tests ─────────────────────────────────────────────────────────────────────
