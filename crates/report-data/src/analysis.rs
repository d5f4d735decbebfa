//! Top-level analysis pipeline.
//!
//! Reads workbook bytes, normalizes rows, aggregates transactions and wraps
//! the result with run metadata for the caller.

use std::path::Path;
use std::time::Instant;

use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;

use report_core::models::{ReportAnalysis, Transaction};
use report_core::{ReportError, Result};

use crate::aggregator::ReportAggregator;
use crate::normalizer::normalize_rows;
use crate::workbook::read_rows_from_bytes;

// ── Public types ──────────────────────────────────────────────────────────────

/// Bookkeeping produced alongside the report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportMetadata {
    /// ISO-8601 timestamp when this report was generated.
    pub generated_at: String,
    /// Raw rows read from the first worksheet.
    pub rows_read: usize,
    /// Rows dropped during normalization.
    pub rows_skipped: usize,
    /// Wall-clock seconds spent opening and reading the workbook.
    pub load_time_seconds: f64,
    /// Wall-clock seconds spent normalizing and aggregating.
    pub parse_time_seconds: f64,
}

/// The complete output of a single analysis run.
#[derive(Debug, Clone)]
pub struct ParsedReport {
    /// The validated transactions, in surviving row order.
    pub transactions: Vec<Transaction>,
    /// The aggregated report.
    pub analysis: ReportAnalysis,
    /// Metadata about this run.
    pub metadata: ReportMetadata,
}

// ── Public functions ──────────────────────────────────────────────────────────

/// Run the full pipeline over an in-memory workbook.
///
/// 1. Read the first worksheet into raw rows.
/// 2. Normalize rows into validated transactions.
/// 3. Aggregate into a [`ReportAnalysis`] anchored at `as_of`.
pub fn analyze_bytes(bytes: &[u8], as_of: NaiveDate) -> Result<ParsedReport> {
    let load_start = Instant::now();
    let rows = read_rows_from_bytes(bytes)?;
    let load_time = load_start.elapsed().as_secs_f64();

    let parse_start = Instant::now();
    let transactions = normalize_rows(&rows)?;
    let analysis = ReportAggregator::analyze(&transactions, as_of);
    let parse_time = parse_start.elapsed().as_secs_f64();

    info!(
        "Analyzed {} transactions from {} raw rows",
        transactions.len(),
        rows.len()
    );

    let metadata = ReportMetadata {
        generated_at: Utc::now().to_rfc3339(),
        rows_read: rows.len(),
        rows_skipped: rows.len() - transactions.len(),
        load_time_seconds: load_time,
        parse_time_seconds: parse_time,
    };

    Ok(ParsedReport {
        transactions,
        analysis,
        metadata,
    })
}

/// Read `path` into memory and run [`analyze_bytes`] on it.
///
/// Every invocation reads the file fresh; nothing carries over between runs.
pub fn analyze_file(path: &Path, as_of: NaiveDate) -> Result<ParsedReport> {
    let bytes = std::fs::read(path).map_err(|source| ReportError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;
    analyze_bytes(&bytes, as_of)
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use rust_xlsxwriter::Workbook;
    use tempfile::TempDir;

    // ── Helpers ───────────────────────────────────────────────────────────────

    /// Build a workbook with the standard four headers and the given rows
    /// (`date`, `employee`, `total`, `operation`).
    fn expense_workbook(rows: &[(&str, &str, f64, &str)]) -> Vec<u8> {
        let mut workbook = Workbook::new();
        let worksheet = workbook.add_worksheet();
        for (col, header) in ["Дата", "Комментарий", "Итого", "Тип операции"]
            .iter()
            .enumerate()
        {
            worksheet.write_string(0, col as u16, *header).unwrap();
        }
        for (i, (date, employee, total, operation)) in rows.iter().enumerate() {
            let r = i as u32 + 1;
            worksheet.write_string(r, 0, *date).unwrap();
            if !employee.is_empty() {
                worksheet.write_string(r, 1, *employee).unwrap();
            }
            worksheet.write_number(r, 2, *total).unwrap();
            if !operation.is_empty() {
                worksheet.write_string(r, 3, *operation).unwrap();
            }
        }
        workbook.save_to_buffer().unwrap()
    }

    fn as_of() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 15).unwrap()
    }

    // ── analyze_bytes ─────────────────────────────────────────────────────────

    #[test]
    fn test_analyze_bytes_full_pipeline() {
        let bytes = expense_workbook(&[
            ("01.03.2024", "Ivanov", 100.0, "покупка"),
            ("02.03.2024", "Ivanov", 20.0, "возврат"),
        ]);
        let report = analyze_bytes(&bytes, as_of()).unwrap();

        assert_eq!(report.transactions.len(), 2);
        assert!((report.analysis.total_net_expenses - 80.0).abs() < 1e-9);
        assert!((report.analysis.total_refunds_amount - 20.0).abs() < 1e-9);
        assert_eq!(report.analysis.employee_stats.len(), 1);
        assert_eq!(report.analysis.employee_stats[0].name, "Ivanov");
    }

    #[test]
    fn test_analyze_bytes_skips_invalid_rows() {
        let bytes = expense_workbook(&[
            ("01.03.2024", "Ivanov", 100.0, ""),
            ("not a date", "Petrov", 50.0, ""),
            ("03.03.2024", "", 25.0, ""),
        ]);
        let report = analyze_bytes(&bytes, as_of()).unwrap();

        assert_eq!(report.transactions.len(), 1);
        assert_eq!(report.metadata.rows_read, 3);
        assert_eq!(report.metadata.rows_skipped, 2);
    }

    #[test]
    fn test_analyze_bytes_all_rows_invalid() {
        let bytes = expense_workbook(&[("not a date", "Ivanov", 100.0, "")]);
        let result = analyze_bytes(&bytes, as_of());
        assert!(matches!(result, Err(ReportError::NoValidTransactions)));
    }

    #[test]
    fn test_analyze_bytes_garbage_input() {
        let result = analyze_bytes(b"not a workbook at all", as_of());
        assert!(matches!(result, Err(ReportError::Workbook(_))));
    }

    #[test]
    fn test_analyze_bytes_metadata_populated() {
        let bytes = expense_workbook(&[("01.03.2024", "Ivanov", 100.0, "")]);
        let report = analyze_bytes(&bytes, as_of()).unwrap();

        assert!(!report.metadata.generated_at.is_empty());
        assert!(report.metadata.load_time_seconds >= 0.0);
        assert!(report.metadata.parse_time_seconds >= 0.0);
        assert_eq!(report.metadata.rows_read, 1);
        assert_eq!(report.metadata.rows_skipped, 0);
    }

    // ── analyze_file ──────────────────────────────────────────────────────────

    #[test]
    fn test_analyze_file_roundtrip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("expenses.xlsx");
        let bytes = expense_workbook(&[("01.03.2024", "Ivanov", 100.0, "покупка")]);
        std::fs::write(&path, bytes).unwrap();

        let report = analyze_file(&path, as_of()).unwrap();
        assert_eq!(report.analysis.total_transactions, 1);
    }

    #[test]
    fn test_analyze_file_missing_path() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("absent.xlsx");

        let result = analyze_file(&path, as_of());
        match result {
            Err(ReportError::FileRead { path: p, .. }) => assert_eq!(p, path),
            other => panic!("expected FileRead error, got {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn test_repeated_invocations_are_independent() {
        let bytes = expense_workbook(&[("01.03.2024", "Ivanov", 100.0, "")]);
        let first = analyze_bytes(&bytes, as_of()).unwrap();
        let second = analyze_bytes(&bytes, as_of()).unwrap();

        assert_eq!(
            first.analysis.total_transactions,
            second.analysis.total_transactions
        );
        assert!(
            (first.analysis.total_net_expenses - second.analysis.total_net_expenses).abs() < 1e-9
        );
    }
}
