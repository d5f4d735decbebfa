use chrono::NaiveDate;
use clap::Parser;
use std::path::PathBuf;

// ── Settings (CLI) ─────────────────────────────────────────────────────────────

/// Expense report analyzer for corporate card transaction exports
#[derive(Parser, Debug, Clone)]
#[command(
    name = "expense-report",
    about = "Aggregate an XLSX transaction export into an expense report",
    version
)]
pub struct Settings {
    /// Path to the XLSX/XLS export to analyze
    pub file: PathBuf,

    /// Output format
    #[arg(long, default_value = "table", value_parser = ["table", "json"])]
    pub output: String,

    /// Reference date for the rolling 7-day card-issuance window,
    /// DD.MM.YYYY or YYYY-MM-DD (defaults to today)
    #[arg(long, value_parser = parse_reference_date)]
    pub as_of: Option<NaiveDate>,

    /// Logging level
    #[arg(long, default_value = "INFO", value_parser = ["DEBUG", "INFO", "WARNING", "ERROR"])]
    pub log_level: String,
}

/// Parse the `--as-of` value, accepting both the spreadsheet date shape and
/// the ISO one.
fn parse_reference_date(s: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(s, "%d.%m.%Y")
        .or_else(|_| NaiveDate::parse_from_str(s, "%Y-%m-%d"))
        .map_err(|_| format!("'{s}' is not a date (expected DD.MM.YYYY or YYYY-MM-DD)"))
}
