use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A single validated expense operation produced by the row normalizer.
///
/// A `Transaction` exists only if all four fields were successfully derived
/// from a raw spreadsheet row and the amount is finite. It is never mutated
/// after creation: the normalizer builds it, the aggregator consumes it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// Calendar day the operation took place. Day granularity only; any
    /// time-of-day suffix in the source cell is discarded during parsing.
    pub date: NaiveDate,
    /// Operation amount, always positive as parsed. Refund sign semantics
    /// are applied during aggregation, not stored here.
    pub total: f64,
    /// Trimmed, lowercased operation type text. May be empty.
    pub operation_type: String,
    /// Trimmed employee name from the comment column. Never empty.
    pub employee: String,
}

/// Running aggregate for one employee.
///
/// One instance per distinct employee name; names are exact, case-sensitive
/// strings (no normalization beyond the trimming done upstream).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EmployeeStat {
    /// Employee name exactly as it appears in the comment column.
    pub name: String,
    /// Sum of non-refund amounts.
    pub total_spent: f64,
    /// Number of transactions carrying this employee name.
    pub transaction_count: u32,
    /// Sum of refund amounts.
    pub refunds: f64,
    /// Sum of card-issuance amounts. A subset of `total_spent`.
    pub card_issue_cost: f64,
}

impl EmployeeStat {
    /// Spend net of refunds, as shown in the report table.
    pub fn net_spent(&self) -> f64 {
        self.total_spent - self.refunds
    }
}

/// The final immutable report delivered to the caller for display.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportAnalysis {
    /// Sum over all transactions of `+total` for purchases and `-total` for
    /// refunds.
    pub total_net_expenses: f64,
    /// Sum of all refund amounts. Always `>= 0`.
    pub total_refunds_amount: f64,
    /// Sum of card-issuance amounts dated within the last 7 days relative to
    /// the reference date the report was generated with.
    pub card_issue_cost_last_week: f64,
    /// Per-employee breakdown, sorted descending by `total_spent`.
    pub employee_stats: Vec<EmployeeStat>,
    /// Number of validated transactions that went into the report.
    pub total_transactions: usize,
    /// Earliest transaction date.
    pub start_date: NaiveDate,
    /// Latest transaction date.
    pub end_date: NaiveDate,
}
