//! Folding validated transactions into the final report.
//!
//! A single pass accumulates the global totals, the per-employee statistics
//! and the report's date range. All sums are commutative, so input order
//! only influences nothing beyond the documented tie-break.

use std::collections::BTreeMap;

use chrono::{Days, NaiveDate};

use report_core::classify::{is_card_issue, is_refund};
use report_core::models::{EmployeeStat, ReportAnalysis, Transaction};

// ── EmployeeAccumulator ───────────────────────────────────────────────────────

/// Running totals for one employee during the fold.
#[derive(Debug, Clone, Default)]
struct EmployeeAccumulator {
    total_spent: f64,
    transaction_count: u32,
    refunds: f64,
    card_issue_cost: f64,
}

impl EmployeeAccumulator {
    fn into_stat(self, name: &str) -> EmployeeStat {
        EmployeeStat {
            name: name.to_string(),
            total_spent: self.total_spent,
            transaction_count: self.transaction_count,
            refunds: self.refunds,
            card_issue_cost: self.card_issue_cost,
        }
    }
}

// ── ReportAggregator ──────────────────────────────────────────────────────────

/// Stateless helper that folds transactions into a [`ReportAnalysis`].
pub struct ReportAggregator;

impl ReportAggregator {
    /// Aggregate `transactions` into a report.
    ///
    /// `as_of` anchors the rolling 7-day card-issuance window: a
    /// card-issuance transaction counts towards the weekly total iff its
    /// date is strictly after `as_of - 7 days`. The caller passes the
    /// processing date, which keeps the fold deterministic and testable.
    ///
    /// The normalizer guarantees a non-empty slice; if called with an empty
    /// one anyway, the date range degenerates to `as_of`.
    pub fn analyze(transactions: &[Transaction], as_of: NaiveDate) -> ReportAnalysis {
        let week_ago = as_of - Days::new(7);

        let mut total_net_expenses = 0.0;
        let mut total_refunds_amount = 0.0;
        let mut card_issue_cost_last_week = 0.0;

        let mut start_date = transactions.first().map(|tx| tx.date).unwrap_or(as_of);
        let mut end_date = start_date;

        // Accumulators keyed by name. The BTreeMap ordering makes the tie
        // order of the final sort deterministic.
        let mut by_employee: BTreeMap<&str, EmployeeAccumulator> = BTreeMap::new();

        for tx in transactions {
            start_date = start_date.min(tx.date);
            end_date = end_date.max(tx.date);

            let acc = by_employee.entry(tx.employee.as_str()).or_default();
            acc.transaction_count += 1;

            if is_refund(&tx.operation_type) {
                total_refunds_amount += tx.total;
                total_net_expenses -= tx.total;
                acc.refunds += tx.total;
            } else {
                total_net_expenses += tx.total;
                acc.total_spent += tx.total;
            }

            // Evaluated independently of the refund branch above.
            if is_card_issue(&tx.operation_type) {
                acc.card_issue_cost += tx.total;
                if tx.date > week_ago {
                    card_issue_cost_last_week += tx.total;
                }
            }
        }

        let mut employee_stats: Vec<EmployeeStat> = by_employee
            .into_iter()
            .map(|(name, acc)| acc.into_stat(name))
            .collect();
        // Stable sort: equal totals keep the name order from the map.
        employee_stats.sort_by(|a, b| b.total_spent.total_cmp(&a.total_spent));

        ReportAnalysis {
            total_net_expenses,
            total_refunds_amount,
            card_issue_cost_last_week,
            employee_stats,
            total_transactions: transactions.len(),
            start_date,
            end_date,
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
