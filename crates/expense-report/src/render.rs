//! Plain-text rendering of the aggregated report.
//!
//! Mirrors the summary cards and the per-employee table of the web dashboard
//! this tool replaces: four headline values, the covered period, then one
//! aligned row per employee with a totals line at the bottom.

use report_core::formatting::{format_currency, format_date_range};
use report_core::models::ReportAnalysis;

/// Render the whole report: summary block plus the per-employee table.
pub fn render_report(analysis: &ReportAnalysis) -> String {
    format!(
        "{}\n{}",
        render_summary(analysis),
        render_employee_table(analysis)
    )
}

/// The headline values and the covered period.
pub fn render_summary(analysis: &ReportAnalysis) -> String {
    let mut out = String::new();
    out.push_str("Отчёт о расходах\n");
    out.push_str(&format!(
        "Период: {}\n\n",
        format_date_range(analysis.start_date, analysis.end_date)
    ));
    out.push_str(&summary_line(
        "Чистые расходы",
        &format_currency(analysis.total_net_expenses),
    ));
    out.push_str(&summary_line(
        "Обработанные возвраты",
        &format!("-{}", format_currency(analysis.total_refunds_amount)),
    ));
    out.push_str(&summary_line(
        "Выпуск карт (7 дн.)",
        &format_currency(analysis.card_issue_cost_last_week),
    ));
    out.push_str(&summary_line(
        "Всего транзакций",
        &analysis.total_transactions.to_string(),
    ));
    out
}

/// One row per employee plus a totals row, aligned into columns.
pub fn render_employee_table(analysis: &ReportAnalysis) -> String {
    let mut out = String::new();
    out.push_str(&table_line(
        "Сотрудник",
        "Операции",
        "Потрачено",
        "Возвраты",
        "Выпуск карт",
        "Чистые",
    ));

    let mut spent = 0.0;
    let mut refunds = 0.0;
    let mut cards = 0.0;
    for stat in &analysis.employee_stats {
        spent += stat.total_spent;
        refunds += stat.refunds;
        cards += stat.card_issue_cost;
        out.push_str(&table_line(
            &stat.name,
            &stat.transaction_count.to_string(),
            &format_currency(stat.total_spent),
            &format_currency(stat.refunds),
            &format_currency(stat.card_issue_cost),
            &format_currency(stat.net_spent()),
        ));
    }

    out.push_str(&table_line(
        "ИТОГО",
        &analysis.total_transactions.to_string(),
        &format_currency(spent),
        &format_currency(refunds),
        &format_currency(cards),
        &format_currency(spent - refunds),
    ));
    out
}

fn summary_line(label: &str, value: &str) -> String {
    format!("{:<24}{:>16}\n", label, value)
}

fn table_line(
    name: &str,
    count: &str,
    spent: &str,
    refunds: &str,
    cards: &str,
    net: &str,
) -> String {
    format!(
        "{:<24}{:>10}{:>14}{:>14}{:>14}{:>14}\n",
        name, count, spent, refunds, cards, net
    )
}

// ── Tests ─────────────────────────────────────────────────────────────────────
