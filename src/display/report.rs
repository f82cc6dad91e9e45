//! Report formatting utilities for terminal output

use tabled::settings::Style;
use tabled::{Table, Tabled};

use super::transaction::format_transaction_list;
use crate::error::PennywiseResult;
use crate::reports::MonthlyReport;

#[derive(Tabled)]
struct CategoryRow {
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Count")]
    count: usize,
    #[tabled(rename = "Total")]
    total: String,
}

/// Three-line header followed by the matching transactions
pub fn format_monthly_report(report: &MonthlyReport) -> String {
    let mut output = format!("{}\n", report);
    if !report.items().is_empty() {
        output.push_str(&format_transaction_list(report.items()));
    }
    output
}

/// Per-category table for a report
pub fn format_category_breakdown(report: &MonthlyReport) -> PennywiseResult<String> {
    let rows: Vec<CategoryRow> = report
        .category_totals()?
        .into_iter()
        .map(|row| CategoryRow {
            category: row.category.to_string(),
            count: row.transaction_count,
            total: row.total.to_string(),
        })
        .collect();

    if rows.is_empty() {
        return Ok(String::new());
    }

    let mut table = Table::new(rows);
    table.with(Style::psql());
    Ok(format!("{}\n", table))
}
