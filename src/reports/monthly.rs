//! Monthly Report
//!
//! Totals the transactions of one calendar month in a single reporting
//! currency.

use serde::Serialize;
use std::fmt;
use tracing::debug;

use crate::error::{PennywiseError, PennywiseResult};
use crate::ledger::Ledger;
use crate::models::{Category, Currency, Money, Transaction};

/// Total for one category within a report
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryTotal {
    pub category: Category,
    pub transaction_count: usize,
    pub total: Money,
}

/// Immutable summary of one month of transactions
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthlyReport {
    year: i32,
    month: u32,
    items: Vec<Transaction>,
    total: Money,
}

impl MonthlyReport {
    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    /// Matching transactions, in ledger order
    pub fn items(&self) -> &[Transaction] {
        &self.items
    }

    pub fn total(&self) -> &Money {
        &self.total
    }

    pub fn currency(&self) -> &Currency {
        self.total.currency()
    }

    pub fn transaction_count(&self) -> usize {
        self.items.len()
    }

    /// Per-category totals, in category declaration order
    ///
    /// Categories without any transaction this month are left out.
    pub fn category_totals(&self) -> PennywiseResult<Vec<CategoryTotal>> {
        let mut rows = Vec::new();
        for category in Category::ALL {
            let amounts: Vec<&Money> = self
                .items
                .iter()
                .filter(|t| t.category() == category)
                .map(|t| t.amount())
                .collect();
            if amounts.is_empty() {
                continue;
            }
            rows.push(CategoryTotal {
                category,
                transaction_count: amounts.len(),
                total: Money::sum(amounts, self.currency())?,
            });
        }
        Ok(rows)
    }
}

impl fmt::Display for MonthlyReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Report for {}/{}", self.month, self.year)?;
        writeln!(f, "Total: {}", self.total)?;
        write!(f, "Transactions: {}", self.items.len())
    }
}

/// Builds reports from a ledger in one reporting currency
#[derive(Debug, Clone, Default)]
pub struct ReportGenerator {
    currency: Currency,
}

impl ReportGenerator {
    pub fn new(currency: Currency) -> Self {
        Self { currency }
    }

    pub fn currency(&self) -> &Currency {
        &self.currency
    }

    /// Report on every transaction dated in `year`/`month`
    ///
    /// Fails with `Validation` for a month outside 1-12 and with
    /// `CurrencyMismatch` when a matching transaction is in a currency other
    /// than the reporting one.
    pub fn monthly_report(
        &self,
        ledger: &Ledger,
        year: i32,
        month: u32,
    ) -> PennywiseResult<MonthlyReport> {
        if !(1..=12).contains(&month) {
            return Err(PennywiseError::validation(format!(
                "Month must be between 1 and 12, got {}",
                month
            )));
        }

        let items = ledger.filter(|t| t.falls_in(year, month));
        let total = Money::sum(items.iter().map(|t| t.amount()), &self.currency)?;

        debug!(year, month, count = items.len(), total = %total, "generated monthly report");

        Ok(MonthlyReport {
            year,
            month,
            items,
            total,
        })
    }

    /// Sum of every transaction in the ledger
    pub fn overall_total(&self, ledger: &Ledger) -> PennywiseResult<Money> {
        Money::sum(ledger.iter().map(|t| t.amount()), &self.currency)
    }
}
