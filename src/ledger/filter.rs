//! Structured transaction filters
//!
//! Builder over the common predicates the console needs. Unset fields match
//! everything, so `TransactionFilter::new()` selects the whole ledger.

use chrono::NaiveDate;

use crate::models::{Category, Transaction, TransactionKind};

/// Options for filtering transactions
#[derive(Debug, Clone, Default)]
pub struct TransactionFilter {
    /// Filter by category
    pub category: Option<Category>,
    /// Filter by income/expense
    pub kind: Option<TransactionKind>,
    /// Filter by calendar month (year, month)
    pub month: Option<(i32, u32)>,
    /// Filter by date range start (inclusive)
    pub start_date: Option<NaiveDate>,
    /// Filter by date range end (inclusive)
    pub end_date: Option<NaiveDate>,
    /// Case-insensitive substring of the description
    pub description: Option<String>,
}

impl TransactionFilter {
    /// Create a new empty filter
    pub fn new() -> Self {
        Self::default()
    }

    /// Filter by category
    pub fn category(mut self, category: Category) -> Self {
        self.category = Some(category);
        self
    }

    /// Filter by kind
    pub fn kind(mut self, kind: TransactionKind) -> Self {
        self.kind = Some(kind);
        self
    }

    /// Filter by calendar month
    pub fn month(mut self, year: i32, month: u32) -> Self {
        self.month = Some((year, month));
        self
    }

    /// Filter by date range
    pub fn date_range(mut self, start: NaiveDate, end: NaiveDate) -> Self {
        self.start_date = Some(start);
        self.end_date = Some(end);
        self
    }

    /// Filter by description text
    pub fn description_contains(mut self, text: impl Into<String>) -> Self {
        self.description = Some(text.into().to_lowercase());
        self
    }

    /// Check a transaction against every set criterion
    pub fn matches(&self, txn: &Transaction) -> bool {
        if self.category.is_some_and(|c| c != txn.category()) {
            return false;
        }
        if self.kind.is_some_and(|k| k != txn.kind()) {
            return false;
        }
        if let Some((year, month)) = self.month {
            if !txn.falls_in(year, month) {
                return false;
            }
        }
        if self.start_date.is_some_and(|start| txn.date() < start) {
            return false;
        }
        if self.end_date.is_some_and(|end| txn.date() > end) {
            return false;
        }
        if let Some(text) = &self.description {
            if !txn.description().to_lowercase().contains(text.as_str()) {
                return false;
            }
        }
        true
    }
}
