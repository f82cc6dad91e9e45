//! Transaction model
//!
//! A transaction is an immutable record of one financial event. Income and
//! expense share the same fields and differ only in their `kind` tag, which
//! drives per-kind summary formatting and the negative-amount policy.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::category::Category;
use super::ids::TransactionId;
use super::money::Money;
use crate::error::{PennywiseError, PennywiseResult};

/// Whether money came in or went out
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Income,
    #[default]
    Expense,
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Income => write!(f, "INCOME"),
            Self::Expense => write!(f, "EXPENSE"),
        }
    }
}

impl FromStr for TransactionKind {
    type Err = PennywiseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "income" | "in" | "i" => Ok(Self::Income),
            "expense" | "out" | "e" => Ok(Self::Expense),
            other => Err(PennywiseError::validation(format!(
                "Unknown transaction kind '{}' (expected income or expense)",
                other
            ))),
        }
    }
}

/// Which signs of amount are accepted when a transaction is created
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum NegativeAmountPolicy {
    /// Any amount is accepted
    Allow,
    /// Expenses must be recorded as non-negative amounts
    RejectExpenses,
    /// No transaction may carry a negative amount
    #[default]
    RejectAll,
}

impl NegativeAmountPolicy {
    /// Check an amount against this policy
    pub fn check(&self, kind: TransactionKind, amount: &Money) -> PennywiseResult<()> {
        if !amount.is_negative() {
            return Ok(());
        }

        let rejected = match self {
            Self::Allow => false,
            Self::RejectExpenses => kind == TransactionKind::Expense,
            Self::RejectAll => true,
        };

        if rejected {
            return Err(PennywiseError::NegativeAmount(format!(
                "{} amount {} must not be negative",
                kind.to_string().to_lowercase(),
                amount
            )));
        }
        Ok(())
    }
}

/// Input for creating a transaction
///
/// Description defaults to empty, date to today and id to a fresh UUID.
#[derive(Debug, Clone)]
pub struct NewTransaction {
    pub id: Option<TransactionId>,
    pub kind: TransactionKind,
    pub description: Option<String>,
    pub amount: Money,
    pub category: Category,
    pub date: Option<NaiveDate>,
}

impl NewTransaction {
    /// Start an expense input with only the required fields
    pub fn new(amount: Money, category: Category) -> Self {
        Self {
            id: None,
            kind: TransactionKind::default(),
            description: None,
            amount,
            category,
            date: None,
        }
    }

    pub fn kind(mut self, kind: TransactionKind) -> Self {
        self.kind = kind;
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn date(mut self, date: NaiveDate) -> Self {
        self.date = Some(date);
        self
    }

    pub fn id(mut self, id: TransactionId) -> Self {
        self.id = Some(id);
        self
    }
}

/// A recorded financial event
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    id: TransactionId,
    #[serde(default)]
    kind: TransactionKind,
    #[serde(default)]
    description: String,
    amount: Money,
    category: Category,
    date: NaiveDate,
}

impl Transaction {
    /// Build a transaction, filling in defaults for absent fields
    pub fn new(input: NewTransaction) -> Self {
        Self {
            id: input.id.unwrap_or_default(),
            kind: input.kind,
            description: input.description.unwrap_or_default(),
            amount: input.amount,
            category: input.category,
            date: input.date.unwrap_or_else(today),
        }
    }

    /// Create an expense with all common fields
    pub fn with_details(
        description: impl Into<String>,
        amount: Money,
        category: Category,
        date: Option<NaiveDate>,
    ) -> Self {
        let mut input = NewTransaction::new(amount, category).description(description);
        input.date = date;
        Self::new(input)
    }

    pub fn id(&self) -> TransactionId {
        self.id
    }

    pub fn kind(&self) -> TransactionKind {
        self.kind
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn amount(&self) -> &Money {
        &self.amount
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn is_income(&self) -> bool {
        self.kind == TransactionKind::Income
    }

    pub fn is_expense(&self) -> bool {
        self.kind == TransactionKind::Expense
    }

    /// Check whether the transaction is dated in the given calendar month
    pub fn falls_in(&self, year: i32, month: u32) -> bool {
        self.date.year() == year && self.date.month() == month
    }

    /// One-line summary headed by the transaction kind
    pub fn summary(&self) -> String {
        format!(
            "{}: {} | {} | {}",
            self.kind,
            self.description,
            self.category,
            self.date.format("%Y-%m-%d")
        )
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] {} | {} | {} | {}",
            self.id,
            self.description,
            self.amount,
            self.category,
            self.date.format("%Y-%m-%d")
        )
    }
}

fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}
