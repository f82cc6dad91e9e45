//! In-memory ledger
//!
//! Owns the ordered list of recorded transactions. The ledger only grows by
//! appending and only shrinks by clearing everything; readers always receive
//! owned copies, so nothing handed out can change what is stored.

pub mod filter;

pub use filter::TransactionFilter;

use tracing::debug;

use crate::models::Transaction;

/// Ordered collection of every recorded transaction
#[derive(Debug, Clone, Default)]
pub struct Ledger {
    transactions: Vec<Transaction>,
}

impl Ledger {
    /// Create an empty ledger
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one transaction
    pub fn add(&mut self, transaction: Transaction) {
        debug!(id = %transaction.id(), "appending transaction");
        self.transactions.push(transaction);
    }

    /// Append every transaction, preserving input order
    pub fn add_many<I>(&mut self, transactions: I)
    where
        I: IntoIterator<Item = Transaction>,
    {
        let before = self.transactions.len();
        self.transactions.extend(transactions);
        debug!(
            added = self.transactions.len() - before,
            "appended transactions"
        );
    }

    /// Snapshot of every transaction in insertion order
    pub fn all(&self) -> Vec<Transaction> {
        self.transactions.clone()
    }

    /// Transactions matching `predicate`, in insertion order
    pub fn filter<P>(&self, predicate: P) -> Vec<Transaction>
    where
        P: Fn(&Transaction) -> bool,
    {
        self.transactions
            .iter()
            .filter(|t| predicate(*t))
            .cloned()
            .collect()
    }

    /// Transactions matching a structured filter
    pub fn filter_by(&self, filter: &TransactionFilter) -> Vec<Transaction> {
        self.filter(|t| filter.matches(t))
    }

    /// Borrowing iterator over the stored transactions
    pub fn iter(&self) -> impl Iterator<Item = &Transaction> {
        self.transactions.iter()
    }

    /// Remove every transaction
    pub fn clear(&mut self) {
        debug!(removed = self.transactions.len(), "clearing ledger");
        self.transactions.clear();
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }
}

impl Extend<Transaction> for Ledger {
    fn extend<I: IntoIterator<Item = Transaction>>(&mut self, iter: I) {
        self.add_many(iter);
    }
}

impl FromIterator<Transaction> for Ledger {
    fn from_iter<I: IntoIterator<Item = Transaction>>(iter: I) -> Self {
        let mut ledger = Ledger::new();
        ledger.add_many(iter);
        ledger
    }
}
