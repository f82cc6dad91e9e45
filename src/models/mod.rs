//! Core data models for Pennywise
//!
//! Value types for the finance domain: money with its currency, the closed
//! set of categories, and transactions.

pub mod category;
pub mod ids;
pub mod money;
pub mod transaction;

pub use category::Category;
pub use ids::TransactionId;
pub use money::{Currency, Money, DEFAULT_CURRENCY};
pub use transaction::{NegativeAmountPolicy, NewTransaction, Transaction, TransactionKind};
