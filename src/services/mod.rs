//! Service layer for Pennywise
//!
//! The service layer provides business logic on top of the ledger, handling
//! input defaults and the negative-amount policy.

pub mod transaction;

pub use transaction::TransactionService;
