//! Reports module for Pennywise
//!
//! Computed summaries over the ledger: monthly totals with their matching
//! transactions and a per-category breakdown.

pub mod monthly;

pub use monthly::{CategoryTotal, MonthlyReport, ReportGenerator};
