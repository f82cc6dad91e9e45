//! Display formatting for terminal output
//!
//! Fixed textual layouts for transactions and reports.

pub mod report;
pub mod transaction;

pub use report::{format_category_breakdown, format_monthly_report};
pub use transaction::{format_summaries, format_transaction_list, format_transaction_row};
