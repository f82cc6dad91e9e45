//! Pennywise - console personal finance tracker
//!
//! This library provides an in-memory ledger of transactions together with
//! the operations a small finance tracker needs: recording transactions,
//! listing and filtering them, and totalling a calendar month.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Money, categories and transactions
//! - `ledger`: The in-memory transaction list and its filters
//! - `services`: Transaction creation and policy checks
//! - `reports`: Monthly report generation
//! - `display`: Fixed textual layouts
//! - `console`: Line-based interactive session
//!
//! # Example
//!
//! ```rust
//! use chrono::NaiveDate;
//! use pennywise::ledger::Ledger;
//! use pennywise::models::{Category, Currency, Money, Transaction};
//! use pennywise::reports::ReportGenerator;
//! use rust_decimal::Decimal;
//!
//! let mut ledger = Ledger::new();
//! ledger.add(Transaction::with_details(
//!     "Lunch",
//!     Money::new(Decimal::new(1250, 2), Currency::default()),
//!     Category::Food,
//!     NaiveDate::from_ymd_opt(2025, 6, 15),
//! ));
//!
//! let report = ReportGenerator::default().monthly_report(&ledger, 2025, 6)?;
//! assert_eq!(report.total().to_string(), "12.50 GBP");
//! # Ok::<(), pennywise::PennywiseError>(())
//! ```

pub mod config;
pub mod console;
pub mod display;
pub mod error;
pub mod ledger;
pub mod models;
pub mod reports;
pub mod services;

pub use error::{PennywiseError, PennywiseResult};

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes the global tracing subscriber, writing to stderr
///
/// `RUST_LOG` takes precedence over `default_filter`.
pub fn init_tracing(default_filter: &str) {
    INIT_TRACING.call_once(|| {
        use tracing_subscriber::{fmt, EnvFilter};

        let filter = EnvFilter::try_from_default_env()
            .or_else(|_| EnvFilter::try_new(default_filter))
            .unwrap_or_else(|_| EnvFilter::new("warn"));

        fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();
    });
}
