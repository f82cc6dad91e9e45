//! Custom error types for Pennywise
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions. Every variant is recoverable: the console
//! reports it and keeps reading commands.

use thiserror::Error;

use crate::models::Currency;

/// The main error type for Pennywise operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PennywiseError {
    /// Malformed numeric, date, category or currency input
    #[error("Validation error: {0}")]
    Validation(String),

    /// Arithmetic between two amounts in different currencies
    #[error("Currency mismatch: expected {expected}, found {found}")]
    CurrencyMismatch { expected: Currency, found: Currency },

    /// Amount rejected by the negative-amount policy
    #[error("Negative amount not allowed: {0}")]
    NegativeAmount(String),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),
}

impl PennywiseError {
    /// Create a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Create a currency mismatch error
    pub fn currency_mismatch(expected: &Currency, found: &Currency) -> Self {
        Self::CurrencyMismatch {
            expected: expected.clone(),
            found: found.clone(),
        }
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Check if this is a currency mismatch
    pub fn is_currency_mismatch(&self) -> bool {
        matches!(self, Self::CurrencyMismatch { .. })
    }

    /// Check if this was raised by the negative-amount policy
    pub fn is_negative_amount(&self) -> bool {
        matches!(self, Self::NegativeAmount(_))
    }
}

// Implement From traits for common error types

impl From<std::io::Error> for PennywiseError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for PennywiseError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for Pennywise operations
pub type PennywiseResult<T> = Result<T, PennywiseError>;
