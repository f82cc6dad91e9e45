//! Money type for representing currency amounts
//!
//! Amounts are exact decimals (`rust_decimal::Decimal`) so sums never drift.
//! Every amount carries its currency code, and arithmetic between two
//! amounts is only defined when the codes agree.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{PennywiseError, PennywiseResult};

/// Currency used when none is supplied
pub const DEFAULT_CURRENCY: &str = "GBP";

/// A three-letter currency code, always stored upper case
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Currency(String);

impl Currency {
    /// Parse a currency code such as "gbp" or "USD"
    pub fn parse(code: &str) -> PennywiseResult<Self> {
        let code = code.trim();
        if code.len() != 3 || !code.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(PennywiseError::validation(format!(
                "Invalid currency code '{}': expected three letters",
                code
            )));
        }
        Ok(Self(code.to_ascii_uppercase()))
    }

    /// The code as a string slice
    pub fn code(&self) -> &str {
        &self.0
    }

    /// Symbol accepted in front of typed amounts, if the currency has one
    pub fn symbol(&self) -> Option<char> {
        match self.0.as_str() {
            "GBP" => Some('£'),
            "USD" => Some('$'),
            "EUR" => Some('€'),
            _ => None,
        }
    }
}

impl Default for Currency {
    fn default() -> Self {
        Self(DEFAULT_CURRENCY.to_string())
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Currency {
    type Err = PennywiseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Currency {
    type Error = PennywiseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Currency> for String {
    fn from(currency: Currency) -> Self {
        currency.0
    }
}

/// An exact decimal amount in a single currency
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Money {
    amount: Decimal,
    currency: Currency,
}

impl Money {
    /// Create a Money amount
    ///
    /// # Examples
    /// ```
    /// use pennywise::models::{Currency, Money};
    /// use rust_decimal::Decimal;
    ///
    /// let amount = Money::new(Decimal::new(1250, 2), Currency::default());
    /// assert_eq!(amount.to_string(), "12.50 GBP");
    /// ```
    pub fn new(amount: Decimal, currency: Currency) -> Self {
        Self { amount, currency }
    }

    /// Create a Money amount where either part may be absent
    ///
    /// A missing amount is zero and a missing currency is the default code.
    pub fn from_parts(amount: Option<Decimal>, currency: Option<Currency>) -> Self {
        Self::new(amount.unwrap_or(Decimal::ZERO), currency.unwrap_or_default())
    }

    /// Create a zero amount in the given currency
    pub fn zero(currency: Currency) -> Self {
        Self::new(Decimal::ZERO, currency)
    }

    /// Parse a decimal amount such as "12.34", "-5" or "£7.10"
    ///
    /// A leading symbol is accepted only when it belongs to `currency`, and
    /// input with more precision than a `Decimal` holds is rejected.
    pub fn parse(text: &str, currency: Currency) -> PennywiseResult<Self> {
        let text = text.trim();
        let (negative, digits) = match text.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, text),
        };
        let digits = match currency.symbol() {
            Some(symbol) => digits.strip_prefix(symbol).unwrap_or(digits),
            None => digits,
        };

        if digits.starts_with(['-', '+']) {
            return Err(PennywiseError::validation(format!("Invalid amount '{}'", text)));
        }

        // from_str_exact refuses input it would have to round
        let amount = Decimal::from_str_exact(digits).map_err(|_| {
            PennywiseError::validation(format!("Invalid amount '{}'", text))
        })?;

        Ok(Self::new(if negative { -amount } else { amount }, currency))
    }

    /// The decimal amount
    pub fn amount(&self) -> Decimal {
        self.amount
    }

    /// The currency code
    pub fn currency(&self) -> &Currency {
        &self.currency
    }

    /// Check if the amount is zero
    pub fn is_zero(&self) -> bool {
        self.amount.is_zero()
    }

    /// Check if the amount is below zero
    pub fn is_negative(&self) -> bool {
        self.amount < Decimal::ZERO
    }

    /// Add two amounts of the same currency
    ///
    /// Neither operand is modified. Fails with `CurrencyMismatch` when the
    /// codes differ.
    pub fn add(&self, other: &Money) -> PennywiseResult<Money> {
        if self.currency != other.currency {
            return Err(PennywiseError::currency_mismatch(
                &self.currency,
                &other.currency,
            ));
        }

        let amount = self
            .amount
            .checked_add(other.amount)
            .ok_or_else(|| PennywiseError::validation("Amount overflow"))?;

        Ok(Self::new(amount, self.currency.clone()))
    }

    /// Sum amounts starting from zero in `currency`
    pub fn sum<'a, I>(amounts: I, currency: &Currency) -> PennywiseResult<Money>
    where
        I: IntoIterator<Item = &'a Money>,
    {
        amounts
            .into_iter()
            .try_fold(Money::zero(currency.clone()), |acc, m| acc.add(m))
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.amount, self.currency)
    }
}
