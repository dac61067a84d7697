//! Money type for representing currency amounts
//!
//! Wraps a `rust_decimal::Decimal` so sums of API amounts such as `0.1 + 0.2`
//! stay exact. Snapshots carry amounts as JSON numbers; they are read and
//! written as numbers too.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Neg;

use crate::error::{FintrackError, FintrackResult};

/// A signed decimal monetary amount, in the unit of its currency
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(#[serde(with = "rust_decimal::serde::float")] Decimal);

impl Money {
    /// Create a Money amount from a decimal value
    pub const fn new(amount: Decimal) -> Self {
        Self(amount)
    }

    /// Create a Money amount from whole units and hundredths
    ///
    /// # Examples
    /// ```
    /// use fintrack::models::Money;
    /// let amount = Money::from_cents(1050); // 10.50
    /// assert_eq!(amount.to_string(), "$10.50");
    /// ```
    pub fn from_cents(cents: i64) -> Self {
        Self(Decimal::new(cents, 2))
    }

    /// Create a zero Money amount
    pub const fn zero() -> Self {
        Self(Decimal::ZERO)
    }

    /// Get the underlying decimal value
    pub const fn amount(&self) -> Decimal {
        self.0
    }

    /// Check if the amount is zero
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Check if the amount is strictly positive
    pub fn is_positive(&self) -> bool {
        self.0 > Decimal::ZERO
    }

    /// Check if the amount is strictly negative
    pub fn is_negative(&self) -> bool {
        self.0 < Decimal::ZERO
    }

    /// Get the absolute value
    pub fn abs(&self) -> Self {
        Self(self.0.abs())
    }

    /// Amount rounded half away from zero to two decimals, for display
    pub fn rounded(&self) -> Decimal {
        self.0
            .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
    }

    /// Two-decimal plain number, for CSV output
    pub fn to_fixed(&self) -> String {
        format!("{:.2}", self.rounded())
    }

    pub fn checked_add(self, other: Self) -> Option<Self> {
        self.0.checked_add(other.0).map(Self)
    }

    pub fn checked_sub(self, other: Self) -> Option<Self> {
        self.0.checked_sub(other.0).map(Self)
    }

    /// Add two amounts, failing instead of overflowing
    pub fn try_add(self, other: Self) -> FintrackResult<Self> {
        self.checked_add(other)
            .ok_or_else(|| overflow("addition", self, other))
    }

    /// Subtract two amounts, failing instead of overflowing
    pub fn try_sub(self, other: Self) -> FintrackResult<Self> {
        self.checked_sub(other)
            .ok_or_else(|| overflow("subtraction", self, other))
    }

    /// Sum amounts, failing on the first overflow
    pub fn try_sum<I>(amounts: I) -> FintrackResult<Self>
    where
        I: IntoIterator<Item = Self>,
    {
        amounts
            .into_iter()
            .try_fold(Self::zero(), |acc, amount| acc.try_add(amount))
    }

    /// Format with a currency symbol
    pub fn format_with_symbol(&self, symbol: &str) -> String {
        let rounded = self.rounded();
        if rounded.is_sign_negative() && !rounded.is_zero() {
            format!("-{}{:.2}", symbol, rounded.abs())
        } else {
            format!("{}{:.2}", symbol, rounded.abs())
        }
    }
}

impl Default for Money {
    fn default() -> Self {
        Self::zero()
    }
}

impl From<Decimal> for Money {
    fn from(amount: Decimal) -> Self {
        Self(amount)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format_with_symbol("$"))
    }
}

impl Neg for Money {
    type Output = Self;

    fn neg(self) -> Self {
        Self(-self.0)
    }
}

fn overflow(operation: &str, left: Money, right: Money) -> FintrackError {
    FintrackError::Validation(format!(
        "amount overflow in {} of {} and {}",
        operation, left.0, right.0
    ))
}

/// Check that a currency code looks like an ISO 4217 code ("USD", "EUR")
pub fn is_currency_code(code: &str) -> bool {
    code.len() == 3 && code.chars().all(|c| c.is_ascii_uppercase())
}
