//! Money type for representing monetary values.
//!
//! Amounts are stored in currency minor units (cents) to avoid the
//! floating-point drift that plagues monetary arithmetic. The storefront
//! trades in a single currency, so no currency tag is carried.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Mul, Sub};

/// A monetary value in minor units.
///
/// Serializes as a bare integer, matching the backend's `price` and
/// `totalAmount` fields.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    /// Zero amount.
    pub const ZERO: Money = Money(0);

    /// Create a Money value from minor units (e.g., cents).
    pub const fn from_minor(minor: i64) -> Self {
        Self(minor)
    }

    /// The amount in minor units.
    pub const fn minor(&self) -> i64 {
        self.0
    }

    /// Check if this is zero.
    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Check if this is negative.
    pub fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Checked addition, `None` on overflow.
    pub fn try_add(&self, other: Money) -> Option<Money> {
        self.0.checked_add(other.0).map(Money)
    }

    /// Checked subtraction, `None` on overflow.
    pub fn try_sub(&self, other: Money) -> Option<Money> {
        self.0.checked_sub(other.0).map(Money)
    }

    /// Checked multiplication by a scalar, `None` on overflow.
    pub fn try_mul(&self, factor: i64) -> Option<Money> {
        self.0.checked_mul(factor).map(Money)
    }

    /// Sum an iterator of Money values, `None` on overflow.
    pub fn try_sum(mut iter: impl Iterator<Item = Money>) -> Option<Money> {
        iter.try_fold(Money::ZERO, |acc, m| acc.try_add(m))
    }

    /// Convert to a decimal amount (display only, never for arithmetic).
    pub fn to_decimal(&self) -> f64 {
        self.0 as f64 / 100.0
    }
}

impl Add for Money {
    type Output = Money;

    /// # Panics
    /// Panics on overflow. Use [`Money::try_add`] for fallible addition.
    fn add(self, other: Money) -> Money {
        self.try_add(other).expect("overflow in money addition")
    }
}

impl Sub for Money {
    type Output = Money;

    /// # Panics
    /// Panics on overflow. Use [`Money::try_sub`] for fallible subtraction.
    fn sub(self, other: Money) -> Money {
        self.try_sub(other).expect("overflow in money subtraction")
    }
}

impl Mul<i64> for Money {
    type Output = Money;

    /// # Panics
    /// Panics on overflow. Use [`Money::try_mul`] for fallible multiplication.
    fn mul(self, factor: i64) -> Money {
        self.try_mul(factor)
            .expect("overflow in money multiplication")
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        write!(f, "{}${}.{:02}", sign, abs / 100, abs % 100)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_minor() {
        let m = Money::from_minor(4999);
        assert_eq!(m.minor(), 4999);
        assert!(!m.is_zero());
    }

    #[test]
    fn test_display() {
        assert_eq!(Money::from_minor(4999).to_string(), "$49.99");
        assert_eq!(Money::from_minor(500).to_string(), "$5.00");
        assert_eq!(Money::from_minor(7).to_string(), "$0.07");
        assert_eq!(Money::from_minor(-250).to_string(), "-$2.50");
    }

    #[test]
    fn test_addition() {
        let total = Money::from_minor(1000) + Money::from_minor(500);
        assert_eq!(total, Money::from_minor(1500));
    }

    #[test]
    fn test_subtraction() {
        let rest = Money::from_minor(1000) - Money::from_minor(300);
        assert_eq!(rest, Money::from_minor(700));
    }

    #[test]
    fn test_multiply_by_quantity() {
        let line = Money::from_minor(200) * 5;
        assert_eq!(line, Money::from_minor(1000));
    }

    #[test]
    fn test_try_mul_overflow() {
        assert!(Money::from_minor(i64::MAX).try_mul(2).is_none());
    }

    #[test]
    fn test_try_sum() {
        let amounts = [Money::from_minor(100), Money::from_minor(250)];
        let sum = Money::try_sum(amounts.into_iter()).unwrap();
        assert_eq!(sum, Money::from_minor(350));

        let empty = Money::try_sum(std::iter::empty()).unwrap();
        assert_eq!(empty, Money::ZERO);
    }

    #[test]
    fn test_serde_transparent() {
        let m = Money::from_minor(999);
        assert_eq!(serde_json::to_string(&m).unwrap(), "999");
        let back: Money = serde_json::from_str("999").unwrap();
        assert_eq!(back, m);
    }
}
