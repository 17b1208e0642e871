//! Flat-rate shipping.

use crate::error::CommerceError;
use crate::money::Money;

/// Shipping cost applied uniformly to every order, regardless of cart
/// contents. No weight-based or distance-based computation.
pub const FLAT_RATE: Money = Money::from_minor(999);

/// Order total for a given cart subtotal: `subtotal + FLAT_RATE`.
pub fn final_total(subtotal: Money) -> Result<Money, CommerceError> {
    subtotal.try_add(FLAT_RATE).ok_or(CommerceError::Overflow)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_cart_still_pays_shipping() {
        assert_eq!(final_total(Money::ZERO).unwrap(), Money::from_minor(999));
    }

    #[test]
    fn test_single_line() {
        // one line: price 200, qty 5
        assert_eq!(
            final_total(Money::from_minor(1000)).unwrap(),
            Money::from_minor(1999)
        );
    }

    #[test]
    fn test_multiple_lines() {
        // 500*10 + 300*5 = 6500
        assert_eq!(
            final_total(Money::from_minor(6500)).unwrap(),
            Money::from_minor(7499)
        );
    }

    #[test]
    fn test_overflow() {
        assert!(matches!(
            final_total(Money::from_minor(i64::MAX)),
            Err(CommerceError::Overflow)
        ));
    }
}
