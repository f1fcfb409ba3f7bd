//! Price type for monetary amounts.
//!
//! Amounts are stored in cents to avoid the floating-point drift that
//! plagues running cart totals. Rendering always produces exactly two
//! decimal places, which is the format the UI displays.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Mul};

/// A monetary amount in cents.
///
/// Serializes as a bare integer, so a document stores `"price": 1999`
/// for $19.99.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default,
)]
#[serde(transparent)]
pub struct Price {
    /// Amount in cents.
    pub cents: i64,
}

impl Price {
    /// Create a price from cents.
    pub fn from_cents(cents: i64) -> Self {
        Self { cents }
    }

    /// Create a price from a decimal amount.
    ///
    /// ```
    /// use trolley_core::price::Price;
    /// let price = Price::from_decimal(49.99);
    /// assert_eq!(price.cents, 4999);
    /// ```
    pub fn from_decimal(amount: f64) -> Self {
        Self {
            cents: (amount * 100.0).round() as i64,
        }
    }

    /// The zero amount.
    pub fn zero() -> Self {
        Self { cents: 0 }
    }

    /// Check if this is zero.
    pub fn is_zero(&self) -> bool {
        self.cents == 0
    }

    /// Multiply by a quantity. Saturates on overflow.
    pub fn multiply(&self, quantity: i64) -> Price {
        Price {
            cents: self.cents.saturating_mul(quantity),
        }
    }

    /// Sum an iterator of prices. Saturates on overflow.
    pub fn sum<'a>(iter: impl Iterator<Item = &'a Price>) -> Price {
        iter.fold(Price::zero(), |acc, p| acc + *p)
    }

    /// Render with exactly two decimal places (e.g., `"49.99"`).
    pub fn display(&self) -> String {
        let sign = if self.cents < 0 { "-" } else { "" };
        let abs = self.cents.unsigned_abs();
        format!("{}{}.{:02}", sign, abs / 100, abs % 100)
    }
}

impl Add for Price {
    type Output = Price;

    fn add(self, other: Price) -> Price {
        Price {
            cents: self.cents.saturating_add(other.cents),
        }
    }
}

impl Mul<i64> for Price {
    type Output = Price;

    fn mul(self, quantity: i64) -> Price {
        self.multiply(quantity)
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_price_from_cents() {
        let p = Price::from_cents(4999);
        assert_eq!(p.cents, 4999);
    }

    #[test]
    fn test_price_from_decimal() {
        assert_eq!(Price::from_decimal(49.99).cents, 4999);
        assert_eq!(Price::from_decimal(10.0).cents, 1000);
        assert_eq!(Price::from_decimal(0.1).cents, 10);
    }

    #[test]
    fn test_price_display_two_places() {
        assert_eq!(Price::from_cents(2000).display(), "20.00");
        assert_eq!(Price::from_cents(1999).display(), "19.99");
        assert_eq!(Price::from_cents(5).display(), "0.05");
        assert_eq!(Price::zero().display(), "0.00");
        assert_eq!(Price::from_cents(-50).display(), "-0.50");
    }

    #[test]
    fn test_price_multiply() {
        let p = Price::from_cents(1000);
        assert_eq!(p.multiply(3).cents, 3000);
        assert_eq!((p * 2).cents, 2000);
    }

    #[test]
    fn test_price_addition() {
        let a = Price::from_cents(1000);
        let b = Price::from_cents(500);
        assert_eq!((a + b).cents, 1500);
    }

    #[test]
    fn test_price_sum() {
        let prices = [
            Price::from_cents(100),
            Price::from_cents(250),
            Price::from_cents(50),
        ];
        assert_eq!(Price::sum(prices.iter()).cents, 400);
    }

    #[test]
    fn test_price_multiply_saturates() {
        let p = Price::from_cents(i64::MAX);
        assert_eq!(p.multiply(2).cents, i64::MAX);
    }

    #[test]
    fn test_price_serde_transparent() {
        let json = serde_json::to_string(&Price::from_cents(1999)).unwrap();
        assert_eq!(json, "1999");

        let back: Price = serde_json::from_str("1999").unwrap();
        assert_eq!(back.cents, 1999);
    }
}
