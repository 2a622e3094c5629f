//! Type-safe price representation using decimal arithmetic.

use std::fmt;
use std::iter::Sum;
use std::ops::{Add, Mul};

use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A price in the shop's currency (yuan).
///
/// Serialized as a plain JSON number so persisted carts stay readable by
/// clients that store prices as numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Price(Decimal);

impl Price {
    /// Create a new price.
    #[must_use]
    pub const fn new(amount: Decimal) -> Self {
        Self(amount)
    }

    /// A price of whole yuan.
    #[must_use]
    pub fn from_yuan(yuan: i64) -> Self {
        Self(Decimal::from(yuan))
    }

    /// The zero price.
    #[must_use]
    pub const fn zero() -> Self {
        Self(Decimal::ZERO)
    }

    /// Get the underlying amount.
    #[must_use]
    pub const fn amount(&self) -> Decimal {
        self.0
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "¥{:.2}", self.0)
    }
}

impl Add for Price {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self(self.0 + rhs.0)
    }
}

impl Mul<u32> for Price {
    type Output = Self;

    fn mul(self, quantity: u32) -> Self {
        Self(self.0 * Decimal::from(quantity))
    }
}

impl Sum for Price {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::zero(), Add::add)
    }
}

impl Serialize for Price {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        rust_decimal::serde::float::serialize(&self.0, serializer)
    }
}

impl<'de> Deserialize<'de> for Price {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        rust_decimal::serde::float::deserialize(deserializer).map(Self)
    }
}

impl From<Decimal> for Price {
    fn from(amount: Decimal) -> Self {
        Self(amount)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_price_display() {
        assert_eq!(Price::from_yuan(128).to_string(), "¥128.00");
        assert_eq!(Price::new(Decimal::new(9950, 2)).to_string(), "¥99.50");
    }

    #[test]
    fn test_price_line_total() {
        assert_eq!(Price::from_yuan(98) * 3, Price::from_yuan(294));
        assert_eq!(Price::from_yuan(98) * 0, Price::zero());
    }

    #[test]
    fn test_price_sum() {
        let total: Price = [Price::from_yuan(1), Price::from_yuan(2), Price::from_yuan(3)]
            .into_iter()
            .sum();
        assert_eq!(total, Price::from_yuan(6));

        let empty: Price = std::iter::empty().sum();
        assert_eq!(empty, Price::zero());
    }

    #[test]
    fn test_price_serializes_as_number() {
        let json = serde_json::to_value(Price::from_yuan(128)).unwrap();
        assert!(json.is_number());

        let parsed: Price = serde_json::from_str("99.5").unwrap();
        assert_eq!(parsed, Price::new(Decimal::new(995, 1)));
    }

    #[test]
    fn test_price_rejects_string() {
        assert!(serde_json::from_str::<Price>("\"abc\"").is_err());
    }
}
