//! Type-safe price representation using decimal arithmetic.
//!
//! The content API is not consistent about price encoding: list endpoints
//! return prices as JSON strings (`"1500000"`), while some mutation responses
//! return plain numbers. [`Price`] accepts both at deserialization time and
//! always holds a finite [`Decimal`], so downstream code never branches on
//! the wire representation.

use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use rust_decimal::prelude::FromPrimitive;
use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize};

/// A package price in the currency's standard unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Default)]
#[serde(transparent)]
pub struct Price(Decimal);

impl Price {
    /// Create a new price.
    #[must_use]
    pub const fn new(amount: Decimal) -> Self {
        Self(amount)
    }

    /// Get the underlying decimal amount.
    #[must_use]
    pub const fn amount(&self) -> Decimal {
        self.0
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for Price {
    fn from(amount: i64) -> Self {
        Self(Decimal::from(amount))
    }
}

impl FromStr for Price {
    type Err = rust_decimal::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Decimal::from_str(s.trim()).map(Self)
    }
}

impl<'de> Deserialize<'de> for Price {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct PriceVisitor;

        impl Visitor<'_> for PriceVisitor {
            type Value = Price;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a number or a numeric string")
            }

            fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
                Ok(Price(Decimal::from(v)))
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
                Ok(Price(Decimal::from(v)))
            }

            fn visit_f64<E: de::Error>(self, v: f64) -> Result<Self::Value, E> {
                Decimal::from_f64(v)
                    .map(Price)
                    .ok_or_else(|| E::custom(format!("price is not a finite number: {v}")))
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
                v.parse()
                    .map_err(|e| E::custom(format!("invalid price string {v:?}: {e}")))
            }
        }

        deserializer.deserialize_any(PriceVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_price_from_numeric_string() {
        let price: Price = serde_json::from_str("\"1500000\"").expect("string price");
        assert_eq!(price, Price::from(1_500_000));
    }

    #[test]
    fn test_price_from_number() {
        let price: Price = serde_json::from_str("1500000").expect("numeric price");
        assert_eq!(price, Price::from(1_500_000));
    }

    #[test]
    fn test_price_from_fractional_string() {
        let price: Price = serde_json::from_str("\"99.50\"").expect("fractional price");
        assert_eq!(price.to_string(), "99.50");
    }

    #[test]
    fn test_price_normalization_is_idempotent() {
        // Re-serializing then re-parsing an already-normalized price is a no-op.
        let price: Price = serde_json::from_str("\"1500000\"").expect("string price");
        let json = serde_json::to_string(&price).expect("serializes");
        let reparsed: Price = serde_json::from_str(&json).expect("round-trips");
        assert_eq!(price, reparsed);
    }

    #[test]
    fn test_price_rejects_garbage() {
        let result: Result<Price, _> = serde_json::from_str("\"not-a-price\"");
        assert!(result.is_err());
    }
}
