use std::cmp::Ordering;
use std::str::FromStr;

use rust_decimal::Decimal;
use rust_decimal::prelude::FromPrimitive;
use serde::{Deserialize, Serialize};

use crate::error::PriceError;

/// Value object for a monetary amount in a specific currency
///
/// Fields are private and there are no mutators: every operation that would
/// change a price produces a new instance. The currency code is normalized
/// to uppercase at construction, so all currency checks compare the
/// normalized form.
///
/// Arithmetic and ordering are exposed as named fallible methods instead of
/// operator impls. Mixing currencies must fail loudly, and `Add`/`PartialOrd`
/// have no way to report that.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawPrice")]
pub struct Price {
    amount: Decimal,
    currency: String,
}

/// Wire form of [`Price`], routed through [`Price::new`] on deserialization
/// so the currency normalization invariant survives a round trip.
#[derive(Deserialize)]
struct RawPrice {
    amount: Decimal,
    currency: String,
}

impl From<RawPrice> for Price {
    fn from(raw: RawPrice) -> Self {
        Price::new(raw.amount, raw.currency)
    }
}

impl Price {
    /// Create a new price; the currency code is upper-cased
    pub fn new(amount: Decimal, currency: impl Into<String>) -> Self {
        Self {
            amount,
            currency: currency.into().to_uppercase(),
        }
    }

    /// Create a price from a float amount
    ///
    /// Converts through the shortest decimal representation that round-trips,
    /// so `10.5` becomes exactly `10.5` rather than its binary expansion.
    pub fn from_f64(amount: f64, currency: impl Into<String>) -> Result<Self, PriceError> {
        let amount =
            Decimal::from_f64(amount).ok_or_else(|| PriceError::InvalidAmount(amount.to_string()))?;
        Ok(Self::new(amount, currency))
    }

    /// Create a price from a numeric string, preserving the supplied scale
    /// (`"10.50"` keeps both fractional digits)
    pub fn parse(amount: &str, currency: impl Into<String>) -> Result<Self, PriceError> {
        let amount =
            Decimal::from_str(amount).map_err(|_| PriceError::InvalidAmount(amount.to_string()))?;
        Ok(Self::new(amount, currency))
    }

    /// Get the decimal amount
    pub fn amount(&self) -> Decimal {
        self.amount
    }

    /// Get the normalized currency code
    pub fn currency(&self) -> &str {
        &self.currency
    }

    /// Add another price with the same currency
    pub fn add(&self, other: &Price) -> Result<Price, PriceError> {
        self.check_currency("add", other)?;
        Ok(Price {
            amount: self.amount + other.amount,
            currency: self.currency.clone(),
        })
    }

    /// Subtract another price with the same currency
    pub fn subtract(&self, other: &Price) -> Result<Price, PriceError> {
        self.check_currency("subtract", other)?;
        Ok(Price {
            amount: self.amount - other.amount,
            currency: self.currency.clone(),
        })
    }

    /// Multiply by a dimensionless scalar, preserving the currency
    pub fn multiply(&self, factor: Decimal) -> Price {
        Price {
            amount: self.amount * factor,
            currency: self.currency.clone(),
        }
    }

    /// Compare two prices with the same currency
    ///
    /// Returns [`PriceError::Incomparable`] when the currencies differ;
    /// there is no ordering between amounts in different currencies.
    pub fn compare(&self, other: &Price) -> Result<Ordering, PriceError> {
        if self.currency != other.currency {
            return Err(PriceError::Incomparable {
                left: self.currency.clone(),
                right: other.currency.clone(),
            });
        }
        Ok(self.amount.cmp(&other.amount))
    }

    /// Strictly less than, same currency only
    pub fn lt(&self, other: &Price) -> Result<bool, PriceError> {
        Ok(self.compare(other)? == Ordering::Less)
    }

    /// Less than or equal, same currency only
    pub fn le(&self, other: &Price) -> Result<bool, PriceError> {
        Ok(self.compare(other)? != Ordering::Greater)
    }

    /// Strictly greater than, same currency only
    pub fn gt(&self, other: &Price) -> Result<bool, PriceError> {
        Ok(self.compare(other)? == Ordering::Greater)
    }

    /// Greater than or equal, same currency only
    pub fn ge(&self, other: &Price) -> Result<bool, PriceError> {
        Ok(self.compare(other)? != Ordering::Less)
    }

    fn check_currency(&self, operation: &'static str, other: &Price) -> Result<(), PriceError> {
        if self.currency != other.currency {
            return Err(PriceError::CurrencyMismatch {
                operation,
                left: self.currency.clone(),
                right: other.currency.clone(),
            });
        }
        Ok(())
    }
}

impl std::fmt::Display for Price {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.amount, self.currency)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_construction_from_different_inputs() {
        let from_decimal = Price::new(dec!(10.50), "USD");
        assert_eq!(from_decimal.amount(), dec!(10.50));
        assert_eq!(from_decimal.currency(), "USD");

        let from_float = Price::from_f64(10.50, "EUR").unwrap();
        assert_eq!(from_float.amount(), dec!(10.50));

        let from_int = Price::new(Decimal::from(10), "GBP");
        assert_eq!(from_int.amount(), dec!(10));

        let from_string = Price::parse("10.50", "JPY").unwrap();
        assert_eq!(from_string.amount(), dec!(10.50));
    }

    #[test]
    fn test_currency_normalized_to_uppercase() {
        let price = Price::new(dec!(10), "usd");
        assert_eq!(price.currency(), "USD");

        // Mixed-case codes normalize too, so arithmetic sees them as equal
        let other = Price::new(dec!(5), "Usd");
        assert_eq!(price.add(&other).unwrap().amount(), dec!(15));
    }

    #[test]
    fn test_invalid_amounts_rejected() {
        assert!(matches!(
            Price::parse("not-a-number", "USD"),
            Err(PriceError::InvalidAmount(_))
        ));
        assert!(matches!(
            Price::from_f64(f64::NAN, "USD"),
            Err(PriceError::InvalidAmount(_))
        ));
    }

    #[test]
    fn test_addition() {
        let a = Price::new(dec!(10.50), "USD");
        let b = Price::new(dec!(5.25), "USD");
        let sum = a.add(&b).unwrap();
        assert_eq!(sum.amount(), dec!(15.75));
        assert_eq!(sum.currency(), "USD");
    }

    #[test]
    fn test_subtraction() {
        let a = Price::new(dec!(10.50), "USD");
        let b = Price::new(dec!(5.25), "USD");
        let diff = a.subtract(&b).unwrap();
        assert_eq!(diff.amount(), dec!(5.25));
        assert_eq!(diff.currency(), "USD");
    }

    #[test]
    fn test_add_then_subtract_round_trips() {
        let a = Price::new(dec!(42.17), "CHF");
        let b = Price::new(dec!(3.03), "CHF");
        assert_eq!(a.add(&b).unwrap().subtract(&b).unwrap(), a);
    }

    #[test]
    fn test_arithmetic_rejects_mixed_currencies() {
        let usd = Price::new(dec!(10.50), "USD");
        let eur = Price::new(dec!(5.25), "EUR");

        assert_eq!(
            usd.add(&eur),
            Err(PriceError::CurrencyMismatch {
                operation: "add",
                left: "USD".to_string(),
                right: "EUR".to_string(),
            })
        );
        assert_eq!(
            usd.subtract(&eur),
            Err(PriceError::CurrencyMismatch {
                operation: "subtract",
                left: "USD".to_string(),
                right: "EUR".to_string(),
            })
        );
    }

    #[test]
    fn test_multiplication_preserves_currency() {
        let price = Price::new(dec!(10.50), "USD");

        let doubled = price.multiply(dec!(2));
        assert_eq!(doubled.amount(), dec!(21.00));
        assert_eq!(doubled.currency(), "USD");

        assert_eq!(price.multiply(dec!(1.5)).amount(), dec!(15.75));
        assert_eq!(price.multiply(dec!(0.5)).amount(), dec!(5.25));
    }

    #[test]
    fn test_ordering_within_one_currency() {
        let high = Price::new(dec!(10.50), "USD");
        let low = Price::new(dec!(5.25), "USD");
        let high_again = Price::new(dec!(10.50), "USD");

        assert!(!high.lt(&low).unwrap());
        assert!(low.lt(&high).unwrap());
        assert!(!high.lt(&high_again).unwrap());

        assert!(low.le(&high).unwrap());
        assert!(high.le(&high_again).unwrap());

        assert!(high.gt(&low).unwrap());
        assert!(!high.gt(&high_again).unwrap());

        assert!(high.ge(&low).unwrap());
        assert!(high.ge(&high_again).unwrap());

        assert_eq!(low.compare(&high).unwrap(), Ordering::Less);
        assert_eq!(high.compare(&high_again).unwrap(), Ordering::Equal);
    }

    #[test]
    fn test_ordering_rejects_mixed_currencies() {
        let usd = Price::new(dec!(10.50), "USD");
        let eur = Price::new(dec!(10.50), "EUR");

        assert_eq!(
            usd.lt(&eur),
            Err(PriceError::Incomparable {
                left: "USD".to_string(),
                right: "EUR".to_string(),
            })
        );
        assert!(usd.compare(&eur).is_err());
    }

    #[test]
    fn test_equality_is_amount_and_currency() {
        let a = Price::new(dec!(10.50), "USD");
        let b = Price::new(dec!(5.25), "USD");
        let c = Price::new(dec!(10.50), "USD");
        let d = Price::new(dec!(10.50), "EUR");

        assert_ne!(a, b);
        assert_eq!(a, c);
        // Different currencies are unequal, not an error
        assert_ne!(a, d);
        // Decimal equality is by value, not by scale
        assert_eq!(Price::new(dec!(150.0), "USD"), Price::new(dec!(150), "USD"));
    }

    #[test]
    fn test_display_preserves_scale() {
        assert_eq!(Price::new(dec!(10.50), "USD").to_string(), "10.50 USD");
        assert_eq!(Price::new(dec!(150.0), "USD").to_string(), "150.0 USD");
    }

    #[test]
    fn test_deserialization_normalizes_currency() {
        let price: Price = serde_json::from_str(r#"{"amount":"10.50","currency":"usd"}"#).unwrap();
        assert_eq!(price, Price::new(dec!(10.50), "USD"));
    }
}
