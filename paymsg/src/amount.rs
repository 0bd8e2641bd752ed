//! Monetary amounts in currency minor units.
//!
//! The gateway takes amounts as an integer count of the currency's smallest
//! unit, so `£12.34` travels as `1234` with currency `GBP` while `¥1234`
//! travels as `1234` with currency `JPY`. [`Amount`] pairs the minor-unit
//! value with a validated ISO 4217 code and can be built from a
//! human-readable decimal string, scaled by the currency's exponent.

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use std::fmt;

use crate::error::ValidationError;

/// A monetary amount expressed in the minor units of its currency.
///
/// Immutable once constructed; the currency is validated against the ISO
/// 4217 table at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Amount {
    minor: u64,
    currency: String,
}

impl Amount {
    /// Creates an amount from a minor-unit value and an ISO 4217 code.
    pub fn new<S: Into<String>>(minor: u64, currency: S) -> Result<Self, ValidationError> {
        let currency = currency.into();
        if !paymsg_iso::currencies::is_valid(&currency) {
            return Err(ValidationError::UnknownCurrency(currency));
        }
        Ok(Self { minor, currency })
    }

    /// Creates an amount from a human-readable decimal string.
    ///
    /// The value is scaled by the currency's minor-unit exponent, so
    /// `("12.34", "GBP")` yields 1234 minor units. Negative values and
    /// values with more decimal places than the currency carries are
    /// rejected.
    pub fn from_decimal_str(value: &str, currency: &str) -> Result<Self, ValidationError> {
        let exponent = paymsg_iso::currencies::exponent(currency)
            .ok_or_else(|| ValidationError::UnknownCurrency(currency.to_owned()))?;

        let decimal = Decimal::from_str_exact(value)
            .map_err(|_| ValidationError::InvalidAmount(value.to_owned()))?;
        if decimal.is_sign_negative() {
            return Err(ValidationError::InvalidAmount(value.to_owned()));
        }

        let scale = Decimal::from(10u64.pow(exponent));
        let scaled = decimal
            .checked_mul(scale)
            .ok_or_else(|| ValidationError::InvalidAmount(value.to_owned()))?;
        if !scaled.fract().is_zero() {
            return Err(ValidationError::InvalidAmount(value.to_owned()));
        }
        let minor = scaled
            .to_u64()
            .ok_or_else(|| ValidationError::InvalidAmount(value.to_owned()))?;

        Ok(Self {
            minor,
            currency: currency.to_owned(),
        })
    }

    /// Returns the amount in minor units.
    #[must_use]
    pub const fn minor_units(&self) -> u64 {
        self.minor
    }

    /// Returns the ISO 4217 currency code.
    #[must_use]
    pub fn currency(&self) -> &str {
        &self.currency
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Currency was validated at construction, so the exponent is known.
        let exponent = paymsg_iso::currencies::exponent(&self.currency).unwrap_or(0);
        if exponent == 0 {
            return write!(f, "{} {}", self.minor, self.currency);
        }
        let scale = 10u64.pow(exponent);
        write!(
            f,
            "{}.{:0width$} {}",
            self.minor / scale,
            self.minor % scale,
            self.currency,
            width = exponent as usize
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_validates_currency() {
        let amount = Amount::new(1234, "GBP").unwrap();
        assert_eq!(amount.minor_units(), 1234);
        assert_eq!(amount.currency(), "GBP");
        assert!(matches!(
            Amount::new(1, "XYZ"),
            Err(ValidationError::UnknownCurrency(_))
        ));
    }

    #[test]
    fn test_from_decimal_str_scales_by_exponent() {
        assert_eq!(Amount::from_decimal_str("12.34", "GBP").unwrap().minor_units(), 1234);
        assert_eq!(Amount::from_decimal_str("1234", "JPY").unwrap().minor_units(), 1234);
        assert_eq!(Amount::from_decimal_str("1.234", "BHD").unwrap().minor_units(), 1234);
    }

    #[test]
    fn test_from_decimal_str_rejects_excess_precision() {
        assert!(Amount::from_decimal_str("12.345", "GBP").is_err());
        assert!(Amount::from_decimal_str("1.5", "JPY").is_err());
    }

    #[test]
    fn test_from_decimal_str_rejects_garbage() {
        assert!(Amount::from_decimal_str("-1.00", "GBP").is_err());
        assert!(Amount::from_decimal_str("twelve", "GBP").is_err());
    }

    #[test]
    fn test_display_uses_currency_exponent() {
        assert_eq!(Amount::new(1234, "GBP").unwrap().to_string(), "12.34 GBP");
        assert_eq!(Amount::new(1234, "JPY").unwrap().to_string(), "1234 JPY");
        assert_eq!(Amount::new(105, "GBP").unwrap().to_string(), "1.05 GBP");
    }
}
