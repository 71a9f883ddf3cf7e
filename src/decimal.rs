//! Decimal amount type for balances and prices.
//!
//! Uses `rust_decimal` internally so balance arithmetic and USD valuations
//! stay exact instead of accumulating floating-point errors.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::ops::{Div, Mul};
use std::str::FromStr;

/// A decimal amount, used for both token balances and USD unit prices.
///
/// The value keeps whatever scale the input carried; display formatting
/// (the fixed 2-decimal rendering) happens in [`Amount::formatted`] rather
/// than at construction, so USD valuations multiply at full precision.
///
/// # Examples
///
/// ```
/// use std::str::FromStr;
/// use wallet_report::Amount;
///
/// let amount = Amount::from_str("10.5").unwrap();
/// assert_eq!(amount.formatted(), "10.50");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct Amount(Decimal);

impl Amount {
    /// Decimal places used for display formatting.
    pub const DISPLAY_SCALE: u32 = 2;

    /// Zero value.
    pub const ZERO: Self = Amount(Decimal::ZERO);

    /// Creates a new `Amount` from a raw `Decimal`.
    pub fn new(value: Decimal) -> Self {
        Amount(value)
    }

    /// Returns `true` if this value is zero.
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Returns `true` if this value is strictly greater than zero.
    pub fn is_positive(&self) -> bool {
        self.0 > Decimal::ZERO
    }

    /// Renders the amount with exactly 2 decimal digits.
    ///
    /// Precision is fixed regardless of currency; values with more than
    /// 2 decimals are rounded for display only.
    pub fn formatted(&self) -> String {
        let rounded = self
            .0
            .round_dp_with_strategy(Self::DISPLAY_SCALE, RoundingStrategy::MidpointAwayFromZero);
        format!("{:.prec$}", rounded, prec = Self::DISPLAY_SCALE as usize)
    }

    /// Rounds to the given number of decimal places.
    pub fn round_dp(&self, dp: u32) -> Self {
        Amount(self.0.round_dp(dp))
    }
}

impl FromStr for Amount {
    type Err = rust_decimal::Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let trimmed = s.trim();
        let decimal = Decimal::from_str(trimmed)?;
        Ok(Amount(decimal))
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Mul for Amount {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        Amount(self.0 * rhs.0)
    }
}

impl Div for Amount {
    type Output = Self;

    /// Division panics on a zero divisor; callers must validate first.
    fn div(self, rhs: Self) -> Self::Output {
        Amount(self.0 / rhs.0)
    }
}

impl Serialize for Amount {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0.to_string())
    }
}

impl<'de> Deserialize<'de> for Amount {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        // Accepts both CSV strings and JSON numbers (the price feed uses
        // plain numeric values).
        let decimal = <Decimal as Deserialize>::deserialize(deserializer)?;
        Ok(Amount(decimal))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_formatted_uses_two_decimals() {
        let a = Amount::from_str("5").unwrap();
        assert_eq!(a.formatted(), "5.00");

        let a = Amount::from_str("1.5").unwrap();
        assert_eq!(a.formatted(), "1.50");

        let a = Amount::from_str("1.234").unwrap();
        assert_eq!(a.formatted(), "1.23");

        let a = Amount::from_str("  2.5  ").unwrap();
        assert_eq!(a.formatted(), "2.50");
    }

    #[test]
    fn test_display_preserves_input_scale() {
        let a = Amount::from_str("10.5").unwrap();
        assert_eq!(a.to_string(), "10.5");

        let a = Amount::from_str("3000").unwrap();
        assert_eq!(a.to_string(), "3000");
    }

    #[test]
    fn test_multiplication_for_usd_value() {
        let price = Amount::from_str("3000").unwrap();
        let amount = Amount::from_str("2").unwrap();
        assert_eq!((price * amount).to_string(), "6000");
    }

    #[test]
    fn test_is_positive() {
        assert!(Amount::from_str("0.01").unwrap().is_positive());
        assert!(!Amount::ZERO.is_positive());
        assert!(!Amount::from_str("-1.0").unwrap().is_positive());
    }

    #[test]
    fn test_round_dp() {
        let a = Amount::from_str("1.123456789").unwrap();
        assert_eq!(a.round_dp(8).to_string(), "1.12345679");
    }
}
