//! Fixed-point amounts with seven decimal places.

use std::{
    fmt::{self, Display, Formatter},
    str::FromStr,
};

#[cfg(feature = "datasize")]
use datasize::DataSize;
#[cfg(any(feature = "testing", test))]
use rand::Rng;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The number of stroops in one unit of an asset.
pub const STROOPS_PER_UNIT: i64 = 10_000_000;

const DECIMAL_PLACES: usize = 7;

/// An amount of some asset, counted in stroops (one ten-millionth of a unit).
///
/// Displays as a decimal string with exactly seven fractional digits and no rounding.
#[derive(
    Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[cfg_attr(feature = "datasize", derive(DataSize))]
#[serde(transparent)]
pub struct Amount(i64);

impl Amount {
    /// The zero amount.
    pub const ZERO: Amount = Amount(0);

    /// Constructs a new `Amount` from a count of stroops.
    pub const fn new(stroops: i64) -> Self {
        Amount(stroops)
    }

    /// Constructs an `Amount` holding `units` whole units, or `None` on overflow.
    pub fn from_units(units: i64) -> Option<Self> {
        units.checked_mul(STROOPS_PER_UNIT).map(Amount)
    }

    /// Returns the count of stroops.
    pub const fn stroops(&self) -> i64 {
        self.0
    }

    /// Returns `true` if the amount is zero.
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checked addition. Returns `None` if overflow occurred.
    pub fn checked_add(&self, rhs: Amount) -> Option<Amount> {
        self.0.checked_add(rhs.0).map(Amount)
    }

    /// Returns a random, non-negative `Amount`.
    #[cfg(any(feature = "testing", test))]
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Amount(rng.gen_range(0..i64::MAX))
    }
}

impl From<i64> for Amount {
    fn from(stroops: i64) -> Self {
        Amount(stroops)
    }
}

impl Display for Amount {
    fn fmt(&self, formatter: &mut Formatter) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let magnitude = self.0.unsigned_abs();
        let per_unit = STROOPS_PER_UNIT as u64;
        write!(
            formatter,
            "{}{}.{:0width$}",
            sign,
            magnitude / per_unit,
            magnitude % per_unit,
            width = DECIMAL_PLACES
        )
    }
}

/// Errors returned when parsing an [`Amount`] from a decimal string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseAmountError {
    /// The input holds no digits.
    #[error("amount is empty")]
    Empty,
    /// The input holds something other than an optional sign, digits and a single `.`.
    #[error("invalid character in amount {0:?}")]
    InvalidCharacter(String),
    /// More than seven digits follow the decimal point.
    #[error("amount {0:?} has more than seven decimal places")]
    TooPrecise(String),
    /// The amount does not fit in 64 bits of stroops.
    #[error("amount {0:?} is out of range")]
    OutOfRange(String),
}

impl FromStr for Amount {
    type Err = ParseAmountError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let (negative, unsigned) = match input.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, input),
        };
        let (whole, fraction) = match unsigned.split_once('.') {
            Some((whole, fraction)) => (whole, fraction),
            None => (unsigned, ""),
        };
        if whole.is_empty() && fraction.is_empty() {
            return Err(ParseAmountError::Empty);
        }
        let all_digits = |part: &str| part.bytes().all(|byte| byte.is_ascii_digit());
        if !all_digits(whole) || !all_digits(fraction) {
            return Err(ParseAmountError::InvalidCharacter(input.to_string()));
        }
        if fraction.len() > DECIMAL_PLACES {
            return Err(ParseAmountError::TooPrecise(input.to_string()));
        }

        let out_of_range = || ParseAmountError::OutOfRange(input.to_string());
        let mut magnitude: i128 = 0;
        for digit in whole
            .bytes()
            .chain(fraction.bytes())
            .chain(std::iter::repeat(b'0').take(DECIMAL_PLACES - fraction.len()))
        {
            magnitude = magnitude * 10 + i128::from(digit - b'0');
            if magnitude > i128::from(i64::MAX) + 1 {
                return Err(out_of_range());
            }
        }
        let signed = if negative { -magnitude } else { magnitude };
        i64::try_from(signed)
            .map(Amount)
            .map_err(|_| out_of_range())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_display_seven_decimal_places() {
        assert_eq!(Amount::new(10_000_000_000).to_string(), "1000.0000000");
        assert_eq!(Amount::new(100_000_000).to_string(), "10.0000000");
        assert_eq!(Amount::new(1).to_string(), "0.0000001");
        assert_eq!(Amount::new(0).to_string(), "0.0000000");
        assert_eq!(Amount::new(123_456_789).to_string(), "12.3456789");
    }

    #[test]
    fn should_display_negative_amounts() {
        assert_eq!(Amount::new(-1).to_string(), "-0.0000001");
        assert_eq!(Amount::new(-25_000_000).to_string(), "-2.5000000");
    }

    #[test]
    fn should_display_extremes_without_overflow() {
        assert_eq!(Amount::new(i64::MAX).to_string(), "922337203685.4775807");
        assert_eq!(Amount::new(i64::MIN).to_string(), "-922337203685.4775808");
    }

    #[test]
    fn should_parse_decimal_strings() {
        assert_eq!("1000".parse::<Amount>(), Ok(Amount::new(10_000_000_000)));
        assert_eq!("12.3456789".parse::<Amount>(), Ok(Amount::new(123_456_789)));
        assert_eq!(".5".parse::<Amount>(), Ok(Amount::new(5_000_000)));
        assert_eq!("-0.0000001".parse::<Amount>(), Ok(Amount::new(-1)));
        assert_eq!(
            "-922337203685.4775808".parse::<Amount>(),
            Ok(Amount::new(i64::MIN))
        );
    }

    #[test]
    fn should_reject_invalid_decimal_strings() {
        assert_eq!("".parse::<Amount>(), Err(ParseAmountError::Empty));
        assert!(matches!(
            "1,000".parse::<Amount>(),
            Err(ParseAmountError::InvalidCharacter(_))
        ));
        assert!(matches!(
            "0.00000001".parse::<Amount>(),
            Err(ParseAmountError::TooPrecise(_))
        ));
        assert!(matches!(
            "922337203685.4775808".parse::<Amount>(),
            Err(ParseAmountError::OutOfRange(_))
        ));
    }

    #[test]
    fn display_should_roundtrip_through_parse() {
        for stroops in [0, 1, -1, 99_999_999, i64::MAX, i64::MIN] {
            let amount = Amount::new(stroops);
            assert_eq!(amount.to_string().parse::<Amount>(), Ok(amount));
        }
    }
}
