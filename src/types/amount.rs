//! Value amounts in the smallest indivisible unit
//!
//! [`ValueAmount`] is the single canonical amount type of the ledger. It wraps
//! an arbitrary-precision unsigned integer, so sums of any number of amounts
//! can never overflow or be truncated.

use super::error::AmountParseError;
use num_bigint::BigUint;
use num_traits::Zero;
use std::fmt;
use std::ops::{Add, AddAssign};
use std::str::FromStr;

/// Number of decimal places between one ether and its base unit (wei)
pub const ETHER_DECIMALS: u32 = 18;

/// Non-negative, unbounded-precision quantity in base units
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ValueAmount(BigUint);

impl ValueAmount {
    /// The zero amount
    pub fn zero() -> Self {
        ValueAmount(BigUint::zero())
    }

    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Exact sum of a sequence of amounts
    pub fn sum<'a, I>(amounts: I) -> Self
    where
        I: IntoIterator<Item = &'a ValueAmount>,
    {
        amounts
            .into_iter()
            .fold(ValueAmount::zero(), |total, amount| total + amount)
    }

    /// Convert a decimal string expressed in whole units into base units
    ///
    /// `"1.5"` with 18 decimals becomes `1500000000000000000`. The conversion
    /// is exact at any magnitude: digits are shifted, never rounded. Trailing
    /// zeros past `decimals` are accepted, any other digit there is rejected.
    ///
    /// # Errors
    ///
    /// Returns an error if the input is empty, not a decimal number, negative,
    /// or finer than one base unit.
    pub fn from_decimal_units(input: &str, decimals: u32) -> Result<Self, AmountParseError> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(AmountParseError::Empty);
        }
        if trimmed.starts_with('-') {
            return Err(AmountParseError::Negative {
                input: trimmed.to_string(),
            });
        }

        let (whole, fraction) = trimmed.split_once('.').unwrap_or((trimmed, ""));
        let is_digits = |part: &str| part.bytes().all(|b| b.is_ascii_digit());
        if (whole.is_empty() && fraction.is_empty()) || !is_digits(whole) || !is_digits(fraction)
        {
            return Err(AmountParseError::invalid_digits(trimmed));
        }

        let fraction = fraction.trim_end_matches('0');
        let scale = decimals as usize;
        if fraction.len() > scale {
            return Err(AmountParseError::TooPrecise {
                input: trimmed.to_string(),
                decimals,
            });
        }

        let mut digits = String::with_capacity(whole.len() + scale);
        digits.push_str(whole);
        digits.push_str(fraction);
        digits.extend(std::iter::repeat('0').take(scale - fraction.len()));
        if digits.is_empty() {
            return Ok(ValueAmount::zero());
        }

        BigUint::parse_bytes(digits.as_bytes(), 10)
            .map(ValueAmount)
            .ok_or_else(|| AmountParseError::invalid_digits(trimmed))
    }
}

impl FromStr for ValueAmount {
    type Err = AmountParseError;

    /// Parse a decimal integer in base units (no sign, no fraction)
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(AmountParseError::Empty);
        }
        if !trimmed.bytes().all(|b| b.is_ascii_digit()) {
            return Err(AmountParseError::invalid_digits(trimmed));
        }

        BigUint::parse_bytes(trimmed.as_bytes(), 10)
            .map(ValueAmount)
            .ok_or_else(|| AmountParseError::invalid_digits(trimmed))
    }
}

impl fmt::Display for ValueAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Add<&ValueAmount> for ValueAmount {
    type Output = ValueAmount;

    fn add(self, rhs: &ValueAmount) -> ValueAmount {
        ValueAmount(self.0 + &rhs.0)
    }
}

impl AddAssign<&ValueAmount> for ValueAmount {
    fn add_assign(&mut self, rhs: &ValueAmount) {
        self.0 += &rhs.0;
    }
}

impl From<u64> for ValueAmount {
    fn from(value: u64) -> Self {
        ValueAmount(BigUint::from(value))
    }
}

impl From<u128> for ValueAmount {
    fn from(value: u128) -> Self {
        ValueAmount(BigUint::from(value))
    }
}

impl From<BigUint> for ValueAmount {
    fn from(value: BigUint) -> Self {
        ValueAmount(value)
    }
}
