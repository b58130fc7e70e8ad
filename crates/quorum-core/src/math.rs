//! Exact decimal arithmetic for vote weights.
//!
//! Every node that evaluates a proposal must reach the same verdict, so weights
//! and ratios are kept as fixed-precision decimals (`rust_decimal`, 28
//! significant digits) and every operation that can leave its domain returns an
//! error instead of rounding, saturating or wrapping.
//!
//! Two sign-constrained views are exposed:
//! - [`NonNegativeDec`]: tallies, total power, ratios (`>= 0`)
//! - [`PositiveDec`]: policy parameters such as a threshold or a percentage (`> 0`)

use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::errors::PolicyError;

/// Plain decimal notation only: an optional leading `-`, digits, and at most
/// one `.` with digits on both sides.
fn is_canonical(input: &str) -> bool {
    let unsigned = input.strip_prefix('-').unwrap_or(input);
    let (int, frac) = match unsigned.split_once('.') {
        Some((int, frac)) => (int, Some(frac)),
        None => (unsigned, None),
    };
    let digits = |s: &str| !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit());
    digits(int) && frac.is_none_or(digits)
}

fn parse_exact(input: &str) -> Result<Decimal, PolicyError> {
    if !is_canonical(input) {
        return Err(PolicyError::InvalidDecimal {
            input: input.to_string(),
            source: rust_decimal::Error::ErrorString("not a plain decimal number".into()),
        });
    }
    Decimal::from_str_exact(input).map_err(|source| PolicyError::InvalidDecimal {
        input: input.to_string(),
        source,
    })
}

/// A decimal that is `>= 0` for its whole lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct NonNegativeDec(Decimal);

impl NonNegativeDec {
    pub const ZERO: Self = Self(Decimal::ZERO);

    pub fn new(value: Decimal) -> Result<Self, PolicyError> {
        if value < Decimal::ZERO {
            return Err(PolicyError::Negative(value));
        }
        // "-0" parses with its sign bit set; keep a single representation of zero.
        Ok(Self(value.normalize()))
    }

    pub fn zero() -> Self {
        Self::ZERO
    }

    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    pub fn as_decimal(&self) -> Decimal {
        self.0
    }

    pub fn checked_add(&self, rhs: &Self) -> Result<Self, PolicyError> {
        self.0
            .checked_add(rhs.0)
            .map(Self)
            .ok_or(PolicyError::Overflow { op: "add" })
    }

    pub fn checked_mul(&self, rhs: &Self) -> Result<Self, PolicyError> {
        self.0
            .checked_mul(rhs.0)
            .map(Self)
            .ok_or(PolicyError::Overflow { op: "mul" })
    }

    /// Bounded subtraction: fails instead of producing a negative value.
    pub fn checked_sub(&self, rhs: &Self) -> Result<Self, PolicyError> {
        if rhs.0 > self.0 {
            return Err(PolicyError::NegativeResult {
                minuend: self.0,
                subtrahend: rhs.0,
            });
        }
        self.0
            .checked_sub(rhs.0)
            .map(Self)
            .ok_or(PolicyError::Overflow { op: "sub" })
    }

    /// Division. A zero divisor is an error, never zero or infinity.
    pub fn checked_quo(&self, divisor: &Self) -> Result<Self, PolicyError> {
        if divisor.is_zero() {
            return Err(PolicyError::DivisionByZero);
        }
        self.0
            .checked_div(divisor.0)
            .map(Self)
            .ok_or(PolicyError::Overflow { op: "quo" })
    }
}

impl Default for NonNegativeDec {
    fn default() -> Self {
        Self::ZERO
    }
}

impl FromStr for NonNegativeDec {
    type Err = PolicyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(parse_exact(s)?)
    }
}

impl TryFrom<String> for NonNegativeDec {
    type Error = PolicyError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<NonNegativeDec> for String {
    fn from(value: NonNegativeDec) -> Self {
        value.to_string()
    }
}

impl From<PositiveDec> for NonNegativeDec {
    fn from(value: PositiveDec) -> Self {
        Self(value.0)
    }
}

impl fmt::Display for NonNegativeDec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.normalize())
    }
}

/// A decimal that is strictly `> 0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PositiveDec(Decimal);

impl PositiveDec {
    pub fn new(value: Decimal) -> Result<Self, PolicyError> {
        if value <= Decimal::ZERO {
            return Err(PolicyError::NotPositive(value));
        }
        Ok(Self(value.normalize()))
    }

    pub fn as_decimal(&self) -> Decimal {
        self.0
    }

    pub fn to_non_negative(self) -> NonNegativeDec {
        self.into()
    }
}

impl FromStr for PositiveDec {
    type Err = PolicyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(parse_exact(s)?)
    }
}

impl TryFrom<String> for PositiveDec {
    type Error = PolicyError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<PositiveDec> for String {
    fn from(value: PositiveDec) -> Self {
        value.to_string()
    }
}

impl fmt::Display for PositiveDec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.normalize())
    }
}
