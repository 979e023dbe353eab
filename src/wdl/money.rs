use crate::Result;

use std::fmt;

use serde::{Serialize, Serializer};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum MoneyError {
    #[error("Overflow error while applying {0} operation on {1:?} and {2:?}")]
    Overflow(&'static str, Money, Money),

    #[error("Underflow error while applying {0} operation on {1:?} and {2:?}")]
    Underflow(&'static str, Money, Money),

    #[error("Money parse error: {0}, {1}")]
    Parse(&'static str, String),
}

/// Fixed-point money value with four decimal places of precision
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Money(pub i64);

impl Money {
    pub const MAX: Self = Self(i64::MAX);
    pub const MIN: Self = Self(i64::MIN);
    pub const ZERO: Self = Self(0);

    /// Builds a Money value from whole units, e.g. `from_major(12)` == "12"
    pub const fn from_major(units: i64) -> Self {
        return Self(units * 10_000);
    }

    pub fn parse(string: String) -> Result<Self> {
        let trimmed = string.trim();

        let (negative, unsigned) = match trimmed.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, trimmed),
        };

        if unsigned.is_empty() {
            Err(MoneyError::Parse("No digits", string.clone()))?
        }

        let mut parts = unsigned.split('.');

        if parts.clone().count() > 2 {
            Err(MoneyError::Parse("Too many decimal points", string.clone()))?
        }

        let units: String = match parts.next() {
            None | Some("") => "0".to_string(),
            Some(units) => units.to_string(),
        };

        let cents: String = match parts.next() {
            None => "0000".to_string(),
            Some(cents) => format!("{:0<4}", cents).chars().take(4).collect(),
        };

        // The sign was consumed above; any further sign character would
        // sneak through i64 parsing with its own meaning
        if !units.bytes().all(|b| b.is_ascii_digit()) || !cents.bytes().all(|b| b.is_ascii_digit())
        {
            Err(MoneyError::Parse("Amount must be digits", string.clone()))?
        }

        let units: i64 = units.parse()?;
        let cents: i64 = cents.parse()?;

        let magnitude = units
            .checked_mul(10_000)
            .and_then(|scaled| scaled.checked_add(cents))
            .ok_or_else(|| MoneyError::Parse("Amount out of range", string.clone()))?;

        return Ok(Money(if negative { -magnitude } else { magnitude }));
    }

    pub fn add(&mut self, other: &Self) -> Result {
        let a = self.0;
        let b = other.0;

        if b > 0 && Money::MAX.0 - b < a {
            Err(MoneyError::Overflow("add", Money(a), *other))?
        }

        if b < 0 && Money::MIN.0 - b > a {
            Err(MoneyError::Underflow("add", Money(a), *other))?
        }

        self.0 += b;

        return Ok(());
    }

    pub fn sub(&mut self, other: &Self) -> Result {
        let other = Self(-1 * other.0);
        return self.add(&other);
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };

        let abs = self.0.unsigned_abs();
        let units = abs / 10_000;
        let cents = abs % 10_000;

        if cents == 0 {
            return write!(f, "{sign}{units}");
        }

        let cents = format!("{cents:04}");
        return write!(f, "{sign}{units}.{}", cents.trim_end_matches('0'));
    }
}

impl Serialize for Money {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        return serializer.collect_str(self);
    }
}
