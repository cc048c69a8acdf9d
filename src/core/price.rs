//! # Price
//!
//! Unit ticket price, held as whole cents so that `count × price` is exact.
//! A price is fixed for the whole session; totals are always recomputed
//! from it and never stored.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// A non-negative amount of money in cents.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Price {
    cents: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PriceError {
    /// Not a decimal number at all.
    Invalid(String),
    /// A leading minus sign.
    Negative(String),
    /// More than two fractional digits (sub-cent amounts).
    TooPrecise(String),
}

impl fmt::Display for PriceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PriceError::Invalid(s) => write!(f, "invalid price {s:?}"),
            PriceError::Negative(s) => write!(f, "price must not be negative: {s:?}"),
            PriceError::TooPrecise(s) => {
                write!(f, "price {s:?} has more than two decimal places")
            }
        }
    }
}

impl std::error::Error for PriceError {}

impl Price {
    pub const ZERO: Price = Price { cents: 0 };

    pub const fn from_cents(cents: u64) -> Self {
        Self { cents }
    }

    pub const fn cents(self) -> u64 {
        self.cents
    }

    /// Price of `count` seats at this unit price.
    pub fn times(self, count: usize) -> Price {
        Price {
            cents: self.cents.saturating_mul(count as u64),
        }
    }

    /// Plain decimal rendering without the currency sign, e.g. `"12.50"`.
    pub fn decimal(self) -> String {
        format!("{}.{:02}", self.cents / 100, self.cents % 100)
    }

    /// Convert a float as written in TOML (`price = 12.5`).
    pub fn from_f64(value: f64) -> Result<Self, PriceError> {
        let text = value.to_string();
        if !value.is_finite() {
            return Err(PriceError::Invalid(text));
        }
        if value < 0.0 {
            return Err(PriceError::Negative(text));
        }
        let scaled = value * 100.0;
        let rounded = scaled.round();
        if (scaled - rounded).abs() > 1e-6 {
            return Err(PriceError::TooPrecise(text));
        }
        if rounded >= u64::MAX as f64 {
            return Err(PriceError::Invalid(text));
        }
        Ok(Price {
            cents: rounded as u64,
        })
    }
}

impl FromStr for Price {
    type Err = PriceError;

    /// Accepts `12`, `12.5`, `12.50` and `$12.50`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.starts_with('-') {
            return Err(PriceError::Negative(s.to_string()));
        }
        let digits = trimmed.strip_prefix('$').unwrap_or(trimmed);

        let (whole, frac) = match digits.split_once('.') {
            Some((w, f)) => (w, f),
            None => (digits, ""),
        };
        let all_digits = |part: &str| part.chars().all(|c| c.is_ascii_digit());
        if whole.is_empty() || !all_digits(whole) || !all_digits(frac) {
            return Err(PriceError::Invalid(s.to_string()));
        }
        if frac.len() > 2 {
            return Err(PriceError::TooPrecise(s.to_string()));
        }

        let whole: u64 = whole
            .parse()
            .map_err(|_| PriceError::Invalid(s.to_string()))?;
        let frac_cents = match frac.len() {
            0 => 0,
            1 => frac.parse::<u64>().map_err(|_| PriceError::Invalid(s.to_string()))? * 10,
            _ => frac.parse::<u64>().map_err(|_| PriceError::Invalid(s.to_string()))?,
        };
        let cents = whole
            .checked_mul(100)
            .and_then(|c| c.checked_add(frac_cents))
            .ok_or_else(|| PriceError::Invalid(s.to_string()))?;
        Ok(Price { cents })
    }
}

/// Currency display: `$25.00`.
impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${}", self.decimal())
    }
}

impl Serialize for Price {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.decimal())
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawPrice {
    Integer(u64),
    Float(f64),
    Text(String),
}

impl<'de> Deserialize<'de> for Price {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let parsed = match RawPrice::deserialize(deserializer)? {
            RawPrice::Integer(whole) => whole
                .checked_mul(100)
                .map(Price::from_cents)
                .ok_or_else(|| PriceError::Invalid(whole.to_string())),
            RawPrice::Float(value) => Price::from_f64(value),
            RawPrice::Text(text) => text.parse(),
        };
        parsed.map_err(serde::de::Error::custom)
    }
}
