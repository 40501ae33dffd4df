//! Display-amount validation and conversion to minor currency units.
//!
//! Amount strings come straight from the page, so they are parsed with the same
//! leniency a browser applies to numeric strings (whitespace, sign, exponent) but
//! multiplied with decimal arithmetic so `0.29` becomes exactly `29`.

use std::fmt;
use std::str::FromStr;

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{CheckoutError, CheckoutResult};

/// Minor units per major unit (kobo per naira, cents per dollar).
pub const MINOR_UNITS_PER_MAJOR: i64 = 100;

/// An amount in minor currency units.
///
/// Serializes as a JSON integer whenever the value is integral, which is the shape
/// the payment provider expects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MinorUnits(Decimal);

impl MinorUnits {
    pub fn new(value: Decimal) -> Self {
        Self(value.normalize())
    }

    pub fn value(&self) -> Decimal {
        self.0
    }

    /// Integral value, if the amount has no fractional minor units.
    pub fn as_i64(&self) -> Option<i64> {
        if self.0.fract().is_zero() {
            self.0.to_i64()
        } else {
            None
        }
    }
}

impl From<i64> for MinorUnits {
    fn from(value: i64) -> Self {
        Self(Decimal::from(value))
    }
}

impl fmt::Display for MinorUnits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Serialize for MinorUnits {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self.as_i64() {
            Some(whole) => serializer.serialize_i64(whole),
            None => match self.0.to_f64() {
                Some(float) => serializer.serialize_f64(float),
                None => Err(serde::ser::Error::custom("amount out of range")),
            },
        }
    }
}

impl<'de> Deserialize<'de> for MinorUnits {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let number = serde_json::Number::deserialize(deserializer)?;
        let decimal = if let Some(whole) = number.as_i64() {
            Decimal::from(whole)
        } else if let Some(whole) = number.as_u64() {
            Decimal::from(whole)
        } else {
            number
                .as_f64()
                .and_then(Decimal::from_f64_retain)
                .ok_or_else(|| serde::de::Error::custom("amount is not a finite number"))?
        };
        Ok(Self::new(decimal))
    }
}

/// Parse the raw display amount carried by a payment control.
pub fn parse_display_amount(raw: Option<&str>) -> CheckoutResult<Decimal> {
    let raw = raw.unwrap_or_default();
    let trimmed = raw.trim();
    let invalid = || CheckoutError::InvalidAmount(raw.to_string());

    if trimmed.is_empty() || !trimmed.bytes().any(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }

    // Only plain decimal notation is an amount; reject hex, Infinity and friends.
    let plain = trimmed
        .bytes()
        .all(|b| b.is_ascii_digit() || matches!(b, b'.' | b'+' | b'-' | b'e' | b'E'));
    if !plain {
        return Err(invalid());
    }

    let unsigned = trimmed.strip_prefix('+').unwrap_or(trimmed);
    if unsigned.starts_with(['+', '-']) && trimmed.starts_with('+') {
        return Err(invalid());
    }

    let parsed = if unsigned.contains(['e', 'E']) {
        Decimal::from_scientific(unsigned)
    } else {
        Decimal::from_str(unsigned)
    };
    parsed.map_err(|_| invalid())
}

/// Convert a display amount to minor units.
pub fn to_minor_units(display: Decimal) -> CheckoutResult<MinorUnits> {
    display
        .checked_mul(Decimal::from(MINOR_UNITS_PER_MAJOR))
        .map(MinorUnits::new)
        .ok_or_else(|| CheckoutError::InvalidAmount(display.to_string()))
}

/// Display amount as reported in analytics `value` properties.
pub fn analytics_value(display: Decimal) -> f64 {
    display.to_f64().unwrap_or_default()
}
