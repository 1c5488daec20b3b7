//! # Exact Value Amounts
//!
//! Defines `Amount`, the non-negative value type used for attached payment
//! value, transfer amounts, and reward grants.
//!
//! ## Invariant
//!
//! Amounts are unsigned 128-bit integers (the value width of the hosting
//! platforms this registry targets) and travel as decimal strings on the
//! wire. There is no floating-point representation anywhere on a value
//! path: a JSON number is rejected at deserialization, so no `f64` rounding
//! can ever alter a payment.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::RegistryError;

/// A non-negative value amount, exact to the unit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Amount(u128);

impl Amount {
    /// The zero amount.
    pub const ZERO: Amount = Amount(0);

    /// Wrap a raw unit count.
    pub const fn new(units: u128) -> Self {
        Self(units)
    }

    /// Access the raw unit count.
    pub const fn units(self) -> u128 {
        self.0
    }

    /// Parse an amount from its decimal-string wire form.
    ///
    /// Accepts ASCII digits only — no sign, no separators, no fraction.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::Codec`] for empty input, non-digit
    /// characters, or values beyond 128 bits.
    pub fn parse(s: &str) -> Result<Self, RegistryError> {
        if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(RegistryError::Codec(format!(
                "amount must be a decimal digit string, got: {s:?}"
            )));
        }
        let units = s
            .parse::<u128>()
            .map_err(|e| RegistryError::Codec(format!("amount {s:?} out of range: {e}")))?;
        Ok(Self(units))
    }

    /// Whether this amount is at least `required`.
    pub fn covers(self, required: Amount) -> bool {
        self.0 >= required.0
    }

    /// Checked addition.
    pub fn checked_add(self, other: Amount) -> Option<Amount> {
        self.0.checked_add(other.0).map(Amount)
    }

    /// Checked subtraction.
    pub fn checked_sub(self, other: Amount) -> Option<Amount> {
        self.0.checked_sub(other.0).map(Amount)
    }
}

impl std::fmt::Display for Amount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Serialize for Amount {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for Amount {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Amount::parse(&s).map_err(serde::de::Error::custom)
    }
}
