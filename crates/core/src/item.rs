//! Validated ledger inputs: item names and quantities.

use crate::error::{DomainError, DomainResult};
use crate::value_object::ValueObject;

/// Name of a stock-keeping unit.
///
/// Case-sensitive and stored exactly as given; only the emptiness check looks
/// at the trimmed form.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ItemName(String);

impl ItemName {
    pub fn parse(raw: impl Into<String>) -> DomainResult<Self> {
        let raw = raw.into();
        if raw.trim().is_empty() {
            return Err(DomainError::invalid_argument("item must be a non-empty string"));
        }
        Ok(Self(raw))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl ValueObject for ItemName {}

impl core::fmt::Display for ItemName {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Units on hand (or units to move). Always finite and never negative.
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd)]
pub struct Quantity(f64);

impl Quantity {
    /// Accepts `0` and above.
    pub fn non_negative(value: f64) -> DomainResult<Self> {
        if !value.is_finite() {
            return Err(DomainError::invalid_argument("qty must be numeric"));
        }
        if value < 0.0 {
            return Err(DomainError::invalid_argument("qty must be non-negative"));
        }
        Ok(Self(value))
    }

    /// Accepts strictly positive values only.
    pub fn positive(value: f64) -> DomainResult<Self> {
        if !value.is_finite() || value <= 0.0 {
            return Err(DomainError::invalid_argument("qty must be a positive number"));
        }
        Ok(Self(value))
    }

    pub fn value(self) -> f64 {
        self.0
    }
}

impl ValueObject for Quantity {}

// `{:?}` keeps the decimal point on whole numbers (`7.0`, not `7`). Very large
// or small magnitudes switch to exponent form without a sign (`1e16`).
impl core::fmt::Display for Quantity {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{:?}", self.0)
    }
}
