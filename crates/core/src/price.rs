//! Price value object.

use serde::{Deserialize, Serialize};

use crate::error::{DomainError, DomainResult};

/// A numeric price.
///
/// Sign and currency are unconstrained. `Price::new` accepts any `f64`;
/// `Price::finite` is the validating constructor for callers that want NaN and
/// infinities rejected at the boundary.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Price(f64);

impl Price {
    pub fn new(value: f64) -> Self {
        Self(value)
    }

    /// Build a price, rejecting NaN and infinite values.
    pub fn finite(value: f64) -> DomainResult<Self> {
        if value.is_nan() {
            return Err(DomainError::validation("price must be a number"));
        }
        if value.is_infinite() {
            return Err(DomainError::validation("price must be finite"));
        }
        Ok(Self(value))
    }

    pub fn value(self) -> f64 {
        self.0
    }
}

impl From<Price> for f64 {
    fn from(value: Price) -> Self {
        value.0
    }
}
