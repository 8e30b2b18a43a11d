//! Validated activation counts.
//!
//! Host layers usually receive the count as a JSON number or a query string.
//! Every coercion here rejects negative, non-finite and fractional input with
//! [`CommissionError::InvalidArgument`]; nothing is clamped to zero.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CommissionError;

/// Number of validated activations an influencer reached within one cycle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ActivationCount(pub u32);

impl ActivationCount {
    pub const ZERO: Self = Self(0);

    #[inline]
    pub const fn new(count: u32) -> Self {
        Self(count)
    }

    #[inline]
    pub const fn get(self) -> u32 {
        self.0
    }

    #[inline]
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }
}

impl From<u32> for ActivationCount {
    fn from(count: u32) -> Self {
        Self(count)
    }
}

impl TryFrom<i64> for ActivationCount {
    type Error = CommissionError;

    fn try_from(count: i64) -> Result<Self, Self::Error> {
        if count < 0 {
            return Err(CommissionError::invalid("activations", format!("{count} is negative")));
        }
        u32::try_from(count)
            .map(Self)
            .map_err(|_| CommissionError::invalid("activations", format!("{count} is out of range")))
    }
}

impl TryFrom<f64> for ActivationCount {
    type Error = CommissionError;

    fn try_from(count: f64) -> Result<Self, Self::Error> {
        if !count.is_finite() {
            return Err(CommissionError::invalid("activations", "value is not a finite number"));
        }
        if count < 0.0 {
            return Err(CommissionError::invalid("activations", format!("{count} is negative")));
        }
        if count.fract() != 0.0 {
            return Err(CommissionError::invalid("activations", format!("{count} is not an integer")));
        }
        if count > f64::from(u32::MAX) {
            return Err(CommissionError::invalid("activations", format!("{count} is out of range")));
        }
        Ok(Self(count as u32))
    }
}

impl FromStr for ActivationCount {
    type Err = CommissionError;

    /// Accepts anything that reads as a non-negative whole number, `"12.0"` included.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let parsed: f64 = trimmed
            .parse()
            .map_err(|_| CommissionError::invalid("activations", format!("{trimmed:?} is not a number")))?;
        Self::try_from(parsed)
    }
}

impl fmt::Display for ActivationCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}
