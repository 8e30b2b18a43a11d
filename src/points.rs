//! Points ↔ BRL conversions.
//! Points are whole numbers; money is rounded to cents.

use serde::{Deserialize, Serialize};

use crate::engine::PointsSummary;
use crate::error::CommissionError;

/// Value of one point in BRL when nothing is configured.
pub const DEFAULT_POINT_VALUE: f64 = 0.1;

/// Round to cents, half away from zero.
#[inline]
pub fn round_currency(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Nearest whole point; non-finite or negative input counts as 0.
#[inline]
pub fn round_points(value: f64) -> u64 {
    let rounded = value.round();
    if rounded.is_finite() && rounded >= 0.0 { rounded as u64 } else { 0 }
}

/// BRL value of a single point.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct PointValue(f64);

impl TryFrom<f64> for PointValue {
    type Error = CommissionError;

    fn try_from(brl_per_point: f64) -> Result<Self, Self::Error> {
        Self::new(brl_per_point)
    }
}

impl From<PointValue> for f64 {
    fn from(value: PointValue) -> Self {
        value.0
    }
}

impl Default for PointValue {
    fn default() -> Self {
        Self(DEFAULT_POINT_VALUE)
    }
}

impl PointValue {
    /// Requires a finite value that is still positive once rounded to cents.
    pub fn new(brl_per_point: f64) -> Result<Self, CommissionError> {
        if !brl_per_point.is_finite() || brl_per_point <= 0.0 {
            return Err(CommissionError::invalid("pointValue", format!("{brl_per_point} must be a positive number")));
        }
        let rounded = round_currency(brl_per_point);
        if rounded <= 0.0 {
            return Err(CommissionError::invalid("pointValue", format!("{brl_per_point} rounds to zero")));
        }
        Ok(Self(rounded))
    }

    #[inline]
    pub fn get(self) -> f64 {
        self.0
    }

    #[inline]
    pub fn points_to_brl(self, points: f64) -> f64 {
        if !points.is_finite() {
            return 0.0;
        }
        round_currency(points * self.0)
    }

    #[inline]
    pub fn brl_to_points(self, brl: f64) -> u64 {
        if !brl.is_finite() {
            return 0;
        }
        round_points(brl / self.0)
    }

    /// Settles a summary: whole points and their BRL value.
    pub fn payout(self, summary: &PointsSummary) -> Payout {
        let points = round_points(summary.total_points);
        Payout { points, brl: self.points_to_brl(points as f64) }
    }
}

/// Final amount owed for a cycle.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Payout {
    pub points: u64,
    pub brl: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rounding_helpers() {
        assert_eq!(round_currency(1.234), 1.23);
        assert_eq!(round_currency(1.235_1), 1.24);
        assert_eq!(round_points(149.5), 150);
        assert_eq!(round_points(-3.0), 0);
        assert_eq!(round_points(f64::NAN), 0);
    }

    #[test]
    fn point_value_validation() {
        assert_eq!(PointValue::default().get(), 0.1);
        assert_eq!(PointValue::new(0.256).unwrap().get(), 0.26);
        assert!(PointValue::new(0.0).is_err());
        assert!(PointValue::new(-1.0).is_err());
        assert!(PointValue::new(0.001).is_err());
        assert!(PointValue::new(f64::NAN).is_err());
    }

    #[test]
    fn deserializing_goes_through_validation() {
        assert_eq!(serde_json::from_str::<PointValue>("0.256").unwrap().get(), 0.26);
        assert!(serde_json::from_str::<PointValue>("0.0").is_err());
        assert!(serde_json::from_str::<PointValue>("-0.5").is_err());
        assert_eq!(serde_json::to_string(&PointValue::default()).unwrap(), "0.1");
    }
}
