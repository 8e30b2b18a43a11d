//! Monthly cycles and progress towards the cycle target.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::activations::ActivationCount;
use crate::bands::ACTIVATION_BANDS;
use crate::error::CommissionError;

/// Validated days expected in a cycle when none is configured.
pub const DEFAULT_CYCLE_TARGET: u32 = 16;

const MONTH_LABELS: [&str; 12] = ["Jan", "Fev", "Mar", "Abr", "Mai", "Jun", "Jul", "Ago", "Set", "Out", "Nov", "Dez"];

/// A billing / scheduling month.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawCycle")]
pub struct Cycle {
    pub year: i32,
    pub month: u32,
}

#[derive(Deserialize)]
struct RawCycle {
    year: i32,
    month: u32,
}

impl TryFrom<RawCycle> for Cycle {
    type Error = CommissionError;

    fn try_from(raw: RawCycle) -> Result<Self, Self::Error> {
        Self::new(raw.year, raw.month)
    }
}

impl Cycle {
    pub fn new(year: i32, month: u32) -> Result<Self, CommissionError> {
        if !(1..=12).contains(&month) {
            return Err(CommissionError::invalid("month", format!("{month} is not in 1..=12")));
        }
        Ok(Self { year, month })
    }

    /// `"Out/2026"`.
    pub fn label(&self) -> String {
        let idx = (self.month.clamp(1, 12) - 1) as usize;
        format!("{}/{}", MONTH_LABELS[idx], self.year)
    }

    /// Following month; `None` past December of `i32::MAX`.
    pub fn next(&self) -> Option<Self> {
        if self.month >= 12 {
            Some(Self { year: self.year.checked_add(1)?, month: 1 })
        } else {
            Some(Self { year: self.year, month: self.month + 1 })
        }
    }
}

impl fmt::Display for Cycle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}

/// Validated days against the cycle target.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "RawProgress")]
pub struct CycleProgress {
    pub validated_days: u32,
    pub total_target: u32,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawProgress {
    validated_days: u32,
    total_target: u32,
}

impl From<RawProgress> for CycleProgress {
    fn from(raw: RawProgress) -> Self {
        Self::new(raw.validated_days, raw.total_target)
    }
}

impl CycleProgress {
    /// A zero target falls back to [`DEFAULT_CYCLE_TARGET`].
    pub fn new(validated_days: u32, total_target: u32) -> Self {
        let total_target = if total_target == 0 { DEFAULT_CYCLE_TARGET } else { total_target };
        Self { validated_days, total_target }
    }

    /// May exceed 100.
    #[inline]
    pub fn percent(&self) -> f64 {
        f64::from(self.validated_days) / f64::from(self.total_target) * 100.0
    }

    #[inline]
    pub fn capped_percent(&self) -> f64 {
        self.percent().min(100.0)
    }

    #[inline]
    pub fn remaining(&self) -> u32 {
        self.total_target.saturating_sub(self.validated_days)
    }

    #[inline]
    pub fn is_complete(&self) -> bool {
        self.validated_days >= self.total_target
    }
}

/// What the next multiplier step looks like.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NextBand {
    pub activations_needed: u32,
    pub factor: f64,
    pub label: String,
}

/// Activations still missing to reach a higher multiplier; `None` at the top band.
pub fn next_band(activations: ActivationCount) -> Option<NextBand> {
    let current = activations.get();
    ACTIVATION_BANDS.iter().find(|band| band.min > current).map(|band| NextBand {
        activations_needed: band.min - current,
        factor: band.factor,
        label: band.label.to_string(),
    })
}

/// `1.5` → `"1.50x"`.
pub fn format_multiplier(factor: f64) -> String {
    format!("{factor:.2}x")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_and_rollover() {
        assert_eq!(Cycle::new(2026, 10).unwrap().label(), "Out/2026");
        assert_eq!(Cycle::new(2025, 1).unwrap().to_string(), "Jan/2025");
        assert!(Cycle::new(2025, 0).is_err());
        assert!(Cycle::new(2025, 13).is_err());
        assert_eq!(Cycle::new(2025, 12).unwrap().next(), Some(Cycle { year: 2026, month: 1 }));
        assert_eq!(Cycle::new(2025, 3).unwrap().next(), Some(Cycle { year: 2025, month: 4 }));
        assert_eq!(Cycle::new(i32::MAX, 12).unwrap().next(), None);
        assert_eq!(Cycle::new(i32::MAX, 11).unwrap().next(), Some(Cycle { year: i32::MAX, month: 12 }));
    }

    #[test]
    fn progress_against_target() {
        let p = CycleProgress::new(8, 16);
        assert_eq!(p.percent(), 50.0);
        assert_eq!(p.remaining(), 8);
        assert!(!p.is_complete());

        let over = CycleProgress::new(20, 16);
        assert_eq!(over.percent(), 125.0);
        assert_eq!(over.capped_percent(), 100.0);
        assert_eq!(over.remaining(), 0);
        assert!(over.is_complete());

        assert_eq!(CycleProgress::new(4, 0).total_target, DEFAULT_CYCLE_TARGET);
    }

    #[test]
    fn multiplier_display() {
        assert_eq!(format_multiplier(1.5), "1.50x");
        assert_eq!(format_multiplier(2.0), "2.00x");
        assert_eq!(format_multiplier(0.0), "0.00x");
    }
}
