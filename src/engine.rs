//! Commission multiplier engine.
//!
//! Pure functions: activation count → band → multiplier → points.
//! Nothing here allocates state, logs or blocks; all entry points are safe to
//! call from any thread.

use std::borrow::Cow;

use serde::{Deserialize, Serialize};

use crate::activations::ActivationCount;
use crate::bands::{ACTIVATION_BANDS, BandId, CommissionBand, ZERO_ACTIVATIONS_LABEL, find_band, validate_bands};
use crate::error::{BandTableError, CommissionError};

/// Band lookup result for one activation count.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MultiplierResult {
    pub factor: f64,
    pub label: Cow<'static, str>,
    /// `None` only for zero activations.
    pub band: Option<BandId>,
    pub activations: ActivationCount,
}

impl MultiplierResult {
    /// Factor as a whole percentage (1.25 → 125).
    #[inline]
    pub fn percent(&self) -> f64 {
        (self.factor * 100.0).round()
    }
}

/// Just the multiplier, for callers that do not need the band details.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct CommissionMultiplier {
    pub multiplier: f64,
}

/// Base points with the cycle multiplier applied.
///
/// `multiplier` and `factor` carry the same value; both names are part of the
/// payload consumed by the dashboards. Likewise `validated_days` mirrors
/// `activations`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PointsSummary {
    pub base_points: f64,
    pub multiplier: f64,
    pub factor: f64,
    pub label: Cow<'static, str>,
    pub activations: ActivationCount,
    pub validated_days: ActivationCount,
    pub total_points: f64,
}

/// An ordered, validated band table.
#[derive(Clone, Debug, PartialEq)]
pub struct BandTable {
    bands: Vec<CommissionBand>,
}

impl Default for BandTable {
    fn default() -> Self {
        Self { bands: ACTIVATION_BANDS.to_vec() }
    }
}

impl BandTable {
    /// Builds a custom table; it must partition `[1, ∞)` like the program table.
    pub fn new(bands: Vec<CommissionBand>) -> Result<Self, BandTableError> {
        validate_bands(&bands)?;
        Ok(Self { bands })
    }

    pub fn bands(&self) -> &[CommissionBand] {
        &self.bands
    }

    pub fn band(&self, id: BandId) -> Option<&CommissionBand> {
        self.bands.get(id.0)
    }

    /// Band holding `activations`; `None` for zero.
    pub fn band_for(&self, activations: ActivationCount) -> Option<(BandId, &CommissionBand)> {
        band_for_in(&self.bands, activations)
    }

    pub fn classify(&self, activations: ActivationCount) -> MultiplierResult {
        classify_in(&self.bands, activations)
    }

    pub fn calculate_multiplier(&self, activations: ActivationCount) -> CommissionMultiplier {
        CommissionMultiplier { multiplier: self.classify(activations).factor }
    }

    pub fn summarize(&self, base_points: f64, activations: ActivationCount) -> Result<PointsSummary, CommissionError> {
        summarize_in(&self.bands, base_points, activations)
    }
}

/// Classifies `activations` against the program bands.
///
/// Zero activations yield factor 0 and no band, which is not the same as the
/// 1–4 band (factor 1).
#[inline]
pub fn classify(activations: ActivationCount) -> MultiplierResult {
    classify_in(&ACTIVATION_BANDS, activations)
}

#[inline]
pub fn calculate_multiplier(activations: ActivationCount) -> CommissionMultiplier {
    CommissionMultiplier { multiplier: classify(activations).factor }
}

/// `total_points = base_points * factor`, unrounded.
///
/// Negative, NaN or infinite `base_points` are rejected.
#[inline]
pub fn summarize(base_points: f64, activations: ActivationCount) -> Result<PointsSummary, CommissionError> {
    summarize_in(&ACTIVATION_BANDS, base_points, activations)
}

fn band_for_in(bands: &[CommissionBand], activations: ActivationCount) -> Option<(BandId, &CommissionBand)> {
    if activations.is_zero() {
        return None;
    }
    let id = find_band(bands, activations.get())?;
    Some((id, &bands[id.0]))
}

fn classify_in(bands: &[CommissionBand], activations: ActivationCount) -> MultiplierResult {
    match band_for_in(bands, activations) {
        Some((id, band)) => MultiplierResult {
            factor: band.factor,
            label: band.label.clone(),
            band: Some(id),
            activations,
        },
        // Only zero reaches here for a validated table.
        None => MultiplierResult {
            factor: 0.0,
            label: Cow::Borrowed(ZERO_ACTIVATIONS_LABEL),
            band: None,
            activations,
        },
    }
}

fn summarize_in(
    bands: &[CommissionBand],
    base_points: f64,
    activations: ActivationCount,
) -> Result<PointsSummary, CommissionError> {
    if !base_points.is_finite() {
        return Err(CommissionError::invalid("basePoints", "value is not a finite number"));
    }
    if base_points < 0.0 {
        return Err(CommissionError::invalid("basePoints", format!("{base_points} is negative")));
    }

    let result = classify_in(bands, activations);
    Ok(PointsSummary {
        base_points,
        multiplier: result.factor,
        factor: result.factor,
        total_points: base_points * result.factor,
        label: result.label,
        activations,
        validated_days: activations,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn n(count: u32) -> ActivationCount {
        ActivationCount(count)
    }

    #[test]
    fn zero_is_not_the_first_band() {
        let zero = classify(n(0));
        assert_eq!(zero.factor, 0.0);
        assert_eq!(zero.band, None);
        assert_eq!(zero.label, ZERO_ACTIVATIONS_LABEL);

        let one = classify(n(1));
        assert_eq!(one.factor, 1.0);
        assert_eq!(one.band, Some(BandId(0)));
    }

    #[test]
    fn percent_rounds_to_whole() {
        assert_eq!(classify(n(7)).percent(), 125.0);
        assert_eq!(classify(n(0)).percent(), 0.0);
    }

    #[test]
    fn summarize_rejects_bad_base() {
        assert!(summarize(-1.0, n(3)).is_err());
        assert!(summarize(f64::NAN, n(3)).is_err());
        assert!(summarize(f64::INFINITY, n(3)).is_err());
        assert!(summarize(0.0, n(3)).is_ok());
    }

    #[test]
    fn custom_table_is_honoured() {
        let table = BandTable::new(vec![
            CommissionBand::new(1, Some(2), 0.5, "poucas"),
            CommissionBand::new(3, None, 3.0, "muitas"),
        ])
        .unwrap();
        assert_eq!(table.calculate_multiplier(n(2)).multiplier, 0.5);
        assert_eq!(table.calculate_multiplier(n(3)).multiplier, 3.0);
        assert_eq!(table.calculate_multiplier(n(0)).multiplier, 0.0);
        assert_eq!(table.summarize(10.0, n(100)).unwrap().total_points, 30.0);
        assert_eq!(table.band_for(n(0)), None);
        assert_eq!(table.band(BandId(1)).map(|b| b.min), Some(3));
    }

    #[test]
    fn band_ending_at_max_cannot_have_a_successor() {
        let table = BandTable::new(vec![
            CommissionBand::new(1, Some(u32::MAX), 1.0, "todas"),
            CommissionBand::new(u32::MAX, None, 2.0, "de novo"),
        ]);
        assert_eq!(table, Err(BandTableError::Overlap { index: 1 }));
    }

    #[test]
    fn default_table_matches_free_functions() {
        let table = BandTable::default();
        for count in 0..=40 {
            assert_eq!(table.classify(n(count)), classify(n(count)));
        }
    }
}
