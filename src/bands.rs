//! Commission bands: contiguous activation ranges mapped to a multiplier.
//!
//! The table covers `[1, ∞)`. Zero activations are deliberately *not* a band:
//! they forfeit the multiplier entirely and are guarded before any lookup
//! (see [`crate::engine::classify`]).

use std::borrow::Cow;

use serde::{Deserialize, Serialize};

use crate::error::BandTableError;

/// Label reported when a cycle closes without any validated activation.
pub const ZERO_ACTIVATIONS_LABEL: &str = "Sem ativações validadas no ciclo";

/// Position of a band inside its table (0 = lowest band).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BandId(pub usize);

/// One row of the band table. `max: None` means unbounded above.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CommissionBand {
    pub min: u32,
    pub max: Option<u32>,
    pub factor: f64,
    pub label: Cow<'static, str>,
}

impl CommissionBand {
    pub const fn new(min: u32, max: Option<u32>, factor: f64, label: &'static str) -> Self {
        Self { min, max, factor, label: Cow::Borrowed(label) }
    }

    #[inline]
    pub fn contains(&self, activations: u32) -> bool {
        activations >= self.min && self.max.is_none_or(|max| activations <= max)
    }
}

/// Program bands, ascending by `min`.
pub const ACTIVATION_BANDS: [CommissionBand; 5] = [
    CommissionBand::new(1, Some(4), 1.0, "1 a 4 ativações validadas (100%)"),
    CommissionBand::new(5, Some(9), 1.25, "5 a 9 ativações validadas (125%)"),
    CommissionBand::new(10, Some(14), 1.5, "10 a 14 ativações validadas (150%)"),
    CommissionBand::new(15, Some(19), 1.75, "15 a 19 ativações validadas (175%)"),
    CommissionBand::new(20, None, 2.0, "20 ou mais ativações validadas (200%)"),
];

/// Checks that `bands` partitions `[1, ∞)` with no gap or overlap.
pub fn validate_bands(bands: &[CommissionBand]) -> Result<(), BandTableError> {
    let first = bands.first().ok_or(BandTableError::Empty)?;
    if first.min != 1 {
        return Err(BandTableError::FirstBandNotOne(first.min));
    }

    let last = bands.len() - 1;
    for (index, band) in bands.iter().enumerate() {
        if !band.factor.is_finite() || band.factor < 0.0 {
            return Err(BandTableError::InvalidFactor { index });
        }
        match band.max {
            Some(max) if max < band.min => return Err(BandTableError::InvertedRange { index }),
            None if index != last => return Err(BandTableError::UnboundedNotLast { index }),
            _ => {}
        }
        if index > 0 {
            // Every band but the last is bounded, checked on the previous iteration.
            let prev_max = bands[index - 1].max.unwrap_or(u32::MAX);
            // A band ending at u32::MAX leaves nothing for a successor.
            let expected = prev_max.checked_add(1).ok_or(BandTableError::Overlap { index })?;
            if band.min > expected {
                return Err(BandTableError::Gap { index });
            }
            if band.min < expected {
                return Err(BandTableError::Overlap { index });
            }
        }
    }

    if bands[last].max.is_some() {
        return Err(BandTableError::LastBandBounded);
    }
    Ok(())
}

/// Index of the band holding `activations`, for `activations >= 1`.
///
/// Tables are small, a linear scan is enough.
#[inline]
pub(crate) fn find_band(bands: &[CommissionBand], activations: u32) -> Option<BandId> {
    bands.iter().position(|band| band.contains(activations)).map(BandId)
}
