/*!
`hidrapink_commission` — activation-tiered commission points for the HidraPink
influencer program.

What it does
- Maps the number of validated activations in a monthly cycle to a
  commission multiplier through an ordered band table:
  * 0            → ×0.00 (no band; the cycle earns nothing)
  * 1 to 4       → ×1.00
  * 5 to 9       → ×1.25
  * 10 to 14     → ×1.50
  * 15 to 19     → ×1.75
  * 20 or more   → ×2.00
- Applies the multiplier to a base point value (`total = base * factor`).
- Converts points to BRL, aggregates base points from SKU sales, computes
  order net value and commission, and reports cycle progress for the
  dashboards.

How to use (call surface only)
- `classify(activations) -> MultiplierResult`
- `calculate_multiplier(activations) -> CommissionMultiplier`
- `summarize(base_points, activations) -> Result<PointsSummary, CommissionError>`
- Use [`BandTable::new`] for a custom table; it is validated to cover
  `[1, ∞)` without gaps or overlaps.

Input policy
- Activation counts arrive as [`ActivationCount`]. Coercions from `i64`, `f64`
  and strings reject negative, fractional and non-finite values; nothing is
  silently clamped.
- Negative or non-finite base points are rejected as well.

What it does NOT do
- No HTTP, persistence, sessions or rendering. The engine is pure and
  stateless; share it freely across threads.
*/

pub mod activations;
pub mod bands;
#[cfg(feature = "env-config")]
pub mod config;
pub mod cycle;
pub mod engine;
pub mod error;
pub mod points;
pub mod sales;

pub use activations::ActivationCount;
pub use bands::{ACTIVATION_BANDS, BandId, CommissionBand, ZERO_ACTIVATIONS_LABEL, validate_bands};
pub use cycle::{Cycle, CycleProgress, NextBand, format_multiplier, next_band};
pub use engine::{BandTable, CommissionMultiplier, MultiplierResult, PointsSummary, calculate_multiplier, classify, summarize};
pub use error::{BandTableError, CommissionError, ConfigError};
pub use points::{Payout, PointValue};
pub use sales::{SaleLine, SaleTotals, SalesPoints, SalesSummary, SkuPoints, SkuPointsTable};
