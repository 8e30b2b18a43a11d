//! Sales: base points through the per-SKU points table, and order totals
//! (net value and influencer commission) from gross value and discount.

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::error::CommissionError;
use crate::points::{PointValue, round_currency};

/// Points granted for each unit sold of `sku`. Inactive SKUs score nothing.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkuPoints {
    pub sku: String,
    pub points_per_unit: u32,
    #[serde(default = "default_active")]
    pub active: bool,
}

fn default_active() -> bool {
    true
}

impl SkuPoints {
    /// An active entry.
    pub fn new(sku: impl Into<String>, points_per_unit: u32) -> Self {
        Self { sku: sku.into(), points_per_unit, active: true }
    }

    pub fn inactive(self) -> Self {
        Self { active: false, ..self }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaleLine {
    pub sku: String,
    pub quantity: u32,
}

/// Aggregated base points for a batch of sale lines.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SalesPoints {
    pub base_points: u64,
    /// SKUs with no table entry, first-seen order.
    pub unmatched: Vec<String>,
    /// SKUs in the table but switched off, first-seen order.
    pub inactive: Vec<String>,
}

/// SKU lookup is trimmed and case-insensitive.
#[derive(Clone, Debug, Default)]
pub struct SkuPointsTable {
    entries: HashMap<String, SkuPoints>,
}

fn sku_key(sku: &str) -> String {
    sku.trim().to_uppercase()
}

impl SkuPointsTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or replaces; returns the replaced entry.
    pub fn insert(&mut self, entry: SkuPoints) -> Option<SkuPoints> {
        self.entries.insert(sku_key(&entry.sku), entry)
    }

    pub fn get(&self, sku: &str) -> Option<&SkuPoints> {
        self.entries.get(&sku_key(sku))
    }

    pub fn remove(&mut self, sku: &str) -> Option<SkuPoints> {
        self.entries.remove(&sku_key(sku))
    }

    /// Toggles an entry; `false` if the SKU is unknown.
    pub fn set_active(&mut self, sku: &str, active: bool) -> bool {
        match self.entries.get_mut(&sku_key(sku)) {
            Some(entry) => {
                entry.active = active;
                true
            }
            None => false,
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn base_points(&self, lines: &[SaleLine]) -> SalesPoints {
        let mut out = SalesPoints::default();
        let mut seen = HashSet::new();
        for line in lines {
            match self.get(&line.sku) {
                Some(entry) if entry.active => {
                    let line_points = u64::from(entry.points_per_unit).saturating_mul(u64::from(line.quantity));
                    out.base_points = out.base_points.saturating_add(line_points);
                }
                Some(_) => {
                    if seen.insert(sku_key(&line.sku)) {
                        out.inactive.push(line.sku.trim().to_string());
                    }
                }
                None => {
                    if seen.insert(sku_key(&line.sku)) {
                        out.unmatched.push(line.sku.trim().to_string());
                    }
                }
            }
        }
        out
    }
}

impl FromIterator<SkuPoints> for SkuPointsTable {
    fn from_iter<I: IntoIterator<Item = SkuPoints>>(iter: I) -> Self {
        let mut table = Self::new();
        for entry in iter {
            table.insert(entry);
        }
        table
    }
}

/// Net value and commission of one order, both in BRL cents precision.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaleTotals {
    pub net_value: f64,
    pub commission_value: f64,
}

impl SaleTotals {
    /// `net = max(0, gross - discount)`, `commission = net * percent / 100`,
    /// each rounded to cents. The discount never drives the net negative.
    pub fn compute(gross_value: f64, discount: f64, commission_percent: f64) -> Result<Self, CommissionError> {
        if !gross_value.is_finite() || gross_value < 0.0 {
            return Err(CommissionError::invalid("grossValue", format!("{gross_value} must be a non-negative number")));
        }
        if !discount.is_finite() || discount < 0.0 {
            return Err(CommissionError::invalid("discount", format!("{discount} must be a non-negative number")));
        }
        if !commission_percent.is_finite() || !(0.0..=100.0).contains(&commission_percent) {
            return Err(CommissionError::invalid("commissionPercent", format!("{commission_percent} is not in 0..=100")));
        }

        let net_value = round_currency((gross_value - discount).max(0.0));
        let commission_value = round_currency(net_value * (commission_percent / 100.0));
        Ok(Self { net_value, commission_value })
    }
}

/// Per-influencer totals over a set of orders.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SalesSummary {
    pub sales: usize,
    pub total_net: f64,
    pub total_commission: f64,
}

impl SalesSummary {
    /// Commission expressed as base points at `point_value`.
    pub fn commission_points(&self, point_value: PointValue) -> u64 {
        point_value.brl_to_points(self.total_commission)
    }
}

impl FromIterator<SaleTotals> for SalesSummary {
    fn from_iter<I: IntoIterator<Item = SaleTotals>>(iter: I) -> Self {
        let mut out = iter.into_iter().fold(Self::default(), |mut acc, sale| {
            acc.sales += 1;
            acc.total_net += sale.net_value;
            acc.total_commission += sale.commission_value;
            acc
        });
        out.total_net = round_currency(out.total_net);
        out.total_commission = round_currency(out.total_commission);
        out
    }
}
