use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::pricing::PriceTable;
use crate::quantity::{MaterialCategory, MaterialKey, MaterialLedger};

/// Itemized cost of a material ledger.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CostBreakdown {
    pub total_cost: f64,
    pub per_material_cost: BTreeMap<MaterialKey, f64>,
}

impl CostBreakdown {
    /// Cost of one material line, if it was in the ledger.
    #[must_use]
    pub fn line(&self, key: MaterialKey) -> Option<f64> {
        self.per_material_cost.get(&key).copied()
    }

    /// Subtotals per work area.
    #[must_use]
    pub fn category_totals(&self) -> BTreeMap<MaterialCategory, f64> {
        let mut totals = BTreeMap::new();
        for (key, cost) in &self.per_material_cost {
            *totals.entry(key.category()).or_insert(0.0) += cost;
        }
        totals
    }

    /// Total cost per square meter of floor, `None` for a non-positive area.
    #[must_use]
    pub fn cost_per_floor_area(&self, floor_area: f64) -> Option<f64> {
        (floor_area.is_finite() && floor_area > 0.0).then_some(self.total_cost / floor_area)
    }
}

/// Prices a material ledger.
pub struct AggregateCost<'a> {
    ledger: &'a MaterialLedger,
    prices: &'a PriceTable,
}

impl<'a> AggregateCost<'a> {
    /// Creates a new `AggregateCost` operation.
    #[must_use]
    pub fn new(ledger: &'a MaterialLedger, prices: &'a PriceTable) -> Self {
        Self { ledger, prices }
    }

    /// Executes the aggregation. Unpriced materials cost zero.
    #[must_use]
    pub fn execute(&self) -> CostBreakdown {
        let per_material_cost: BTreeMap<MaterialKey, f64> = self
            .ledger
            .iter()
            .map(|(key, quantity)| (key, f64::from(quantity) * self.prices.price(key)))
            .collect();
        let total_cost: f64 = per_material_cost.values().sum();

        debug!(lines = per_material_cost.len(), total_cost, "aggregated cost");

        CostBreakdown {
            total_cost,
            per_material_cost,
        }
    }
}
