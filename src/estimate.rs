use serde::{Deserialize, Serialize};

use crate::cost::{AggregateCost, CostBreakdown};
use crate::error::Result;
use crate::geometry::{Opening, RoomGeometry, Wall};
use crate::pricing::PriceTable;
use crate::quantity::{CalculateMaterials, MaterialLedger, MaterialOptions, RoomMetrics};

/// Everything the host stores alongside a room record after a calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomEstimate {
    pub walls: Vec<Wall>,
    pub metrics: RoomMetrics,
    pub ledger: MaterialLedger,
    pub costs: CostBreakdown,
}

impl RoomEstimate {
    /// Total cost per square meter of floor.
    #[must_use]
    pub fn cost_per_floor_area(&self) -> Option<f64> {
        self.costs.cost_per_floor_area(self.metrics.floor_area)
    }
}

/// Runs wall resolution, material calculation and costing in one pass.
pub struct EstimateRoom<'a> {
    materials: CalculateMaterials<'a>,
}

impl<'a> EstimateRoom<'a> {
    /// Creates a new `EstimateRoom` operation.
    #[must_use]
    pub fn new(
        geometry: &'a RoomGeometry,
        openings: &'a [Opening],
        options: MaterialOptions,
    ) -> Self {
        Self {
            materials: CalculateMaterials::new(geometry, openings, options),
        }
    }

    /// Executes the pipeline against one flattened price table.
    ///
    /// # Errors
    ///
    /// Returns `EstimateError::InvalidGeometry` or `EstimateError::InvalidOptions`
    /// from the material calculation. Pricing never fails.
    pub fn execute(&self, prices: &PriceTable) -> Result<RoomEstimate> {
        let calculation = self.materials.execute_detailed()?;
        let costs = AggregateCost::new(&calculation.ledger, prices).execute();
        Ok(RoomEstimate {
            walls: calculation.walls.into_walls(),
            metrics: calculation.metrics,
            ledger: calculation.ledger,
            costs,
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::quantity::MaterialKey;
    use crate::units::Meters;
    use approx::assert_relative_eq;

    #[test]
    fn pipeline_prices_the_ledger() {
        let room = RoomGeometry::rectangle(Meters(4.0), Meters(3.0), Meters(2.5));
        let prices: PriceTable = [(MaterialKey::FloorPanels, 45.0), (MaterialKey::Paint, 10.0)]
            .into_iter()
            .collect();
        let estimate = EstimateRoom::new(&room, &[], MaterialOptions::default())
            .execute(&prices)
            .unwrap();
        assert_eq!(estimate.walls.len(), 4);
        assert_relative_eq!(estimate.costs.total_cost, 14.0 * 45.0 + 9.0 * 10.0);
        assert_relative_eq!(estimate.cost_per_floor_area().unwrap(), 720.0 / 12.0);
    }

    #[test]
    fn serializes_for_storage() {
        let room = RoomGeometry::rectangle(Meters(4.0), Meters(3.0), Meters(2.5));
        let estimate = EstimateRoom::new(&room, &[], MaterialOptions::default())
            .execute(&PriceTable::new())
            .unwrap();
        let json = serde_json::to_string(&estimate).unwrap();
        let back: RoomEstimate = serde_json::from_str(&json).unwrap();
        assert_eq!(back.ledger, estimate.ledger);
        assert_eq!(back.walls[0].name, "Top wall");
    }
}
