use tracing::debug;

use super::ledger::MaterialLedger;
use super::material::MaterialKey;
use super::metrics::RoomMetrics;
use super::options::{FixtureCounts, MaterialOptions};
use crate::error::Result;
use crate::geometry::{Opening, RoomGeometry, RoomShape, WallLayout};
use crate::math::ceil_units;

const PAINT_LITERS_PER_M2: f64 = 0.25;
const DRYWALL_SHEET_M2: f64 = 3.12;
const CW_PROFILE_SPACING_M: f64 = 0.6;
const UW_PROFILE_LENGTH_M: f64 = 3.0;
const MINERAL_WOOL_PACKAGE_M2: f64 = 5.0;
const TN_SCREWS_PACKAGE_M2: f64 = 10.0;
const WALL_PLASTER_BAG_M2: f64 = 30.0;
const FINISHING_PLASTER_BAG_M2: f64 = 25.0;

const OSB_BOARD_M2: f64 = 3.125;
const OSB_SCREWS_PACKAGE_M2: f64 = 10.0;
const BASEBOARD_LENGTH_M: f64 = 2.5;
const BASEBOARD_ENDS_PER_DOOR: u32 = 2;

const UD_PROFILES_PER_M2: f64 = 0.4;
const HANGERS_PER_M2: f64 = 4.5;
const CEILING_GYPSUM_BOARD_M2: f64 = 2.4;
const CEILING_PLASTER_BAG_M2: f64 = 30.0;

/// Shape-dependent allowances.
#[derive(Debug, Clone, Copy, PartialEq)]
struct ShapeFactors {
    floor_waste: f64,
    wall_complexity: f64,
    /// Baseboard corner pieces. A rule-of-thumb count, not derived from the outline.
    corner_count: u32,
    min_cable_run: f64,
    cable_run_per_perimeter: f64,
}

impl ShapeFactors {
    const RECTANGLE: Self = Self {
        floor_waste: 1.10,
        wall_complexity: 1.10,
        corner_count: 4,
        min_cable_run: 5.0,
        cable_run_per_perimeter: 0.3,
    };

    const L_SHAPE: Self = Self {
        floor_waste: 1.15,
        wall_complexity: 1.15,
        corner_count: 6,
        min_cable_run: 6.0,
        cable_run_per_perimeter: 0.4,
    };

    fn for_shape(shape: RoomShape) -> Self {
        match shape {
            RoomShape::Rectangle => Self::RECTANGLE,
            RoomShape::LShape => Self::L_SHAPE,
        }
    }

    /// Average cable run from the distribution box to one fixture.
    fn average_cable_run(&self, perimeter: f64) -> f64 {
        self.min_cable_run.max(perimeter * self.cable_run_per_perimeter)
    }
}

/// Result of a material calculation with its intermediate values.
#[derive(Debug, Clone, PartialEq)]
pub struct MaterialCalculation {
    pub walls: WallLayout,
    pub metrics: RoomMetrics,
    pub ledger: MaterialLedger,
}

/// Computes the bill of materials for a room.
pub struct CalculateMaterials<'a> {
    geometry: &'a RoomGeometry,
    openings: &'a [Opening],
    options: MaterialOptions,
}

impl<'a> CalculateMaterials<'a> {
    /// Creates a new `CalculateMaterials` operation.
    #[must_use]
    pub fn new(
        geometry: &'a RoomGeometry,
        openings: &'a [Opening],
        options: MaterialOptions,
    ) -> Self {
        Self {
            geometry,
            openings,
            options,
        }
    }

    /// Executes the calculation, returning only the ledger.
    ///
    /// # Errors
    ///
    /// See [`CalculateMaterials::execute_detailed`].
    pub fn execute(&self) -> Result<MaterialLedger> {
        Ok(self.execute_detailed()?.ledger)
    }

    /// Executes the calculation, returning walls, metrics and ledger.
    ///
    /// # Errors
    ///
    /// Returns `EstimateError::InvalidGeometry` if the geometry or an opening
    /// is invalid, or `EstimateError::InvalidOptions` if a count is negative.
    pub fn execute_detailed(&self) -> Result<MaterialCalculation> {
        let footprint = self.geometry.footprint()?;
        let walls = WallLayout::from_footprint(&footprint);
        walls.place_all(self.openings)?;
        let counts = self.options.validate()?;

        let metrics = RoomMetrics::measure(&footprint, self.geometry.height, self.openings);
        let ledger = build_ledger(&metrics, counts, &self.options);

        debug!(
            shape = ?metrics.shape,
            floor_area = metrics.floor_area,
            perimeter = metrics.perimeter,
            net_wall_area = metrics.net_wall_area,
            materials = ledger.len(),
            "calculated materials"
        );

        Ok(MaterialCalculation {
            walls,
            metrics,
            ledger,
        })
    }
}

/// Applies every material formula to measured room values.
#[must_use]
pub fn build_ledger(
    metrics: &RoomMetrics,
    counts: FixtureCounts,
    options: &MaterialOptions,
) -> MaterialLedger {
    let factors = ShapeFactors::for_shape(metrics.shape);
    let mut ledger = MaterialLedger::new();

    add_floor(&mut ledger, metrics, &factors);
    add_walls(&mut ledger, metrics, &factors);
    if options.use_osb_floor {
        add_subfloor(&mut ledger, metrics, &factors);
    }
    if options.use_suspended_ceiling {
        add_ceiling(&mut ledger, metrics);
    }
    add_electrical(&mut ledger, metrics, &factors, counts);

    ledger
}

fn add_floor(ledger: &mut MaterialLedger, metrics: &RoomMetrics, factors: &ShapeFactors) {
    let panels = ceil_units(metrics.floor_area * factors.floor_waste);
    ledger.insert(MaterialKey::FloorPanels, panels);
    ledger.insert(MaterialKey::Underlayment, panels);
}

fn add_walls(ledger: &mut MaterialLedger, metrics: &RoomMetrics, factors: &ShapeFactors) {
    let net = metrics.net_wall_area;
    let complexity = factors.wall_complexity;

    ledger.insert(MaterialKey::Paint, ceil_units(net * PAINT_LITERS_PER_M2));
    ledger.insert(
        MaterialKey::Drywall,
        ceil_units(net / DRYWALL_SHEET_M2 * complexity),
    );
    ledger.insert(
        MaterialKey::CwProfiles,
        ceil_units(metrics.perimeter / CW_PROFILE_SPACING_M * complexity),
    );
    ledger.insert(
        MaterialKey::UwProfiles,
        ceil_units(metrics.perimeter / UW_PROFILE_LENGTH_M * complexity),
    );
    ledger.insert(MaterialKey::MineralWool, ceil_units(net / MINERAL_WOOL_PACKAGE_M2));
    ledger.insert(MaterialKey::TnScrews, ceil_units(net / TN_SCREWS_PACKAGE_M2));
    ledger.insert(MaterialKey::WallPlaster, ceil_units(net / WALL_PLASTER_BAG_M2));
    ledger.insert(
        MaterialKey::FinishingPlaster,
        ceil_units(net / FINISHING_PLASTER_BAG_M2),
    );
}

fn add_subfloor(ledger: &mut MaterialLedger, metrics: &RoomMetrics, factors: &ShapeFactors) {
    let covered = metrics.floor_area * factors.floor_waste;
    ledger.insert(MaterialKey::Osb, ceil_units(covered / OSB_BOARD_M2));
    ledger.insert(MaterialKey::OsbScrews, ceil_units(covered / OSB_SCREWS_PACKAGE_M2));
    ledger.insert(
        MaterialKey::Baseboards,
        ceil_units((metrics.perimeter - metrics.door_width_total) / BASEBOARD_LENGTH_M),
    );
    ledger.insert(
        MaterialKey::BaseboardEnds,
        metrics
            .door_count
            .saturating_mul(BASEBOARD_ENDS_PER_DOOR)
            .saturating_add(factors.corner_count),
    );
}

fn add_ceiling(ledger: &mut MaterialLedger, metrics: &RoomMetrics) {
    let area = metrics.floor_area;
    ledger.insert(MaterialKey::CdProfiles, ceil_units(area));
    ledger.insert(MaterialKey::UdProfiles, ceil_units(area * UD_PROFILES_PER_M2));
    ledger.insert(MaterialKey::Hangers, ceil_units(area * HANGERS_PER_M2));
    ledger.insert(MaterialKey::Gypsum, ceil_units(area / CEILING_GYPSUM_BOARD_M2));
    ledger.insert(MaterialKey::Plaster, ceil_units(area / CEILING_PLASTER_BAG_M2));
}

fn add_electrical(
    ledger: &mut MaterialLedger,
    metrics: &RoomMetrics,
    factors: &ShapeFactors,
    counts: FixtureCounts,
) {
    let run = factors.average_cable_run(metrics.perimeter);
    ledger.insert(MaterialKey::Sockets, counts.sockets);
    ledger.insert(MaterialKey::Switches, counts.switches);
    // 1.5 mm² feeds lighting switches, 2.5 mm² feeds sockets.
    ledger.insert(MaterialKey::Cable15, ceil_units(f64::from(counts.switches) * run));
    ledger.insert(MaterialKey::Cable25, ceil_units(f64::from(counts.sockets) * run));
    ledger.insert(
        MaterialKey::JunctionBox,
        counts.sockets.saturating_add(counts.switches),
    );
}
