pub mod cost;
pub mod error;
pub mod estimate;
pub mod geometry;
pub mod math;
pub mod pricing;
pub mod quantity;
pub mod units;

pub use cost::{AggregateCost, CostBreakdown};
pub use error::{
    EstimateError, GeometryError, OptionsError, PricingError, Result, UnknownMaterial,
};
pub use estimate::{EstimateRoom, RoomEstimate};
pub use geometry::{
    compute_floor_area, compute_perimeter, Corner, Opening, OpeningKind, ResolveWalls,
    RoomGeometry, RoomShape, Wall, WallId, WallLayout,
};
pub use pricing::{PriceCatalog, PriceTable, PriceTier};
pub use quantity::{CalculateMaterials, MaterialKey, MaterialLedger, MaterialOptions};
pub use units::Meters;
