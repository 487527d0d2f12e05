mod calculate;
mod ledger;
mod material;
mod metrics;
mod options;

pub use calculate::{build_ledger, CalculateMaterials, MaterialCalculation};
pub use ledger::MaterialLedger;
pub use material::{MaterialCategory, MaterialKey, Unit};
pub use crate::error::UnknownMaterial;
pub use metrics::RoomMetrics;
pub use options::{FixtureCounts, MaterialOptions};
