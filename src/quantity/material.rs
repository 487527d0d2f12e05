use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::UnknownMaterial;

/// Closed set of materials the calculator produces quantities for.
///
/// Serialized as the camelCase key used by the host application
/// (`floorPanels`, `cable15`, ...).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "camelCase")]
pub enum MaterialKey {
    FloorPanels,
    Underlayment,
    Paint,
    Drywall,
    CwProfiles,
    UwProfiles,
    MineralWool,
    TnScrews,
    WallPlaster,
    FinishingPlaster,
    Osb,
    OsbScrews,
    Baseboards,
    BaseboardEnds,
    CdProfiles,
    UdProfiles,
    Hangers,
    Gypsum,
    Plaster,
    Sockets,
    Switches,
    Cable15,
    Cable25,
    JunctionBox,
}

/// Unit of measure a quantity is purchased in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Unit {
    SquareMeter,
    Liter,
    Sheet,
    Piece,
    Package,
    Bag,
    Meter,
}

impl Unit {
    /// Short display symbol.
    #[must_use]
    pub fn symbol(self) -> &'static str {
        match self {
            Unit::SquareMeter => "m²",
            Unit::Liter => "l",
            Unit::Sheet => "sheet",
            Unit::Piece => "pc",
            Unit::Package => "pkg",
            Unit::Bag => "bag",
            Unit::Meter => "m",
        }
    }
}

/// Work area a material belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MaterialCategory {
    Floor,
    Walls,
    Subfloor,
    Ceiling,
    Electrical,
}

impl MaterialKey {
    /// Every material key in ledger order.
    pub const ALL: [MaterialKey; 24] = [
        MaterialKey::FloorPanels,
        MaterialKey::Underlayment,
        MaterialKey::Paint,
        MaterialKey::Drywall,
        MaterialKey::CwProfiles,
        MaterialKey::UwProfiles,
        MaterialKey::MineralWool,
        MaterialKey::TnScrews,
        MaterialKey::WallPlaster,
        MaterialKey::FinishingPlaster,
        MaterialKey::Osb,
        MaterialKey::OsbScrews,
        MaterialKey::Baseboards,
        MaterialKey::BaseboardEnds,
        MaterialKey::CdProfiles,
        MaterialKey::UdProfiles,
        MaterialKey::Hangers,
        MaterialKey::Gypsum,
        MaterialKey::Plaster,
        MaterialKey::Sockets,
        MaterialKey::Switches,
        MaterialKey::Cable15,
        MaterialKey::Cable25,
        MaterialKey::JunctionBox,
    ];

    /// The key as it appears in host records and price tables.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            MaterialKey::FloorPanels => "floorPanels",
            MaterialKey::Underlayment => "underlayment",
            MaterialKey::Paint => "paint",
            MaterialKey::Drywall => "drywall",
            MaterialKey::CwProfiles => "cwProfiles",
            MaterialKey::UwProfiles => "uwProfiles",
            MaterialKey::MineralWool => "mineralWool",
            MaterialKey::TnScrews => "tnScrews",
            MaterialKey::WallPlaster => "wallPlaster",
            MaterialKey::FinishingPlaster => "finishingPlaster",
            MaterialKey::Osb => "osb",
            MaterialKey::OsbScrews => "osbScrews",
            MaterialKey::Baseboards => "baseboards",
            MaterialKey::BaseboardEnds => "baseboardEnds",
            MaterialKey::CdProfiles => "cdProfiles",
            MaterialKey::UdProfiles => "udProfiles",
            MaterialKey::Hangers => "hangers",
            MaterialKey::Gypsum => "gypsum",
            MaterialKey::Plaster => "plaster",
            MaterialKey::Sockets => "sockets",
            MaterialKey::Switches => "switches",
            MaterialKey::Cable15 => "cable15",
            MaterialKey::Cable25 => "cable25",
            MaterialKey::JunctionBox => "junctionBox",
        }
    }

    /// Unit the quantity is expressed in.
    #[must_use]
    pub fn unit(self) -> Unit {
        match self {
            MaterialKey::FloorPanels | MaterialKey::Underlayment => Unit::SquareMeter,
            MaterialKey::Paint => Unit::Liter,
            MaterialKey::Drywall | MaterialKey::Osb | MaterialKey::Gypsum => Unit::Sheet,
            MaterialKey::MineralWool | MaterialKey::TnScrews | MaterialKey::OsbScrews => {
                Unit::Package
            }
            MaterialKey::WallPlaster | MaterialKey::FinishingPlaster | MaterialKey::Plaster => {
                Unit::Bag
            }
            MaterialKey::Cable15 | MaterialKey::Cable25 => Unit::Meter,
            MaterialKey::CwProfiles
            | MaterialKey::UwProfiles
            | MaterialKey::Baseboards
            | MaterialKey::BaseboardEnds
            | MaterialKey::CdProfiles
            | MaterialKey::UdProfiles
            | MaterialKey::Hangers
            | MaterialKey::Sockets
            | MaterialKey::Switches
            | MaterialKey::JunctionBox => Unit::Piece,
        }
    }

    /// Work area this material is used for.
    #[must_use]
    pub fn category(self) -> MaterialCategory {
        match self {
            MaterialKey::FloorPanels | MaterialKey::Underlayment => MaterialCategory::Floor,
            MaterialKey::Paint
            | MaterialKey::Drywall
            | MaterialKey::CwProfiles
            | MaterialKey::UwProfiles
            | MaterialKey::MineralWool
            | MaterialKey::TnScrews
            | MaterialKey::WallPlaster
            | MaterialKey::FinishingPlaster => MaterialCategory::Walls,
            MaterialKey::Osb
            | MaterialKey::OsbScrews
            | MaterialKey::Baseboards
            | MaterialKey::BaseboardEnds => MaterialCategory::Subfloor,
            MaterialKey::CdProfiles
            | MaterialKey::UdProfiles
            | MaterialKey::Hangers
            | MaterialKey::Gypsum
            | MaterialKey::Plaster => MaterialCategory::Ceiling,
            MaterialKey::Sockets
            | MaterialKey::Switches
            | MaterialKey::Cable15
            | MaterialKey::Cable25
            | MaterialKey::JunctionBox => MaterialCategory::Electrical,
        }
    }
}

impl fmt::Display for MaterialKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MaterialKey {
    type Err = UnknownMaterial;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        MaterialKey::ALL
            .iter()
            .copied()
            .find(|k| k.as_str() == s)
            .ok_or_else(|| UnknownMaterial(s.to_owned()))
    }
}
