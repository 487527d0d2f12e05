pub mod opening;
pub mod room;
pub mod walls;

pub use opening::{Opening, OpeningKind, PlacedOpening};
pub use room::{compute_floor_area, compute_perimeter, Corner, Footprint, RoomGeometry, RoomShape};
pub use walls::{ResolveWalls, Wall, WallId, WallLayout, WallSection, WallSide};
