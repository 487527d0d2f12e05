use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::opening::{Opening, PlacedOpening};
use super::room::{Footprint, RoomGeometry};
use crate::error::{GeometryError, Result};
use crate::math::polygon_2d::{outward_normal_cw, perimeter, signed_area};
use crate::math::{Point2, TOLERANCE};
use crate::units::Meters;

/// Index of a wall in a room's canonical wall ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WallId(pub usize);

impl fmt::Display for WallId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Side of the room a wall faces, by its outward normal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum WallSide {
    Top,
    Right,
    Bottom,
    Left,
}

impl fmt::Display for WallSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            WallSide::Top => "Top",
            WallSide::Right => "Right",
            WallSide::Bottom => "Bottom",
            WallSide::Left => "Left",
        })
    }
}

/// Which rectangle of the floor plan a wall bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum WallSection {
    Main,
    Extension,
}

/// A straight wall segment of the room outline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Wall {
    pub id: WallId,
    pub name: String,
    pub side: WallSide,
    pub section: WallSection,
    pub start: Point2,
    pub end: Point2,
    pub length: Meters,
}

impl Wall {
    /// Point at `distance` meters from the wall start, along the wall.
    #[must_use]
    pub fn point_at(&self, distance: Meters) -> Point2 {
        let dir = (self.end - self.start) / self.length.get();
        self.start + dir * distance.get()
    }
}

/// Ordered wall set of a room.
///
/// Walls run clockwise from the top-most, left-most outline vertex; the
/// ordering depends only on shape and corner.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WallLayout {
    walls: Vec<Wall>,
}

impl WallLayout {
    /// Builds the wall set of a validated floor plan.
    #[must_use]
    pub fn from_footprint(footprint: &Footprint) -> Self {
        let outline = footprint.outline();
        let extension = footprint.extension_bounds();
        let n = outline.len();

        // Clockwise outline must enclose the floor area and trace the perimeter.
        debug_assert!(
            (signed_area(&outline) + footprint.floor_area()).abs() < 1e-6,
            "outline area does not match floor area for {footprint:?}"
        );
        debug_assert!(
            (perimeter(&outline) - footprint.perimeter()).abs() < 1e-6,
            "outline length does not match perimeter for {footprint:?}"
        );

        let walls = (0..n)
            .map(|i| {
                let start = outline[i];
                let end = outline[(i + 1) % n];
                let side = side_of(&start, &end);
                let section = match extension {
                    Some((min, max)) if contains(&min, &max, &nalgebra::center(&start, &end)) => {
                        WallSection::Extension
                    }
                    _ => WallSection::Main,
                };
                let name = match (extension, section) {
                    (None, _) => format!("{side} wall"),
                    (Some(_), WallSection::Main) => format!("{side} wall (main)"),
                    (Some(_), WallSection::Extension) => format!("{side} wall (extension)"),
                };
                Wall {
                    id: WallId(i),
                    name,
                    side,
                    section,
                    start,
                    end,
                    length: Meters((end - start).norm()),
                }
            })
            .collect();

        Self { walls }
    }

    /// Returns the walls in canonical order.
    #[must_use]
    pub fn walls(&self) -> &[Wall] {
        &self.walls
    }

    /// Consumes the layout, returning the walls.
    #[must_use]
    pub fn into_walls(self) -> Vec<Wall> {
        self.walls
    }

    /// Number of walls.
    #[must_use]
    pub fn len(&self) -> usize {
        self.walls.len()
    }

    /// Returns `true` if the layout has no walls.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.walls.is_empty()
    }

    /// Sum of wall lengths in meters.
    #[must_use]
    pub fn total_length(&self) -> f64 {
        self.walls.iter().map(|w| w.length.get()).sum()
    }

    /// Looks up a wall by id.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::UnknownWall` if the id is outside this layout.
    pub fn wall(&self, id: WallId) -> Result<&Wall> {
        self.walls.get(id.0).ok_or_else(|| {
            GeometryError::UnknownWall {
                wall_id: id.0,
                wall_count: self.walls.len(),
            }
            .into()
        })
    }

    /// Maps an opening onto its wall.
    ///
    /// # Errors
    ///
    /// Returns `EstimateError::InvalidGeometry` if the wall does not exist,
    /// the opening size is not positive, or its position is outside
    /// `[0, wall.length)`.
    pub fn place(&self, opening: &Opening) -> Result<PlacedOpening> {
        opening.validate()?;
        let wall = self.wall(opening.wall_id)?;
        let position = opening.position_along_wall.get();
        if !(0.0..wall.length.get()).contains(&position) {
            return Err(GeometryError::InvalidOpening(format!(
                "position {position} is outside wall {} of length {}",
                wall.id,
                wall.length.get()
            ))
            .into());
        }
        let end_distance = position + opening.width.get();
        Ok(PlacedOpening {
            kind: opening.kind,
            wall_id: wall.id,
            start: wall.point_at(opening.position_along_wall),
            end: wall.point_at(Meters(end_distance.min(wall.length.get()))),
            fits: end_distance <= wall.length.get() + TOLERANCE,
        })
    }

    /// Places every opening, failing on the first invalid one.
    ///
    /// # Errors
    ///
    /// Returns the first error produced by [`WallLayout::place`].
    pub fn place_all(&self, openings: &[Opening]) -> Result<Vec<PlacedOpening>> {
        openings.iter().map(|o| self.place(o)).collect()
    }

    /// Splits openings into those bound to an existing wall and those whose
    /// wall id no longer exists (after a shape or corner change).
    #[must_use]
    pub fn partition_openings(&self, openings: &[Opening]) -> (Vec<Opening>, Vec<Opening>) {
        openings
            .iter()
            .cloned()
            .partition(|o| o.wall_id.0 < self.walls.len())
    }
}

/// Classifies a clockwise outline edge by its outward normal.
fn side_of(start: &Point2, end: &Point2) -> WallSide {
    let n = outward_normal_cw(start, end);
    if n.y.abs() > n.x.abs() {
        if n.y > 0.0 {
            WallSide::Top
        } else {
            WallSide::Bottom
        }
    } else if n.x > 0.0 {
        WallSide::Right
    } else {
        WallSide::Left
    }
}

fn contains(min: &Point2, max: &Point2, p: &Point2) -> bool {
    p.x >= min.x - TOLERANCE
        && p.x <= max.x + TOLERANCE
        && p.y >= min.y - TOLERANCE
        && p.y <= max.y + TOLERANCE
}

/// Resolves the ordered wall set of a room.
pub struct ResolveWalls<'a> {
    geometry: &'a RoomGeometry,
}

impl<'a> ResolveWalls<'a> {
    /// Creates a new `ResolveWalls` operation.
    #[must_use]
    pub fn new(geometry: &'a RoomGeometry) -> Self {
        Self { geometry }
    }

    /// Executes the operation.
    ///
    /// Rectangles yield 4 walls (top, right, bottom, left); L-shapes yield 7.
    ///
    /// # Errors
    ///
    /// Returns `EstimateError::InvalidGeometry` if the geometry is invalid.
    /// No partial wall list is returned.
    pub fn execute(&self) -> Result<WallLayout> {
        let footprint = self.geometry.footprint()?;
        let layout = WallLayout::from_footprint(&footprint);
        debug!(
            shape = ?footprint.shape(),
            walls = layout.len(),
            perimeter = layout.total_length(),
            "resolved walls"
        );
        Ok(layout)
    }
}
