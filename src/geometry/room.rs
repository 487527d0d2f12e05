use serde::{Deserialize, Serialize};

use crate::error::{GeometryError, Result};
use crate::math::{Point2, TOLERANCE};
use crate::units::Meters;

/// Floor-plan shape of a room.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RoomShape {
    Rectangle,
    LShape,
}

/// Corner of the main rectangle occupied by the L-shape extension.
///
/// `Top*` extensions sit above the main rectangle and `Bottom*` below it,
/// flush with its left or right side. The extension may be shorter or
/// longer than the main rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Corner {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

impl Corner {
    /// All corners in declaration order.
    pub const ALL: [Corner; 4] = [
        Corner::TopLeft,
        Corner::TopRight,
        Corner::BottomLeft,
        Corner::BottomRight,
    ];

    /// Mirror flags `(x, y)` that map the bottom-left layout onto this corner.
    fn mirrors(self) -> (bool, bool) {
        match self {
            Corner::BottomLeft => (false, false),
            Corner::BottomRight => (true, false),
            Corner::TopLeft => (false, true),
            Corner::TopRight => (true, true),
        }
    }
}

/// Room geometry as stored by the host application.
///
/// Lengths run along the x axis (top and bottom walls), widths along the y
/// axis (left and right walls). The L-shape extension attaches along the
/// main rectangle's length.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomGeometry {
    pub shape: RoomShape,
    pub main_width: Meters,
    pub main_length: Meters,
    pub height: Meters,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secondary_width: Option<Meters>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secondary_length: Option<Meters>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub corner: Option<Corner>,
}

impl RoomGeometry {
    /// Creates a rectangular room.
    #[must_use]
    pub fn rectangle(width: Meters, length: Meters, height: Meters) -> Self {
        Self {
            shape: RoomShape::Rectangle,
            main_width: width,
            main_length: length,
            height,
            secondary_width: None,
            secondary_length: None,
            corner: None,
        }
    }

    /// Creates an L-shaped room whose extension occupies `corner`.
    #[must_use]
    pub fn l_shape(
        main_width: Meters,
        main_length: Meters,
        secondary_width: Meters,
        secondary_length: Meters,
        corner: Corner,
        height: Meters,
    ) -> Self {
        Self {
            shape: RoomShape::LShape,
            main_width,
            main_length,
            height,
            secondary_width: Some(secondary_width),
            secondary_length: Some(secondary_length),
            corner: Some(corner),
        }
    }

    /// Validates every dimension and returns the typed floor plan.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError` if a required dimension or corner is missing,
    /// a dimension is not positive, a secondary dimension is given for a
    /// rectangle, or the extension is exactly as long as the main rectangle.
    pub fn footprint(&self) -> std::result::Result<Footprint, GeometryError> {
        let main_width = positive("mainWidth", self.main_width)?;
        let main_length = positive("mainLength", self.main_length)?;
        positive("height", self.height)?;

        match self.shape {
            RoomShape::Rectangle => {
                if self.secondary_width.is_some() {
                    return Err(GeometryError::UnexpectedDimension {
                        field: "secondaryWidth",
                    });
                }
                if self.secondary_length.is_some() {
                    return Err(GeometryError::UnexpectedDimension {
                        field: "secondaryLength",
                    });
                }
                Ok(Footprint::Rectangle {
                    width: main_width,
                    length: main_length,
                })
            }
            RoomShape::LShape => {
                let secondary_width = required("secondaryWidth", self.secondary_width)?;
                let secondary_length = required("secondaryLength", self.secondary_length)?;
                let corner = self.corner.ok_or(GeometryError::MissingCorner)?;
                if (secondary_length.get() - main_length.get()).abs() < TOLERANCE {
                    return Err(GeometryError::FlushExtension {
                        length: secondary_length.get(),
                    });
                }
                Ok(Footprint::LShape {
                    main_width,
                    main_length,
                    secondary_width,
                    secondary_length,
                    corner,
                })
            }
        }
    }
}

fn positive(field: &'static str, value: Meters) -> std::result::Result<Meters, GeometryError> {
    if value.is_positive() {
        Ok(value)
    } else {
        Err(GeometryError::NonPositiveDimension {
            field,
            value: value.get(),
        })
    }
}

fn required(
    field: &'static str,
    value: Option<Meters>,
) -> std::result::Result<Meters, GeometryError> {
    value
        .ok_or(GeometryError::MissingDimension { field })
        .and_then(|v| positive(field, v))
}

/// A validated floor plan.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Footprint {
    Rectangle {
        width: Meters,
        length: Meters,
    },
    LShape {
        main_width: Meters,
        main_length: Meters,
        secondary_width: Meters,
        secondary_length: Meters,
        corner: Corner,
    },
}

impl Footprint {
    /// Returns the shape tag.
    #[must_use]
    pub fn shape(&self) -> RoomShape {
        match self {
            Footprint::Rectangle { .. } => RoomShape::Rectangle,
            Footprint::LShape { .. } => RoomShape::LShape,
        }
    }

    /// Floor area in square meters.
    #[must_use]
    pub fn floor_area(&self) -> f64 {
        match *self {
            Footprint::Rectangle { width, length } => width * length,
            Footprint::LShape {
                main_width,
                main_length,
                secondary_width,
                secondary_length,
                ..
            } => main_width * main_length + secondary_width * secondary_length,
        }
    }

    /// Outline perimeter in meters. Independent of the L-shape corner.
    #[must_use]
    pub fn perimeter(&self) -> f64 {
        match *self {
            Footprint::Rectangle { width, length } => 2.0 * (width.get() + length.get()),
            Footprint::LShape {
                main_width,
                main_length,
                secondary_width,
                secondary_length,
                ..
            } => {
                let overall = main_length.get().max(secondary_length.get());
                2.0 * (main_width.get() + overall + secondary_width.get())
            }
        }
    }

    /// Closed clockwise outline starting at the top-most, left-most vertex.
    ///
    /// For L-shapes the straight side shared by both rectangles keeps its
    /// junction vertex, so the outline has 7 vertices.
    #[must_use]
    pub fn outline(&self) -> Vec<Point2> {
        match *self {
            Footprint::Rectangle { width, length } => {
                let (w, l) = (width.get(), length.get());
                vec![
                    Point2::new(0.0, w),
                    Point2::new(l, w),
                    Point2::new(l, 0.0),
                    Point2::new(0.0, 0.0),
                ]
            }
            Footprint::LShape {
                main_width,
                main_length,
                secondary_width,
                secondary_length,
                corner,
            } => {
                let (l, sw, sl) = (
                    main_length.get(),
                    secondary_width.get(),
                    secondary_length.get(),
                );
                let h = main_width.get() + sw;
                // Extension below the main rectangle, flush left. The step
                // (l, sw) -> (sl, sw) runs west for a shorter extension and
                // east for a longer one.
                let base = [
                    Point2::new(0.0, h),
                    Point2::new(l, h),
                    Point2::new(l, sw),
                    Point2::new(sl, sw),
                    Point2::new(sl, 0.0),
                    Point2::new(0.0, 0.0),
                    Point2::new(0.0, sw),
                ];
                let (mirror_x, mirror_y) = corner.mirrors();
                let mut points: Vec<Point2> = base
                    .iter()
                    .map(|p| self.place(*p, mirror_x, mirror_y))
                    .collect();
                if mirror_x != mirror_y {
                    points.reverse();
                }
                crate::math::polygon_2d::rotate_to_top_left(&points)
            }
        }
    }

    /// Axis-aligned extent `(min, max)` of the L-shape extension in outline coordinates.
    #[must_use]
    pub fn extension_bounds(&self) -> Option<(Point2, Point2)> {
        match *self {
            Footprint::Rectangle { .. } => None,
            Footprint::LShape {
                secondary_width,
                secondary_length,
                corner,
                ..
            } => {
                let (mirror_x, mirror_y) = corner.mirrors();
                let a = self.place(Point2::new(0.0, 0.0), mirror_x, mirror_y);
                let b = self.place(
                    Point2::new(secondary_length.get(), secondary_width.get()),
                    mirror_x,
                    mirror_y,
                );
                Some((
                    Point2::new(a.x.min(b.x), a.y.min(b.y)),
                    Point2::new(a.x.max(b.x), a.y.max(b.y)),
                ))
            }
        }
    }

    /// Maps a point of the bottom-left layout onto this footprint's corner.
    fn place(&self, p: Point2, mirror_x: bool, mirror_y: bool) -> Point2 {
        let (l, h) = match *self {
            Footprint::Rectangle { width, length } => (length.get(), width.get()),
            Footprint::LShape {
                main_width,
                main_length,
                secondary_width,
                secondary_length,
                ..
            } => (
                main_length.get().max(secondary_length.get()),
                main_width.get() + secondary_width.get(),
            ),
        };
        Point2::new(
            if mirror_x { l - p.x } else { p.x },
            if mirror_y { h - p.y } else { p.y },
        )
    }
}

/// Computes the floor area of a room in square meters.
///
/// # Errors
///
/// Returns `EstimateError::InvalidGeometry` if the geometry is invalid.
pub fn compute_floor_area(geometry: &RoomGeometry) -> Result<f64> {
    Ok(geometry.footprint()?.floor_area())
}

/// Computes the wall perimeter of a room in meters.
///
/// # Errors
///
/// Returns `EstimateError::InvalidGeometry` if the geometry is invalid.
pub fn compute_perimeter(geometry: &RoomGeometry) -> Result<f64> {
    Ok(geometry.footprint()?.perimeter())
}
