use serde::{Deserialize, Serialize};

use super::walls::WallId;
use crate::error::GeometryError;
use crate::math::Point2;
use crate::units::Meters;

/// Kind of wall opening.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum OpeningKind {
    Door,
    Window,
}

/// A door or window bound to a wall.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Opening {
    #[serde(rename = "type")]
    pub kind: OpeningKind,
    pub width: Meters,
    pub height: Meters,
    pub wall_id: WallId,
    /// Distance from the wall start to the opening's near edge.
    #[serde(default)]
    pub position_along_wall: Meters,
}

impl Opening {
    /// Creates a new opening.
    #[must_use]
    pub fn new(
        kind: OpeningKind,
        width: Meters,
        height: Meters,
        wall_id: WallId,
        position_along_wall: Meters,
    ) -> Self {
        Self {
            kind,
            width,
            height,
            wall_id,
            position_along_wall,
        }
    }

    /// Creates a door at the start of `wall_id`.
    #[must_use]
    pub fn door(width: Meters, height: Meters, wall_id: WallId) -> Self {
        Self::new(OpeningKind::Door, width, height, wall_id, Meters(0.0))
    }

    /// Creates a window at the start of `wall_id`.
    #[must_use]
    pub fn window(width: Meters, height: Meters, wall_id: WallId) -> Self {
        Self::new(OpeningKind::Window, width, height, wall_id, Meters(0.0))
    }

    /// Returns `true` for doors.
    #[must_use]
    pub fn is_door(&self) -> bool {
        self.kind == OpeningKind::Door
    }

    /// Opening area in square meters.
    #[must_use]
    pub fn area(&self) -> f64 {
        self.width * self.height
    }

    /// Checks that width and height are positive.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::InvalidOpening` otherwise.
    pub fn validate(&self) -> Result<(), GeometryError> {
        if !self.width.is_positive() || !self.height.is_positive() {
            return Err(GeometryError::InvalidOpening(format!(
                "{:?} on wall {} has size {} x {}",
                self.kind,
                self.wall_id,
                self.width.get(),
                self.height.get()
            )));
        }
        Ok(())
    }
}

/// An opening mapped onto its wall's coordinates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlacedOpening {
    pub kind: OpeningKind,
    pub wall_id: WallId,
    pub start: Point2,
    /// Far edge, clipped to the wall end.
    pub end: Point2,
    /// `false` when the opening runs past the end of its wall.
    pub fits: bool,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn area_is_width_times_height() {
        let door = Opening::door(Meters(0.9), Meters(2.0), WallId(0));
        assert!((door.area() - 1.8).abs() < 1e-12);
        assert!(door.is_door());
        assert!(!Opening::window(Meters(1.0), Meters(1.0), WallId(0)).is_door());
    }

    #[test]
    fn validate_rejects_empty_opening() {
        let window = Opening::window(Meters(0.0), Meters(1.2), WallId(1));
        assert!(matches!(
            window.validate(),
            Err(GeometryError::InvalidOpening(_))
        ));
    }

    #[test]
    fn deserializes_host_record() {
        let json = r#"{"type":"window","width":1.5,"height":1.2,"wallId":2,"positionAlongWall":0.4}"#;
        let window: Opening = serde_json::from_str(json).unwrap();
        assert_eq!(window.kind, OpeningKind::Window);
        assert_eq!(window.wall_id, WallId(2));
        assert!((window.position_along_wall.get() - 0.4).abs() < 1e-12);
    }
}
