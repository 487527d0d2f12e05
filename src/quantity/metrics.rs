use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::geometry::{Footprint, Opening, RoomShape};
use crate::units::Meters;

/// Derived room measurements shared by every material formula.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomMetrics {
    pub shape: RoomShape,
    pub floor_area: f64,
    pub perimeter: f64,
    pub height: Meters,
    pub gross_wall_area: f64,
    pub door_area: f64,
    pub window_area: f64,
    /// Gross wall area minus openings, clamped to zero.
    pub net_wall_area: f64,
    pub door_count: u32,
    pub door_width_total: f64,
}

impl RoomMetrics {
    /// Measures a validated floor plan with its openings.
    #[must_use]
    pub fn measure(footprint: &Footprint, height: Meters, openings: &[Opening]) -> Self {
        let floor_area = footprint.floor_area();
        let perimeter = footprint.perimeter();
        let gross_wall_area = perimeter * height.get();

        let mut door_area = 0.0;
        let mut window_area = 0.0;
        let mut door_count = 0u32;
        let mut door_width_total = 0.0;
        for opening in openings {
            if opening.is_door() {
                door_area += opening.area();
                door_count = door_count.saturating_add(1);
                door_width_total += opening.width.get();
            } else {
                window_area += opening.area();
            }
        }

        let raw_net = gross_wall_area - door_area - window_area;
        if raw_net < 0.0 {
            warn!(
                gross_wall_area,
                opening_area = door_area + window_area,
                "openings exceed wall area, clamping net wall area to zero"
            );
        }

        Self {
            shape: footprint.shape(),
            floor_area,
            perimeter,
            height,
            gross_wall_area,
            door_area,
            window_area,
            net_wall_area: raw_net.max(0.0),
            door_count,
            door_width_total,
        }
    }
}
