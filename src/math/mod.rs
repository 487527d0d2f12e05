pub mod polygon_2d;

/// 2D point type (floor-plan coordinates in meters, y pointing up).
pub type Point2 = nalgebra::Point2<f64>;

/// 2D vector type.
pub type Vector2 = nalgebra::Vector2<f64>;

/// Global tolerance for floating-point comparisons.
pub const TOLERANCE: f64 = 1e-9;

/// Rounds a quantity up to the next whole purchasable unit.
///
/// Values within [`TOLERANCE`] of an integer snap to it first, so float noise
/// such as `20.0 * 1.15 = 22.999999999999996` yields `23` rather than `24`.
/// Negative and non-finite inputs yield `0`.
#[must_use]
pub fn ceil_units(value: f64) -> u32 {
    if !value.is_finite() || value <= 0.0 {
        return 0;
    }
    let nearest = value.round();
    let snapped = if (value - nearest).abs() < TOLERANCE {
        nearest
    } else {
        value.ceil()
    };
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let units = snapped.min(f64::from(u32::MAX)) as u32;
    units
}
