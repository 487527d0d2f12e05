use super::{Point2, Vector2, TOLERANCE};

/// Signed area of a closed polygon by the shoelace formula.
///
/// Positive for counter-clockwise, negative for clockwise; zero below three vertices.
#[must_use]
pub fn signed_area(points: &[Point2]) -> f64 {
    if points.len() < 3 {
        return 0.0;
    }
    let doubled: f64 = points
        .iter()
        .zip(points.iter().cycle().skip(1))
        .map(|(a, b)| a.x * b.y - b.x * a.y)
        .sum();
    doubled * 0.5
}

/// Sum of edge lengths of a closed polygon.
#[must_use]
pub fn perimeter(points: &[Point2]) -> f64 {
    let n = points.len();
    if n < 2 {
        return 0.0;
    }
    (0..n)
        .map(|i| (points[(i + 1) % n] - points[i]).norm())
        .sum()
}

/// Rotates a closed polygon so it starts at the top-most vertex (largest y),
/// breaking ties by smallest x.
#[must_use]
pub fn rotate_to_top_left(points: &[Point2]) -> Vec<Point2> {
    if points.len() < 2 {
        return points.to_vec();
    }
    let mut best = 0;
    for (i, pt) in points.iter().enumerate().skip(1) {
        let b = &points[best];
        if pt.y > b.y + TOLERANCE || (pt.y - b.y).abs() < TOLERANCE && pt.x < b.x {
            best = i;
        }
    }
    let mut rotated = Vec::with_capacity(points.len());
    rotated.extend_from_slice(&points[best..]);
    rotated.extend_from_slice(&points[..best]);
    rotated
}

/// Returns the outward normal of edge `a → b` for a clockwise polygon.
///
/// Interior lies to the right of a clockwise edge, so the outward side is the left normal.
#[must_use]
pub fn outward_normal_cw(a: &Point2, b: &Point2) -> Vector2 {
    let d = b - a;
    Vector2::new(-d.y, d.x)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_square_ccw() -> Vec<Point2> {
        vec![
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 0.0),
            Point2::new(1.0, 1.0),
            Point2::new(0.0, 1.0),
        ]
    }

    #[test]
    fn signed_area_orientation() {
        let pts = unit_square_ccw();
        assert!((signed_area(&pts) - 1.0).abs() < TOLERANCE);
        let mut cw = pts;
        cw.reverse();
        assert!((signed_area(&cw) + 1.0).abs() < TOLERANCE);
    }

    #[test]
    fn signed_area_degenerate() {
        assert!(signed_area(&[Point2::new(0.0, 0.0)]).abs() < TOLERANCE);
        assert!(signed_area(&[]).abs() < TOLERANCE);
    }

    #[test]
    fn perimeter_of_square() {
        assert!((perimeter(&unit_square_ccw()) - 4.0).abs() < TOLERANCE);
    }

    #[test]
    fn top_left_rotation() {
        let rotated = rotate_to_top_left(&unit_square_ccw());
        assert!((rotated[0].x).abs() < TOLERANCE);
        assert!((rotated[0].y - 1.0).abs() < TOLERANCE);
        assert_eq!(rotated.len(), 4);
    }

    #[test]
    fn outward_normal_of_top_edge_points_up() {
        let n = outward_normal_cw(&Point2::new(0.0, 1.0), &Point2::new(1.0, 1.0));
        assert!(n.y > 0.0);
        assert!(n.x.abs() < TOLERANCE);
    }
}
