//! Geometry utility functions
//!
//! Shared helpers for moving between Bevy's `f32` render space and the
//! `f64` kurbo space the transform math runs in, plus small quad helpers.

use bevy::prelude::*;
use kurbo::{BezPath, Point};

/// Number of corners in every editable shape
pub const QUAD_CORNERS: usize = 4;

/// Convert a Bevy world position into a kurbo point
pub fn to_point(v: Vec2) -> Point {
    Point::new(v.x as f64, v.y as f64)
}

/// Convert a kurbo point into a Bevy world position
pub fn to_vec2(p: Point) -> Vec2 {
    Vec2::new(p.x as f32, p.y as f32)
}

/// Index of the corner that follows `index` around the quad
pub fn next_corner(index: usize) -> usize {
    (index + 1) % QUAD_CORNERS
}

/// Midpoint of edge `index`, which runs from corner `index` to the next corner
pub fn edge_midpoint(points: &[Point; QUAD_CORNERS], index: usize) -> Point {
    points[index].midpoint(points[next_corner(index)])
}

/// Closed outline of a quad, used for containment tests
pub fn quad_path(points: &[Point; QUAD_CORNERS]) -> BezPath {
    let mut path = BezPath::new();
    path.move_to(points[0]);
    for point in &points[1..] {
        path.line_to(*point);
    }
    path.close_path();
    path
}

#[cfg(test)]
mod tests {
    use super::*;
    use kurbo::Shape as _;

    fn unit_square() -> [Point; QUAD_CORNERS] {
        [
            Point::new(-1.0, -1.0),
            Point::new(1.0, -1.0),
            Point::new(1.0, 1.0),
            Point::new(-1.0, 1.0),
        ]
    }

    #[test]
    fn test_edge_midpoints_wrap_around() {
        let points = unit_square();
        assert_eq!(edge_midpoint(&points, 0), Point::new(0.0, -1.0));
        assert_eq!(edge_midpoint(&points, 1), Point::new(1.0, 0.0));
        // Edge 3 closes the quad back to corner 0
        assert_eq!(edge_midpoint(&points, 3), Point::new(-1.0, 0.0));
    }

    #[test]
    fn test_quad_path_contains() {
        let path = quad_path(&unit_square());
        assert!(path.contains(Point::new(0.2, -0.5)));
        assert!(!path.contains(Point::new(1.5, 0.0)));
    }

    #[test]
    fn test_vec2_round_trip() {
        let v = Vec2::new(12.5, -3.25);
        assert_eq!(to_vec2(to_point(v)), v);
    }
}
