//! Handle picking
//!
//! Resolves a world-space pointer position into the shape and handle it
//! grabs. Handles beat bodies, so a corner poking over another shape can
//! still be grabbed. Within each pass the topmost shape wins.

use kurbo::{Point, Shape as _};

use crate::core::state::{Shape, ShapeId, ShapeList};
use crate::geometry::utilities::{edge_midpoint, quad_path};
use crate::geometry::{DragTarget, QUAD_CORNERS};

/// A resolved pick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HandleHit {
    pub shape: ShapeId,
    pub target: DragTarget,
}

/// Find the handle under `pointer`, checking handles within `pick_radius`
/// before falling back to quad interiors.
pub fn find_handle(shapes: &ShapeList, pointer: Point, pick_radius: f64) -> Option<HandleHit> {
    shapes
        .iter()
        .rev()
        .find_map(|shape| {
            handle_at(shape, pointer, pick_radius).map(|target| HandleHit {
                shape: shape.id,
                target,
            })
        })
        .or_else(|| {
            shapes
                .iter()
                .rev()
                .find(|shape| quad_path(&shape.world_points()).contains(pointer))
                .map(|shape| HandleHit {
                    shape: shape.id,
                    target: DragTarget::Body,
                })
        })
}

/// The anchor, corner or edge handle of `shape` under `pointer`
fn handle_at(shape: &Shape, pointer: Point, pick_radius: f64) -> Option<DragTarget> {
    let near = |p: Point| p.distance(pointer) <= pick_radius;

    if near(shape.anchor_world()) {
        return Some(DragTarget::Anchor);
    }

    let corners = shape.world_points();
    if let Some(i) = (0..QUAD_CORNERS).find(|&i| near(corners[i])) {
        return Some(DragTarget::Corner(i));
    }

    (0..QUAD_CORNERS)
        .find(|&i| near(edge_midpoint(&corners, i)))
        .map(DragTarget::Edge)
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy::prelude::Color;
    use kurbo::Vec2;

    fn square(id: u32, offset: Vec2) -> Shape {
        Shape::new(
            ShapeId(id),
            [
                Point::new(-10.0, -10.0),
                Point::new(10.0, -10.0),
                Point::new(10.0, 10.0),
                Point::new(-10.0, 10.0),
            ],
            offset,
            Color::WHITE,
        )
    }

    #[test]
    fn test_picks_each_handle_kind() {
        let shapes = ShapeList::new(vec![square(0, Vec2::new(100.0, 0.0))]);
        let hit = |x, y| find_handle(&shapes, Point::new(x, y), 3.0).map(|h| h.target);

        assert_eq!(hit(100.0, 0.0), Some(DragTarget::Anchor));
        assert_eq!(hit(111.0, 9.0), Some(DragTarget::Corner(2)));
        assert_eq!(hit(100.0, -11.0), Some(DragTarget::Edge(0)));
        assert_eq!(hit(89.0, 1.0), Some(DragTarget::Edge(3)));
        assert_eq!(hit(105.0, 5.0), Some(DragTarget::Body));
        assert_eq!(hit(0.0, 0.0), None);
    }

    #[test]
    fn test_topmost_shape_wins() {
        let shapes = ShapeList::new(vec![square(0, Vec2::ZERO), square(1, Vec2::new(5.0, 0.0))]);
        let hit = find_handle(&shapes, Point::new(2.0, 4.0), 1.0).unwrap();
        assert_eq!(hit.shape, ShapeId(1));
        assert_eq!(hit.target, DragTarget::Body);
    }

    #[test]
    fn test_handle_beats_body_of_shape_above() {
        // Corner 1 of the lower shape lies inside the upper shape
        let shapes = ShapeList::new(vec![square(0, Vec2::ZERO), square(1, Vec2::new(15.0, -5.0))]);
        let hit = find_handle(&shapes, Point::new(10.0, -10.0), 2.0).unwrap();
        assert_eq!(hit.shape, ShapeId(0));
        assert_eq!(hit.target, DragTarget::Corner(1));
    }
}
