//! Editable shapes and the shape list
//!
//! The shape set is fixed at startup. Shapes are never created or removed at
//! runtime; drags only rewrite their geometry.

use bevy::prelude::*;
use kurbo::{Point, Vec2 as KVec2};

use crate::geometry::{QuadGeometry, QUAD_CORNERS};

/// Stable identity of a shape
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Reflect)]
pub struct ShapeId(pub u32);

/// A quad with its own anchor, placed in the world by an offset
#[derive(Debug, Clone, PartialEq)]
pub struct Shape {
    pub id: ShapeId,
    /// Corners, anchor (both shape-local) and local-to-world offset
    pub geometry: QuadGeometry,
    pub color: Color,
}

impl Shape {
    /// Create a shape with its anchor at the centroid of the corners
    pub fn new(id: ShapeId, points: [Point; QUAD_CORNERS], offset: KVec2, color: Color) -> Self {
        let sum = points
            .iter()
            .fold(KVec2::ZERO, |acc, p| acc + p.to_vec2());
        let anchor = (sum / QUAD_CORNERS as f64).to_point();
        Self {
            id,
            geometry: QuadGeometry {
                points,
                anchor,
                offset,
            },
            color,
        }
    }

    /// Same shape with the anchor moved to `anchor` (shape-local)
    pub fn with_anchor(mut self, anchor: Point) -> Self {
        self.geometry.anchor = anchor;
        self
    }

    /// Corners in world space
    pub fn world_points(&self) -> [Point; QUAD_CORNERS] {
        self.geometry.world_points()
    }

    /// Anchor in world space
    pub fn anchor_world(&self) -> Point {
        self.geometry.anchor_world()
    }
}

/// All shapes in draw order (last is topmost) plus the current selection
#[derive(Resource, Debug, Clone, Default)]
pub struct ShapeList {
    shapes: Vec<Shape>,
    selected: Option<ShapeId>,
}

impl ShapeList {
    pub fn new(shapes: Vec<Shape>) -> Self {
        Self {
            shapes,
            selected: None,
        }
    }

    /// The shapes the editor opens with
    pub fn initial() -> Self {
        let square = [
            Point::new(-60.0, -60.0),
            Point::new(60.0, -60.0),
            Point::new(60.0, 60.0),
            Point::new(-60.0, 60.0),
        ];
        let wide = [
            Point::new(-90.0, -40.0),
            Point::new(90.0, -40.0),
            Point::new(90.0, 40.0),
            Point::new(-90.0, 40.0),
        ];
        // Sheared so its local frame is not orthogonal
        let slanted = [
            Point::new(-80.0, -50.0),
            Point::new(40.0, -50.0),
            Point::new(80.0, 50.0),
            Point::new(-40.0, 50.0),
        ];

        Self::new(vec![
            Shape::new(
                ShapeId(0),
                square,
                KVec2::new(-260.0, 0.0),
                Color::srgb(0.95, 0.55, 0.2),
            ),
            Shape::new(
                ShapeId(1),
                wide,
                KVec2::new(0.0, 150.0),
                Color::srgb(0.25, 0.6, 0.95),
            )
            .with_anchor(Point::new(-90.0, -40.0)),
            Shape::new(
                ShapeId(2),
                slanted,
                KVec2::new(240.0, -120.0),
                Color::srgb(0.35, 0.8, 0.45),
            ),
        ])
    }

    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &Shape> {
        self.shapes.iter()
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    pub fn get(&self, id: ShapeId) -> Option<&Shape> {
        self.shapes.iter().find(|s| s.id == id)
    }

    pub fn get_mut(&mut self, id: ShapeId) -> Option<&mut Shape> {
        self.shapes.iter_mut().find(|s| s.id == id)
    }

    pub fn selected(&self) -> Option<ShapeId> {
        self.selected
    }

    pub fn is_selected(&self, id: ShapeId) -> bool {
        self.selected == Some(id)
    }

    /// Mark a shape as selected. Selection only affects drawing.
    pub fn select(&mut self, id: ShapeId) {
        if self.selected != Some(id) {
            debug!("Selected shape {:?}", id);
        }
        self.selected = Some(id);
    }
}
