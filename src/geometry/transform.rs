//! Quad transform engine
//!
//! Converts a pointer drag into new quad geometry. Every call starts from the
//! frozen [`DragSnapshot`] taken when the gesture began, never from the live
//! shape, so long drags cannot accumulate drift.
//!
//! Move mode translates the shape (body), relocates the anchor, or scales the
//! quad in its own skewed frame (corners and edges). Rotate mode spins the
//! corners about the anchor. The anchor is a fixed point of every scale and
//! rotation.

use bevy::prelude::Resource;
use kurbo::{Affine, Point, Vec2};
use tracing::debug;

use super::basis::LocalBasis;
use super::utilities::{edge_midpoint, QUAD_CORNERS};

/// Projections at or below this magnitude never scale their axis
pub const SCALE_EPSILON: f64 = 0.01;

/// How drags are interpreted. Toggled with the space bar.
#[derive(Resource, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TransformMode {
    #[default]
    Move,
    Rotate,
}

impl TransformMode {
    /// The other mode
    pub fn toggled(self) -> Self {
        match self {
            TransformMode::Move => TransformMode::Rotate,
            TransformMode::Rotate => TransformMode::Move,
        }
    }

    /// Flip this mode in place
    pub fn toggle(&mut self) {
        *self = self.toggled();
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TransformMode::Move => "move",
            TransformMode::Rotate => "rotate",
        }
    }

    /// Parse a mode name as used on the command line and in settings.json
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "move" => Some(TransformMode::Move),
            "rotate" => Some(TransformMode::Rotate),
            _ => None,
        }
    }

    pub fn all_names() -> [&'static str; 2] {
        ["move", "rotate"]
    }
}

/// The handle a gesture grabbed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DragTarget {
    /// The quad interior
    Body,
    Anchor,
    /// A corner, `0..4`
    Corner(usize),
    /// The midpoint of edge `i`, between corner `i` and corner `i + 1`
    Edge(usize),
}

impl DragTarget {
    /// Corner and edge indices must name one of the four corners/edges
    pub fn is_valid(&self) -> bool {
        match *self {
            DragTarget::Body | DragTarget::Anchor => true,
            DragTarget::Corner(i) | DragTarget::Edge(i) => i < QUAD_CORNERS,
        }
    }
}

/// The part of a shape a transform can change
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuadGeometry {
    /// Corners in shape-local space
    pub points: [Point; QUAD_CORNERS],
    /// Pivot in shape-local space
    pub anchor: Point,
    /// Local-to-world translation
    pub offset: Vec2,
}

impl QuadGeometry {
    pub fn anchor_world(&self) -> Point {
        self.anchor + self.offset
    }

    pub fn world_points(&self) -> [Point; QUAD_CORNERS] {
        self.points.map(|p| p + self.offset)
    }
}

/// Geometry and pointer position frozen at the start of a drag
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragSnapshot {
    pub start: QuadGeometry,
    pub start_pointer: Point,
}

impl DragSnapshot {
    pub fn new(start: QuadGeometry, start_pointer: Point) -> Self {
        Self {
            start,
            start_pointer,
        }
    }
}

/// Compute the geometry for the current pointer position.
///
/// Total for all inputs: degenerate frames and near-zero projections fall back
/// to leaving the affected axis (or the whole quad) unscaled.
pub fn compute_transform(
    snapshot: &DragSnapshot,
    target: DragTarget,
    mode: TransformMode,
    current: Point,
) -> QuadGeometry {
    if !target.is_valid() {
        debug!("Ignoring transform for out of range target {:?}", target);
        return snapshot.start;
    }

    match mode {
        TransformMode::Move => move_or_scale(snapshot, target, current),
        TransformMode::Rotate => rotate(snapshot, target, current),
    }
}

fn move_or_scale(snapshot: &DragSnapshot, target: DragTarget, current: Point) -> QuadGeometry {
    let start = &snapshot.start;
    let delta = current - snapshot.start_pointer;

    match target {
        DragTarget::Body => QuadGeometry {
            offset: start.offset + delta,
            ..*start
        },
        DragTarget::Anchor => QuadGeometry {
            anchor: start.anchor + delta,
            ..*start
        },
        DragTarget::Corner(i) => scale_from_handle(start, start.points[i], current, Axes::Both),
        DragTarget::Edge(i) => {
            // Edges 0 and 2 run along u, so pulling them stretches v
            let axes = if i % 2 == 1 { Axes::U } else { Axes::V };
            scale_from_handle(start, edge_midpoint(&start.points, i), current, axes)
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Axes {
    U,
    V,
    Both,
}

/// Scale so the handle that started at `handle` (local space) follows the
/// pointer along the enabled axes.
fn scale_from_handle(start: &QuadGeometry, handle: Point, current: Point, axes: Axes) -> QuadGeometry {
    let Some(basis) = LocalBasis::from_quad(&start.points) else {
        debug!("Quad has no usable local frame, leaving geometry unchanged");
        return *start;
    };

    let (handle_u, handle_v) = basis.decompose(handle - start.anchor);
    let (pointer_u, pointer_v) = basis.decompose(current - start.anchor_world());

    let scale_u = match axes {
        Axes::U | Axes::Both => scale_factor(pointer_u, handle_u),
        Axes::V => 1.0,
    };
    let scale_v = match axes {
        Axes::V | Axes::Both => scale_factor(pointer_v, handle_v),
        Axes::U => 1.0,
    };

    QuadGeometry {
        points: start
            .points
            .map(|p| start.anchor + basis.scale(p - start.anchor, scale_u, scale_v)),
        ..*start
    }
}

/// `new / old`, or 1 when `old` is too close to zero to divide by
pub fn scale_factor(new: f64, old: f64) -> f64 {
    if old.abs() > SCALE_EPSILON {
        new / old
    } else {
        1.0
    }
}

fn rotate(snapshot: &DragSnapshot, target: DragTarget, current: Point) -> QuadGeometry {
    let start = &snapshot.start;
    let anchor_world = start.anchor_world();

    let target_point = match target {
        DragTarget::Anchor => return *start,
        DragTarget::Body => snapshot.start_pointer,
        DragTarget::Corner(i) => start.points[i] + start.offset,
        DragTarget::Edge(i) => edge_midpoint(&start.points, i) + start.offset,
    };

    let rotation = rotation_angle(anchor_world, target_point, current);
    let affine = Affine::rotate_about(rotation, start.anchor);

    QuadGeometry {
        points: start.points.map(|p| affine * p),
        ..*start
    }
}

/// Signed angle swept from `from` to `to` as seen from `pivot`, in radians.
///
/// Not normalized: callers only use it to build a rotation, where `θ` and
/// `θ ± 2π` are the same.
pub fn rotation_angle(pivot: Point, from: Point, to: Point) -> f64 {
    (to - pivot).atan2() - (from - pivot).atan2()
}
