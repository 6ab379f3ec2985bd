//! Drag session state
//!
//! A session owns the snapshot of one shape taken at pointer-down. Every
//! pointer move re-runs the transform engine from that snapshot. At most one
//! session exists; starting a new one discards the old.

use bevy::prelude::Resource;
use kurbo::Point;
use tracing::{debug, warn};

use crate::core::state::{ShapeId, ShapeList};
use crate::geometry::{compute_transform, DragSnapshot, DragTarget, TransformMode};

/// The gesture currently in progress
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ActiveDrag {
    pub shape: ShapeId,
    pub target: DragTarget,
    pub snapshot: DragSnapshot,
}

/// Resource holding the single active drag, if any
#[derive(Resource, Debug, Default)]
pub struct DragSession {
    active: Option<ActiveDrag>,
}

impl DragSession {
    /// Start dragging `target` on `shape` from `start_world`.
    ///
    /// Replaces any session already in progress. Does nothing when no shape
    /// is given, the shape is unknown or the handle index is out of range.
    /// Returns whether a session was started.
    pub fn begin_drag(
        &mut self,
        shapes: &mut ShapeList,
        shape: Option<ShapeId>,
        target: DragTarget,
        start_world: Point,
    ) -> bool {
        let Some(id) = shape else {
            return false;
        };
        if !target.is_valid() {
            warn!("Refusing to drag invalid handle {:?} on shape {:?}", target, id);
            return false;
        }
        let Some(found) = shapes.get(id) else {
            warn!("Refusing to drag unknown shape {:?}", id);
            return false;
        };

        let snapshot = DragSnapshot::new(found.geometry, start_world);
        if let Some(previous) = self.active.take() {
            debug!("Abandoning drag of {:?} for a new gesture", previous.shape);
        }
        self.active = Some(ActiveDrag {
            shape: id,
            target,
            snapshot,
        });
        shapes.select(id);

        debug!(
            "Began drag on {:?} target {:?} at ({:.1}, {:.1})",
            id, target, start_world.x, start_world.y
        );
        true
    }

    /// Apply the drag for the pointer at `current_world` under `mode`.
    ///
    /// Only the dragged shape is written. Returns whether anything was applied.
    pub fn update_drag(&self, shapes: &mut ShapeList, current_world: Point, mode: TransformMode) -> bool {
        let Some(drag) = &self.active else {
            return false;
        };
        let Some(shape) = shapes.get_mut(drag.shape) else {
            warn!("Dragged shape {:?} no longer exists", drag.shape);
            return false;
        };

        shape.geometry = compute_transform(&drag.snapshot, drag.target, mode, current_world);
        true
    }

    /// Finish the gesture. Safe to call with no session active.
    pub fn end_drag(&mut self) {
        if let Some(drag) = self.active.take() {
            debug!("Ended drag on {:?} target {:?}", drag.shape, drag.target);
        }
    }

    pub fn is_active(&self) -> bool {
        self.active.is_some()
    }

    pub fn active(&self) -> Option<&ActiveDrag> {
        self.active.as_ref()
    }

    pub fn active_shape(&self) -> Option<ShapeId> {
        self.active.map(|drag| drag.shape)
    }

    pub fn active_target(&self) -> Option<DragTarget> {
        self.active.map(|drag| drag.target)
    }
}
