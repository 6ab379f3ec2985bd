//! Rendering and Visualization
//!
//! This module contains all rendering functionality:
//! - Camera setup
//! - Filled quad meshes for each shape
//! - Outline, anchor and handle overlays

pub mod cameras;
pub mod shapes;

use bevy::prelude::*;

use crate::editing::EditorSets;

// Re-export commonly used items
pub use cameras::{CameraPlugin, DesignCamera};
pub use shapes::ShapeFillMesh;

/// Plugin for drawing the shape list
pub struct ShapeRenderingPlugin;

impl Plugin for ShapeRenderingPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Update,
            (shapes::render_shape_fills, shapes::render_shape_handles)
                .in_set(EditorSets::Rendering),
        );
    }
}
