//! Editing Functionality
//!
//! This module contains all editing-related functionality:
//! - The drag session that owns the pre-drag snapshot
//! - Handle hit-testing against the shape list
//! - Input systems that route gestures into the session

pub mod drag_session;
pub mod hit_test;
pub mod input;

use bevy::prelude::*;

use crate::core::state::{ShapeList, TransformMode};

// Re-export commonly used items
pub use drag_session::{ActiveDrag, DragSession};
pub use hit_test::{find_handle, HandleHit};

/// Ordering for the editor's per-frame work: gestures land before drawing
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum EditorSets {
    Input,
    Rendering,
}

/// Plugin that owns the editable state and the gesture systems
pub struct EditingPlugin;

impl Plugin for EditingPlugin {
    fn build(&self, app: &mut App) {
        app.configure_sets(Update, (EditorSets::Input, EditorSets::Rendering).chain())
            .init_resource::<DragSession>()
            .init_resource::<TransformMode>()
            .add_systems(
                Update,
                (
                    input::end_drag_on_focus_loss,
                    input::handle_mode_toggle,
                    input::handle_pointer_gestures,
                )
                    .chain()
                    .in_set(EditorSets::Input),
            );

        // The shape set is fixed at startup; keep one inserted by the builder
        if !app.world().contains_resource::<ShapeList>() {
            app.insert_resource(ShapeList::initial());
        }
    }
}
