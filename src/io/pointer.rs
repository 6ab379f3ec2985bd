//! Pointer tracking
//!
//! Converts the window cursor into world space once per frame so every
//! editing system reads the same position.

use bevy::prelude::*;
use bevy::window::PrimaryWindow;

/// The cursor in world space, `None` when it is outside the window
#[derive(Resource, Debug, Default, Clone, Copy, PartialEq)]
pub struct PointerInfo {
    pub world: Option<Vec2>,
}

/// Refresh [`PointerInfo`] from the primary window and the 2D camera.
///
/// Only writes when the position actually changed, so change detection on
/// the resource means "the pointer moved".
pub fn update_pointer_info(
    windows: Query<&Window, With<PrimaryWindow>>,
    camera_query: Query<(&Camera, &GlobalTransform), With<Camera2d>>,
    mut pointer_info: ResMut<PointerInfo>,
) {
    let Ok(window) = windows.single() else {
        return;
    };
    let Ok((camera, camera_transform)) = camera_query.single() else {
        return;
    };

    let world = window
        .cursor_position()
        .and_then(|cursor| camera.viewport_to_world_2d(camera_transform, cursor).ok());

    if pointer_info.world != world {
        pointer_info.world = world;
    }
}

/// Plugin that keeps [`PointerInfo`] current
pub struct PointerPlugin;

impl Plugin for PointerPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<PointerInfo>()
            .add_systems(PreUpdate, update_pointer_info);
    }
}
