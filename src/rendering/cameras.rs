//! Camera setup

use bevy::prelude::*;

/// Marker for the editor's 2D camera
#[derive(Component)]
pub struct DesignCamera;

/// Spawn the 2D camera, centered on the world origin
pub fn setup_camera(mut commands: Commands) {
    commands.spawn((Camera2d, DesignCamera));
}

pub struct CameraPlugin;

impl Plugin for CameraPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, setup_camera);
    }
}
