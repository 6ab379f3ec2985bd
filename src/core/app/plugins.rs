//! Plugin group definitions for the Quadpivot application
//!
//! Organized into logical groups for clarity and maintainability

use bevy::app::{PluginGroup, PluginGroupBuilder};
use bevy::log::{Level, LogPlugin};
use bevy::prelude::*;

/// Configure logging with performance optimization for release builds
pub fn configure_logging() -> LogPlugin {
    #[cfg(debug_assertions)]
    {
        LogPlugin {
            level: Level::INFO,
            filter: "quadpivot=info,bevy_render=warn,bevy_winit=warn,wgpu=warn,winit=warn,bevy_ecs::error::handler=error".to_string(),
            ..default()
        }
    }

    #[cfg(not(debug_assertions))]
    {
        LogPlugin {
            level: Level::WARN,
            filter: "quadpivot=warn,bevy=warn,wgpu=error,winit=error,bevy_ecs::error::handler=error".to_string(),
            ..default()
        }
    }
}

/// Configure default Bevy plugins for the application
pub fn configure_default_plugins(window: Window) -> PluginGroupBuilder {
    DefaultPlugins
        .set(WindowPlugin {
            primary_window: Some(Window {
                // Tell wasm to resize the window according to the available canvas
                fit_canvas_to_parent: true,
                // Tells wasm not to override default event handling, like F5, Ctrl+R etc.
                prevent_default_event_handling: false,
                ..window
            }),
            ..default()
        })
        .set(configure_logging())
}

/// Plugin group for pointer tracking and editing
#[derive(Default)]
pub struct CorePluginGroup;

impl PluginGroup for CorePluginGroup {
    fn build(self) -> PluginGroupBuilder {
        use crate::editing::EditingPlugin;
        use crate::io::PointerPlugin;

        PluginGroupBuilder::start::<Self>()
            .add(PointerPlugin)
            .add(EditingPlugin)
    }
}

/// Plugin group for rendering functionality
#[derive(Default)]
pub struct RenderingPluginGroup;

impl PluginGroup for RenderingPluginGroup {
    fn build(self) -> PluginGroupBuilder {
        use crate::rendering::{CameraPlugin, ShapeRenderingPlugin};

        PluginGroupBuilder::start::<Self>()
            .add(CameraPlugin)
            .add(ShapeRenderingPlugin)
    }
}
