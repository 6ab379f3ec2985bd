//! Application settings
//!
//! Built-in defaults for the window and the editor's interaction tuning.

use bevy::prelude::*;

pub const WINDOW_TITLE: &str = "Quadpivot";
pub const DEFAULT_WINDOW_SIZE: Vec2 = Vec2::new(1024.0, 768.0);
pub const BACKGROUND_COLOR: Color = Color::srgb(0.1, 0.1, 0.12);

/// Default pick distance for handles, in world units
pub const DEFAULT_PICK_RADIUS: f64 = 10.0;

/// Interaction and drawing settings shared by the editing systems
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct QuadSettings {
    /// How close the pointer must be to grab a handle
    pub pick_radius: f64,
    pub corner_handle_radius: f32,
    pub edge_handle_radius: f32,
    pub anchor_radius: f32,
    /// End the active drag when the window loses focus
    pub end_drag_on_focus_loss: bool,
}

impl Default for QuadSettings {
    fn default() -> Self {
        Self {
            pick_radius: DEFAULT_PICK_RADIUS,
            corner_handle_radius: 6.0,
            edge_handle_radius: 4.0,
            anchor_radius: 7.0,
            end_drag_on_focus_loss: true,
        }
    }
}

impl QuadSettings {
    /// Set the pick radius, ignoring values that could never hit anything
    pub fn set_pick_radius(&mut self, radius: f64) {
        if radius.is_finite() && radius > 0.0 {
            self.pick_radius = radius;
        } else {
            warn!("Ignoring invalid pick radius {}", radius);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pick_radius_rejects_nonsense() {
        let mut settings = QuadSettings::default();
        settings.set_pick_radius(-3.0);
        settings.set_pick_radius(f64::NAN);
        assert_eq!(settings.pick_radius, DEFAULT_PICK_RADIUS);
        settings.set_pick_radius(14.0);
        assert_eq!(settings.pick_radius, 14.0);
    }
}
