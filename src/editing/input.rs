//! Gesture routing
//!
//! Turns mouse and keyboard input into drag-session calls:
//! - left press picks a handle and begins a drag
//! - pointer motion (or a mode switch) while held updates it
//! - left release ends it
//! - space toggles between move and rotate

use bevy::prelude::*;
use bevy::window::WindowFocused;

use crate::core::config::QuadSettings;
use crate::core::state::{ShapeList, TransformMode};
use crate::editing::drag_session::DragSession;
use crate::editing::hit_test::find_handle;
use crate::geometry::to_point;
use crate::io::PointerInfo;

/// Key that flips the transform mode
pub const MODE_TOGGLE_KEY: KeyCode = KeyCode::Space;

/// System to toggle the transform mode from the keyboard
pub fn handle_mode_toggle(keyboard: Res<ButtonInput<KeyCode>>, mut mode: ResMut<TransformMode>) {
    if keyboard.just_pressed(MODE_TOGGLE_KEY) {
        mode.toggle();
        info!("Transform mode: {}", mode.as_str());
    }
}

/// System to begin, update and end drags from the left mouse button
pub fn handle_pointer_gestures(
    mouse_input: Res<ButtonInput<MouseButton>>,
    pointer_info: Res<PointerInfo>,
    mode: Res<TransformMode>,
    settings: Res<QuadSettings>,
    mut session: ResMut<DragSession>,
    mut shapes: ResMut<ShapeList>,
) {
    let just_pressed = mouse_input.just_pressed(MouseButton::Left);
    if just_pressed {
        if let Some(world) = pointer_info.world {
            let pointer = to_point(world);
            match find_handle(&shapes, pointer, settings.pick_radius) {
                Some(hit) => {
                    session.begin_drag(&mut shapes, Some(hit.shape), hit.target, pointer);
                }
                None => debug!("Press at ({:.1}, {:.1}) missed every handle", world.x, world.y),
            }
        }
    }

    // A click can press and release within one frame
    if mouse_input.just_released(MouseButton::Left) {
        session.end_drag();
        return;
    }

    if just_pressed || !session.is_active() || !mouse_input.pressed(MouseButton::Left) {
        return;
    }

    // Re-run on motion, and on a mode switch so the new mode shows at once
    if pointer_info.is_changed() || mode.is_changed() {
        if let Some(world) = pointer_info.world {
            session.update_drag(&mut shapes, to_point(world), *mode);
        }
    }
}

/// System to end a drag when the window loses focus, where the release
/// event may never arrive
pub fn end_drag_on_focus_loss(
    mut focus_events: EventReader<WindowFocused>,
    settings: Res<QuadSettings>,
    mut session: ResMut<DragSession>,
) {
    for event in focus_events.read() {
        if !event.focused && settings.end_drag_on_focus_loss && session.is_active() {
            info!("Window lost focus, ending drag");
            session.end_drag();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_space_toggles_mode() {
        let mut app = App::new();
        app.init_resource::<ButtonInput<KeyCode>>()
            .init_resource::<TransformMode>()
            .add_systems(Update, handle_mode_toggle);

        app.world_mut()
            .resource_mut::<ButtonInput<KeyCode>>()
            .press(MODE_TOGGLE_KEY);
        app.update();
        assert_eq!(*app.world().resource::<TransformMode>(), TransformMode::Rotate);

        // Still held: no second toggle
        app.world_mut().resource_mut::<ButtonInput<KeyCode>>().clear();
        app.update();
        assert_eq!(*app.world().resource::<TransformMode>(), TransformMode::Rotate);
    }
}
