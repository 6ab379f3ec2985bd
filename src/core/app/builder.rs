//! Application builder and initialization
//!
//! This module provides the main app creation function

use super::plugins::{configure_default_plugins, CorePluginGroup, RenderingPluginGroup};
use crate::core::config::{
    CliArgs, ConfigFile, QuadSettings, BACKGROUND_COLOR, DEFAULT_WINDOW_SIZE, WINDOW_TITLE,
};
use crate::core::state::ShapeList;
use anyhow::Result;
use bevy::prelude::*;
use bevy::winit::WinitSettings;

/// Creates a fully configured Quadpivot application.
///
/// CLI arguments are validated first; an unknown `--mode` is reported as an
/// error instead of silently falling back.
pub fn create_app(cli_args: CliArgs) -> Result<App> {
    cli_args
        .validate()
        .map_err(|e| anyhow::anyhow!("CLI validation failed: {}", e))?;

    let mut app = App::new();
    configure_resources(&mut app, cli_args);
    configure_window_plugins(&mut app);
    add_plugin_groups(&mut app);
    app.add_systems(Update, exit_on_esc);
    Ok(app)
}

/// Resolve settings from CLI and config file, then insert the editor state
fn configure_resources(app: &mut App, cli_args: CliArgs) {
    let config = ConfigFile::load();
    let mode = cli_args.get_transform_mode(config.as_ref());

    let mut settings = QuadSettings::default();
    if let Some(radius) = config.as_ref().and_then(|c| c.pick_radius) {
        settings.set_pick_radius(radius);
    }
    settings.end_drag_on_focus_loss = !cli_args.keep_drag_on_focus_loss;

    info!("Starting in {} mode", mode.as_str());

    app.insert_resource(cli_args)
        .insert_resource(settings)
        .insert_resource(mode)
        .insert_resource(ShapeList::initial())
        .insert_resource(ClearColor(BACKGROUND_COLOR));

    #[cfg(not(target_arch = "wasm32"))]
    app.insert_resource(WinitSettings::desktop_app());

    #[cfg(target_arch = "wasm32")]
    app.insert_resource(WinitSettings::game());
}

/// Configure window and default plugins
fn configure_window_plugins(app: &mut App) {
    let window_config = Window {
        title: WINDOW_TITLE.to_string(),
        resolution: DEFAULT_WINDOW_SIZE.into(),
        ..default()
    };
    app.add_plugins(configure_default_plugins(window_config));
}

/// Add all plugin groups to the application
fn add_plugin_groups(app: &mut App) {
    debug!("Adding plugin groups...");
    app.add_plugins((CorePluginGroup, RenderingPluginGroup));
    debug!("All plugin groups added successfully");
}

/// Quit on Escape
fn exit_on_esc(keyboard: Res<ButtonInput<KeyCode>>, mut exit: EventWriter<AppExit>) {
    if keyboard.just_pressed(KeyCode::Escape) {
        info!("Escape pressed, exiting");
        exit.write(AppExit::Success);
    }
}
