//! Command line interface for Quadpivot
//!
//! Handles parsing command line arguments and provides
//! validation for user inputs.

use crate::core::config::ConfigFile;
use crate::geometry::TransformMode;
use bevy::prelude::*;
use clap::Parser;

/// Quadpivot CLI arguments
///
/// Examples:
///   quadpivot                            # Start in move mode
///   quadpivot --mode rotate              # Start in rotate mode
///   quadpivot --log-to-file              # Write logs to ~/.config/quadpivot/logs
///   quadpivot --new-config               # Create ~/.config/quadpivot and exit
#[derive(Parser, Debug, Resource, Clone, Default)]
#[clap(
    name = "quadpivot",
    version,
    about = "Drag, scale and rotate quads about a movable anchor",
    long_about = "Quadpivot is a small 2D editor for four-cornered shapes. Drag corners and edge midpoints to scale about each shape's anchor, drag the body to move it, or switch to rotate mode with Space to spin it about the anchor."
)]
pub struct CliArgs {
    /// Transform mode to start in
    #[clap(
        long = "mode",
        short = 'm',
        help = "Initial transform mode (move or rotate)",
        long_help = "Transform mode to start in. 'move' drags bodies and scales from corners and edges; 'rotate' spins shapes about their anchor. Space toggles between them at runtime."
    )]
    pub mode: Option<String>,

    /// Initialize user configuration directory with default settings
    #[clap(
        long = "new-config",
        help = "Initialize user config directory with default settings",
        long_help = "Initialize the ~/.config/quadpivot directory with a settings.json file holding the default mode and pick radius, plus a logs/ directory."
    )]
    pub new_config: bool,

    /// Redirect stdout and stderr to the daily log file
    #[clap(
        long = "log-to-file",
        help = "Write logs to ~/.config/quadpivot/logs",
        long_help = "Redirect all console output to ~/.config/quadpivot/logs/quadpivot-YYYY-MM-DD.log. Requires the config directory to exist (see --new-config)."
    )]
    pub log_to_file: bool,

    /// Keep a drag alive when the window loses focus
    #[clap(
        long = "keep-drag-on-focus-loss",
        help = "Do not end an active drag when the window loses focus"
    )]
    pub keep_drag_on_focus_loss: bool,
}

impl CliArgs {
    /// Validate the CLI arguments after parsing
    pub fn validate(&self) -> Result<(), String> {
        if let Some(mode_name) = &self.mode {
            if TransformMode::parse(mode_name).is_none() {
                let available_modes = TransformMode::all_names().join(", ");
                return Err(format!(
                    "Unknown mode: '{mode_name}'\nAvailable modes: {available_modes}"
                ));
            }
        }
        Ok(())
    }

    /// Create default CLI args for web builds
    #[cfg(target_arch = "wasm32")]
    pub fn default_for_web() -> Self {
        Self::default()
    }

    /// Get the start mode from CLI args, config file, or default
    ///
    /// Priority order:
    /// 1. CLI argument (--mode)
    /// 2. Config file setting (~/.config/quadpivot/settings.json)
    /// 3. Built-in default (move)
    pub fn get_transform_mode(&self, config: Option<&ConfigFile>) -> TransformMode {
        if let Some(mode) = self.mode.as_deref().and_then(TransformMode::parse) {
            debug!("Using mode from CLI: {}", mode.as_str());
            return mode;
        }

        if let Some(mode) = config.and_then(ConfigFile::transform_mode) {
            debug!("Using mode from config file: {}", mode.as_str());
            return mode;
        }

        debug!("Using default mode: {}", TransformMode::default().as_str());
        TransformMode::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_flags() {
        let args = CliArgs::parse_from(["quadpivot", "--mode", "Rotate", "--keep-drag-on-focus-loss"]);
        assert_eq!(args.mode.as_deref(), Some("Rotate"));
        assert!(args.keep_drag_on_focus_loss);
        assert!(!args.new_config);
        assert!(args.validate().is_ok());
    }

    #[test]
    fn test_unknown_mode_fails_validation() {
        let args = CliArgs::parse_from(["quadpivot", "-m", "shear"]);
        let error = args.validate().unwrap_err();
        assert!(error.contains("move, rotate"));
    }

    #[test]
    fn test_mode_priority() {
        let config = ConfigFile {
            default_mode: Some("rotate".to_string()),
            pick_radius: None,
        };

        let cli = CliArgs {
            mode: Some("move".to_string()),
            ..Default::default()
        };
        assert_eq!(cli.get_transform_mode(Some(&config)), TransformMode::Move);

        let bare = CliArgs::default();
        assert_eq!(bare.get_transform_mode(Some(&config)), TransformMode::Rotate);
        assert_eq!(bare.get_transform_mode(None), TransformMode::Move);
    }
}
