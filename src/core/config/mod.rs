//! Application configuration management
//!
//! This module handles all configuration aspects:
//! - User configuration files
//! - Application settings

pub mod settings;
pub mod user_config;

// Simple, clear re-exports
pub use crate::core::cli::CliArgs;
pub use settings::{QuadSettings, BACKGROUND_COLOR, DEFAULT_WINDOW_SIZE, WINDOW_TITLE};
pub use user_config::ConfigFile;
