//! Core application functionality
//!
//! This module contains the core application logic, including:
//! - Application initialization and configuration
//! - State management
//! - Settings and CLI handling

pub mod app;
pub mod cli;
pub mod config;
pub mod runner;
pub mod state;

// Re-export commonly used items
pub use app::create_app;
pub use cli::CliArgs;
pub use config::{ConfigFile, QuadSettings};
pub use runner::run_app;
pub use state::{ShapeList, TransformMode};
