//! Application initialization and management
//!
//! This module contains the core application setup, including:
//! - App builder functions
//! - Plugin organization

pub mod builder;
pub mod plugins;

pub use builder::create_app;
