//! Quadpivot
pub mod core;
pub mod editing;
pub mod geometry;
pub mod io;
pub mod logging;
pub mod rendering;
