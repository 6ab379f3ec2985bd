//! Input plumbing shared by the editing systems

pub mod pointer;

// Pointer/mouse tracking
pub use pointer::{PointerInfo, PointerPlugin};
