//! Application state management.
//!
//! The shape list and the process-wide transform mode. The mode type lives
//! with the transform engine and is re-exported here for the Bevy layer.

pub mod shapes;

pub use crate::geometry::TransformMode;
pub use shapes::{Shape, ShapeId, ShapeList};
