//! Geometric Primitives and Operations

pub mod basis;
pub mod transform;
pub mod utilities;

// Re-export commonly used items
pub use basis::LocalBasis;
pub use transform::{
    compute_transform, DragSnapshot, DragTarget, QuadGeometry, TransformMode, SCALE_EPSILON,
};
pub use utilities::{edge_midpoint, to_point, to_vec2, QUAD_CORNERS};
