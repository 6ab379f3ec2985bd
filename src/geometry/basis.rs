//! Skewed local frame of a quad
//!
//! The frame is built from two adjacent edges of the pre-drag quad and is not
//! orthogonal in general. Coordinates are expressed in the frame itself, so a
//! sheared quad scales along its own edge directions rather than world axes.

use kurbo::{Point, Vec2};

use super::utilities::QUAD_CORNERS;

/// Edges shorter than this cannot define an axis
const MIN_AXIS_LENGTH: f64 = 1e-9;

/// Below this |u × v| the axes are treated as parallel
const MIN_AXIS_AREA: f64 = 1e-9;

/// Unit axes along edge 0 (u) and edge 3 reversed (v)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LocalBasis {
    pub u: Vec2,
    pub v: Vec2,
    det: f64,
}

impl LocalBasis {
    /// Build the frame from quad corners: `u` points from corner 0 to corner 1,
    /// `v` from corner 0 to corner 3.
    ///
    /// Returns `None` for a zero-length edge or parallel edges.
    pub fn from_quad(points: &[Point; QUAD_CORNERS]) -> Option<Self> {
        let u = points[1] - points[0];
        let v = points[3] - points[0];
        Self::from_axes(u, v)
    }

    /// Normalize two axis directions into a frame
    pub fn from_axes(u: Vec2, v: Vec2) -> Option<Self> {
        let u_len = u.hypot();
        let v_len = v.hypot();
        if u_len <= MIN_AXIS_LENGTH || v_len <= MIN_AXIS_LENGTH {
            return None;
        }
        let u = u / u_len;
        let v = v / v_len;
        let det = u.cross(v);
        if det.abs() <= MIN_AXIS_AREA {
            return None;
        }
        Some(Self { u, v, det })
    }

    /// Coordinates `(a, b)` such that `d = a·u + b·v`
    pub fn decompose(&self, d: Vec2) -> (f64, f64) {
        (d.cross(self.v) / self.det, self.u.cross(d) / self.det)
    }

    /// Inverse of [`LocalBasis::decompose`]
    pub fn compose(&self, a: f64, b: f64) -> Vec2 {
        self.u * a + self.v * b
    }

    /// Scale `d` by `scale_u` along u and `scale_v` along v
    pub fn scale(&self, d: Vec2, scale_u: f64, scale_v: f64) -> Vec2 {
        let (a, b) = self.decompose(d);
        self.compose(a * scale_u, b * scale_v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn test_axis_aligned_frame_matches_world() {
        let basis = LocalBasis::from_axes(Vec2::new(2.0, 0.0), Vec2::new(0.0, 5.0)).unwrap();
        assert_eq!(basis.u, Vec2::new(1.0, 0.0));
        assert_eq!(basis.v, Vec2::new(0.0, 1.0));
        let (a, b) = basis.decompose(Vec2::new(3.0, -4.0));
        assert!((a - 3.0).abs() < EPS);
        assert!((b + 4.0).abs() < EPS);
    }

    #[test]
    fn test_sheared_frame_recomposes_exactly() {
        let basis = LocalBasis::from_axes(Vec2::new(1.0, 0.0), Vec2::new(1.0, 1.0)).unwrap();
        let d = Vec2::new(-2.5, 7.0);
        let (a, b) = basis.decompose(d);
        let back = basis.compose(a, b);
        assert!((back - d).hypot() < EPS);
        // v = (1,1)/√2, so 7 units of y need 7√2 along v
        assert!((b - 7.0 * 2f64.sqrt()).abs() < EPS);
    }

    #[test]
    fn test_degenerate_axes_are_rejected() {
        assert!(LocalBasis::from_axes(Vec2::ZERO, Vec2::new(0.0, 1.0)).is_none());
        assert!(LocalBasis::from_axes(Vec2::new(1.0, 0.0), Vec2::new(-3.0, 0.0)).is_none());
    }

    #[test]
    fn test_scale_along_skewed_axis() {
        let basis = LocalBasis::from_axes(Vec2::new(1.0, 0.0), Vec2::new(1.0, 1.0)).unwrap();
        // A vector purely along v keeps its direction when only u is scaled
        let along_v = Vec2::new(3.0, 3.0);
        let scaled = basis.scale(along_v, 4.0, 1.0);
        assert!((scaled - along_v).hypot() < EPS);
    }
}
