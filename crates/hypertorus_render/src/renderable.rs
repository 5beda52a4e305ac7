//! Renderable geometry - bridges rotated point sets to GPU vertices

use hypertorus_math::{rotate_points, PointSet, RotationAngles};
use crate::pipeline::PointVertex;

/// GPU-ready vertices for one frame
///
/// Rebuilt every frame from the original (unrotated) points, so the source
/// set is never modified.
#[derive(Clone, Debug, Default)]
pub struct PointCloudGeometry {
    pub vertices: Vec<PointVertex>,
}

impl PointCloudGeometry {
    /// Create an empty geometry
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-allocate room for `capacity` points
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(capacity),
        }
    }

    /// Vertices for points that are already rotated
    pub fn from_rotated(rotated: &PointSet) -> Self {
        let mut geometry = Self::with_capacity(rotated.len());
        geometry.rebuild_from_rotated(rotated);
        geometry
    }

    /// Rotate `points` by `angles`, project and collect vertices
    pub fn from_points(points: &PointSet, angles: &RotationAngles) -> Self {
        Self::from_rotated(&rotate_points(points, angles))
    }

    /// Refill in place, reusing the allocation
    pub fn rebuild(&mut self, points: &PointSet, angles: &RotationAngles) {
        self.rebuild_from_rotated(&rotate_points(points, angles));
    }

    fn rebuild_from_rotated(&mut self, rotated: &PointSet) {
        self.vertices.clear();
        self.vertices
            .extend(rotated.iter().map(|&p| PointVertex::from_rotated(p)));
    }

    /// Number of vertices (one per point)
    pub fn point_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hypertorus_math::{project_points, Vec4};

    fn sample() -> PointSet {
        PointSet::from(vec![
            Vec4::new(6.0, 0.0, 0.0, 0.0),
            Vec4::new(4.0, 1.0, 0.5, 3.0),
            Vec4::new(-5.0, 0.2, -1.0, 8.0),
        ])
    }

    #[test]
    fn test_zero_angles_pass_points_through() {
        let geometry = PointCloudGeometry::from_points(&sample(), &RotationAngles::ZERO);
        assert_eq!(geometry.point_count(), 3);
        assert_eq!(geometry.vertices[0].position, [6.0, 0.0, 0.0]);
        assert_eq!(geometry.vertices[2].w_depth, 8.0);
    }

    #[test]
    fn test_positions_match_projection() {
        let angles = RotationAngles::default();
        let geometry = PointCloudGeometry::from_points(&sample(), &angles);
        let projected = project_points(&rotate_points(&sample(), &angles));
        let positions: Vec<[f32; 3]> = geometry.vertices.iter().map(|v| v.position).collect();
        assert_eq!(positions, projected);
    }

    #[test]
    fn test_rebuild_replaces_contents() {
        let mut geometry = PointCloudGeometry::from_points(&sample(), &RotationAngles::ZERO);
        geometry.rebuild(&PointSet::new(), &RotationAngles::ZERO);
        assert!(geometry.is_empty());
        geometry.rebuild(&sample(), &RotationAngles::default());
        assert_eq!(geometry.point_count(), 3);
    }
}
