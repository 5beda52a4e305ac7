//! Orthographic 4D -> 3D projection
//!
//! The projector simply forgets W. Nothing about the dropped coordinate can
//! be recovered from the result.

use crate::{PointSet, Vec4};

/// A projected point (x, y, z)
pub type Point3D = [f32; 3];

/// Keep the first three coordinates of a 4D point
#[inline]
pub fn project(point: Vec4) -> Point3D {
    point.xyz()
}

/// Project every point of a set, preserving order
pub fn project_points(points: &PointSet) -> Vec<Point3D> {
    points.iter().map(|&p| project(p)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_project_drops_w() {
        assert_eq!(project(Vec4::new(1.0, -2.0, 3.5, 100.0)), [1.0, -2.0, 3.5]);
    }

    #[test]
    fn test_points_differing_only_in_w_collide() {
        let a = Vec4::new(1.0, 2.0, 3.0, 0.0);
        let b = Vec4::new(1.0, 2.0, 3.0, 7.0);
        assert_eq!(project(a), project(b));
    }

    #[test]
    fn test_project_points_order_and_count() {
        let set = PointSet::from(vec![
            Vec4::new(1.0, 0.0, 0.0, 1.0),
            Vec4::new(2.0, 0.0, 0.0, 2.0),
            Vec4::new(3.0, 0.0, 0.0, 3.0),
        ]);
        let projected = project_points(&set);
        assert_eq!(projected, vec![[1.0, 0.0, 0.0], [2.0, 0.0, 0.0], [3.0, 0.0, 0.0]]);
        assert!(project_points(&PointSet::new()).is_empty());
    }
}
