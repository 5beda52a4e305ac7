//! GPU-compatible data types for the point pipeline
//!
//! These types are designed to match the shader layouts exactly.
//! All types derive Pod and Zeroable for safe GPU buffer operations.

use bytemuck::{Pod, Zeroable};
use hypertorus_math::{mat4::IDENTITY, project, Vec4};

/// A projected point ready for drawing
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Pod, Zeroable)]
pub struct PointVertex {
    /// Position in 3D space (x, y, z)
    pub position: [f32; 3],
    /// W coordinate before projection (only used for tinting)
    pub w_depth: f32,
}

impl PointVertex {
    /// Build a vertex from an already rotated 4D point
    pub fn from_rotated(point: Vec4) -> Self {
        Self {
            position: project(point),
            w_depth: point.w,
        }
    }
}

/// Render uniforms for the point pass
/// Layout: 160 bytes total (must match points.wgsl RenderUniforms)
#[repr(C)]
#[derive(Clone, Copy, Debug, Pod, Zeroable)]
pub struct RenderUniforms {
    /// View matrix (64 bytes)
    pub view_matrix: [[f32; 4]; 4],
    /// Projection matrix (64 bytes)
    pub projection_matrix: [[f32; 4]; 4],
    /// Base point color (16 bytes)
    pub point_color: [f32; 4],
    /// How strongly W tints the base color, 0..1
    pub w_color_strength: f32,
    /// W magnitude mapped to the ends of the tint gradient
    pub w_range: f32,
    pub _padding: [f32; 2],
}

impl Default for RenderUniforms {
    fn default() -> Self {
        Self {
            view_matrix: IDENTITY,
            projection_matrix: IDENTITY,
            point_color: [1.0, 1.0, 1.0, 1.0],
            w_color_strength: 0.0,
            w_range: 10.0,
            _padding: [0.0; 2],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::mem::size_of;

    #[test]
    fn test_point_vertex_size() {
        // 3 floats position + 1 float w_depth = 16 bytes
        assert_eq!(size_of::<PointVertex>(), 16);
    }

    #[test]
    fn test_render_uniforms_size() {
        // 2 matrices (128) + color (16) + strength, range, 2 padding (16)
        assert_eq!(size_of::<RenderUniforms>(), 160);
    }

    #[test]
    fn test_alignment() {
        assert_eq!(std::mem::align_of::<PointVertex>(), 4);
        assert_eq!(std::mem::align_of::<RenderUniforms>(), 4);
    }

    #[test]
    fn test_from_rotated_keeps_w_separately() {
        let v = PointVertex::from_rotated(Vec4::new(1.0, 2.0, 3.0, -4.0));
        assert_eq!(v.position, [1.0, 2.0, 3.0]);
        assert_eq!(v.w_depth, -4.0);
    }
}
