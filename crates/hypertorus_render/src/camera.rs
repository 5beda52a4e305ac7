//! Scene camera with a fixed perspective and a slow whole-scene spin
//!
//! The camera sits `distance` units back along +Z looking at the origin.
//! Every frame the scene is turned a little further about `spin_axis`;
//! this is purely a viewing effect and never feeds back into the 4D math.

use hypertorus_math::mat4::{self, Mat4, IDENTITY};

/// Perspective camera looking at the origin
#[derive(Clone, Debug, PartialEq)]
pub struct SceneCamera {
    /// Vertical field of view in degrees
    pub fov_degrees: f32,
    /// Near clipping plane
    pub near: f32,
    /// Far clipping plane
    pub far: f32,
    /// Distance the camera is pulled back from the origin
    pub distance: f32,
    /// Axis the scene spins about
    pub spin_axis: [f32; 3],
    /// Degrees added to the spin every frame
    pub spin_step_degrees: f32,

    spin_degrees: f32,
}

impl Default for SceneCamera {
    fn default() -> Self {
        Self::new()
    }
}

impl SceneCamera {
    /// 45° field of view, 0.1..50 clip range, 30 units back, 1°/frame about Y
    pub fn new() -> Self {
        Self {
            fov_degrees: 45.0,
            near: 0.1,
            far: 50.0,
            distance: 30.0,
            spin_axis: [0.0, 1.0, 0.0],
            spin_step_degrees: 1.0,
            spin_degrees: 0.0,
        }
    }

    /// Advance the scene spin by one frame
    pub fn advance(&mut self) {
        self.spin_degrees = (self.spin_degrees + self.spin_step_degrees) % 360.0;
    }

    /// Accumulated spin in degrees, in (-360, 360)
    pub fn spin_degrees(&self) -> f32 {
        self.spin_degrees
    }

    /// Back to the unspun orientation
    pub fn reset(&mut self) {
        self.spin_degrees = 0.0;
    }

    /// World -> view: spin the scene, then push it away from the eye
    pub fn view_matrix(&self) -> Mat4 {
        mat4::mul(
            translation_matrix([0.0, 0.0, -self.distance]),
            axis_angle_matrix(self.spin_axis, self.spin_degrees.to_radians()),
        )
    }

    /// View -> clip for a surface with the given aspect ratio
    pub fn projection_matrix(&self, aspect: f32) -> Mat4 {
        perspective_matrix(self.fov_degrees.to_radians(), aspect, self.near, self.far)
    }
}

/// Right-handed perspective projection with a 0..1 depth range (wgpu clip space)
pub fn perspective_matrix(fov_y: f32, aspect: f32, near: f32, far: f32) -> Mat4 {
    let f = 1.0 / (fov_y / 2.0).tan();
    let nf = 1.0 / (near - far);

    [
        [f / aspect, 0.0, 0.0, 0.0],
        [0.0, f, 0.0, 0.0],
        [0.0, 0.0, far * nf, -1.0],
        [0.0, 0.0, near * far * nf, 0.0],
    ]
}

/// Homogeneous 3D translation
pub fn translation_matrix(t: [f32; 3]) -> Mat4 {
    let mut m = IDENTITY;
    m[3][0] = t[0];
    m[3][1] = t[1];
    m[3][2] = t[2];
    m
}

/// Homogeneous 3D rotation by `angle` radians about `axis` (right-hand rule)
///
/// A zero-length axis yields the identity.
pub fn axis_angle_matrix(axis: [f32; 3], angle: f32) -> Mat4 {
    let len = (axis[0] * axis[0] + axis[1] * axis[1] + axis[2] * axis[2]).sqrt();
    if len == 0.0 {
        return IDENTITY;
    }
    let (x, y, z) = (axis[0] / len, axis[1] / len, axis[2] / len);
    let c = angle.cos();
    let s = angle.sin();
    let t = 1.0 - c;

    [
        [t * x * x + c, t * x * y + s * z, t * x * z - s * y, 0.0],
        [t * x * y - s * z, t * y * y + c, t * y * z + s * x, 0.0],
        [t * x * z + s * y, t * y * z - s * x, t * z * z + c, 0.0],
        [0.0, 0.0, 0.0, 1.0],
    ]
}
