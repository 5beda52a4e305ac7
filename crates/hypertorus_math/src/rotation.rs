//! Composite 4D rotations
//!
//! In 4D, rotations happen in planes rather than around axes. The viewer
//! uses three of the six planes, all of which involve X: XY, XZ and XW.
//! Each gets its own angle and the three matrices are multiplied into a
//! single transform.

use std::f32::consts::FRAC_PI_4;

use serde::{Serialize, Deserialize};

use crate::mat4::{self, Mat4};
use crate::{PointSet, Vec4};

/// The 6 rotation planes in 4D space
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RotationPlane {
    XY,
    XZ,
    XW,
    YZ,
    YW,
    ZW,
}

impl RotationPlane {
    /// Axis indices spanning the plane (0=X, 1=Y, 2=Z, 3=W)
    pub fn axes(self) -> (usize, usize) {
        match self {
            RotationPlane::XY => (0, 1),
            RotationPlane::XZ => (0, 2),
            RotationPlane::XW => (0, 3),
            RotationPlane::YZ => (1, 2),
            RotationPlane::YW => (1, 3),
            RotationPlane::ZW => (2, 3),
        }
    }

    /// Rotation matrix by `angle` radians confined to this plane
    pub fn matrix(self, angle: f32) -> Mat4 {
        let (p1, p2) = self.axes();
        mat4::plane_rotation(angle, p1, p2)
    }
}

/// Angles (radians) for the three rotation planes
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RotationAngles {
    /// XY plane
    pub theta: f32,
    /// XZ plane
    pub phi: f32,
    /// XW plane
    pub psi: f32,
}

impl Default for RotationAngles {
    fn default() -> Self {
        Self {
            theta: FRAC_PI_4,
            phi: FRAC_PI_4,
            psi: FRAC_PI_4,
        }
    }
}

impl RotationAngles {
    /// No rotation at all
    pub const ZERO: Self = Self { theta: 0.0, phi: 0.0, psi: 0.0 };

    pub const fn new(theta: f32, phi: f32, psi: f32) -> Self {
        Self { theta, phi, psi }
    }

    /// Composite rotation `R_xy(theta) · R_xz(phi) · R_xw(psi)`
    ///
    /// The product order is fixed: applied to a column vector, the XW
    /// rotation acts first and the XY rotation last.
    pub fn to_matrix(&self) -> Mat4 {
        let r_xy = RotationPlane::XY.matrix(self.theta);
        let r_xz = RotationPlane::XZ.matrix(self.phi);
        let r_xw = RotationPlane::XW.matrix(self.psi);
        mat4::mul(mat4::mul(r_xy, r_xz), r_xw)
    }
}

/// Rotate a single point by the composite rotation
pub fn rotate_point(point: Vec4, angles: &RotationAngles) -> Vec4 {
    mat4::transform(angles.to_matrix(), point)
}

/// Rotate every point of a set, returning a new set in the same order
pub fn rotate_points(points: &PointSet, angles: &RotationAngles) -> PointSet {
    let m = angles.to_matrix();
    points.iter().map(|&p| mat4::transform(m, p)).collect()
}
