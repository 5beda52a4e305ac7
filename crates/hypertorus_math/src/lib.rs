//! 4D Mathematics Library
//!
//! Pure math for the hypertorus viewer. Nothing in this crate touches the
//! GPU, so every stage can be exercised from plain unit tests.
//!
//! ## Pipeline
//!
//! - [`torus`] - samples a [`PointSet`] on a torus embedded in 4D
//! - [`rotation`] - composite plane rotations ([`RotationAngles`])
//! - [`projection`] - drops the W coordinate to get [`Point3D`]s
//!
//! ## Core Types
//!
//! - [`Vec4`] - 4D vector with x, y, z, w components
//! - [`Mat4`] - 4x4 matrix for transformations

mod vec4;
mod point_set;
pub mod mat4;
pub mod torus;
pub mod rotation;
pub mod projection;

pub use vec4::Vec4;
pub use point_set::PointSet;
pub use mat4::Mat4;
pub use torus::{generate_points, torus_point, TorusError, TorusParams};
pub use rotation::{rotate_point, rotate_points, RotationAngles, RotationPlane};
pub use projection::{project, project_points, Point3D};
