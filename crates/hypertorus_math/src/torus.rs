//! Point sampling on a torus embedded in 4D
//!
//! The XYZ part of every point lies on an ordinary ring torus: a tube of
//! radius `r` swept around a circle of radius `R` in the XY plane. The W
//! coordinate is drawn independently, spreading the ring through the
//! fourth dimension.
//!
//! The random source is always passed in, so tests can use a seeded or
//! mocked generator and get exact points back.

use std::f32::consts::TAU;

use rand::Rng;

use crate::{PointSet, Vec4};

/// Shape parameters of the 4D torus
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TorusParams {
    radius: f32,
    tube_radius: f32,
    w_range: f32,
}

impl Default for TorusParams {
    fn default() -> Self {
        Self {
            radius: 5.0,
            tube_radius: 1.0,
            w_range: 10.0,
        }
    }
}

impl TorusParams {
    /// Create validated torus parameters
    ///
    /// # Arguments
    /// * `radius` - Distance from the origin to the centre of the tube (R)
    /// * `tube_radius` - Radius of the tube itself (r)
    /// * `w_range` - W is drawn from `[0, w_range)`
    pub fn new(radius: f32, tube_radius: f32, w_range: f32) -> Result<Self, TorusError> {
        if !radius.is_finite() || radius <= 0.0 {
            return Err(TorusError::InvalidRadius(radius));
        }
        if !tube_radius.is_finite() || tube_radius < 0.0 {
            return Err(TorusError::InvalidTubeRadius(tube_radius));
        }
        if !w_range.is_finite() || w_range <= 0.0 {
            return Err(TorusError::InvalidWRange(w_range));
        }
        Ok(Self {
            radius,
            tube_radius,
            w_range,
        })
    }

    #[inline]
    pub fn radius(&self) -> f32 {
        self.radius
    }

    #[inline]
    pub fn tube_radius(&self) -> f32 {
        self.tube_radius
    }

    #[inline]
    pub fn w_range(&self) -> f32 {
        self.w_range
    }
}

/// Evaluate the torus parametrization
///
/// `u` is the angle around the hole, `v` the angle around the tube; `w`
/// is passed through as the fourth coordinate.
pub fn torus_point(u: f32, v: f32, w: f32, params: &TorusParams) -> Vec4 {
    let ring = params.radius + params.tube_radius * v.cos();
    Vec4::new(
        ring * u.cos(),
        ring * u.sin(),
        params.tube_radius * v.sin(),
        w,
    )
}

/// Sample `count` independent points on the torus
///
/// u and v are uniform in `[0, 2π)`, w is uniform in `[0, w_range)`. The
/// draws happen in that order for each point.
pub fn generate_points<R: Rng + ?Sized>(count: usize, params: &TorusParams, rng: &mut R) -> PointSet {
    (0..count)
        .map(|_| {
            let u = rng.gen_range(0.0..TAU);
            let v = rng.gen_range(0.0..TAU);
            let w = rng.gen_range(0.0..params.w_range);
            torus_point(u, v, w, params)
        })
        .collect()
}

/// Invalid torus parameters
#[derive(Debug, Clone, PartialEq)]
pub enum TorusError {
    InvalidRadius(f32),
    InvalidTubeRadius(f32),
    InvalidWRange(f32),
}

impl std::fmt::Display for TorusError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TorusError::InvalidRadius(r) => write!(f, "Torus radius must be positive, got {}", r),
            TorusError::InvalidTubeRadius(r) => {
                write!(f, "Tube radius must be non-negative, got {}", r)
            }
            TorusError::InvalidWRange(w) => write!(f, "W range must be positive, got {}", w),
        }
    }
}

impl std::error::Error for TorusError {}
