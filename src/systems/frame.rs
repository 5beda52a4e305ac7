//! Per-frame point update
//!
//! Owns the originally generated points and, each frame:
//! - Advances the scene spin
//! - Rotates the original points by the constant angles
//! - Projects them into the vertex list the renderer draws
//! - Computes when the next frame may start

use std::time::{Duration, Instant};

use hypertorus_math::{PointSet, RotationAngles};
use hypertorus_render::{camera::SceneCamera, PointCloudGeometry};

/// Main loop state
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoopState {
    /// Drawing frames
    Running,
    /// Quit requested; the rendering context has been released
    Terminated,
}

/// Drives the rotate -> project step of every frame
pub struct FrameSystem {
    points: PointSet,
    angles: RotationAngles,
    camera: SceneCamera,
    geometry: PointCloudGeometry,
    throttle: Duration,
    frame_count: u64,
}

impl FrameSystem {
    /// Create a frame system over a fixed set of generated points
    pub fn new(
        points: PointSet,
        angles: RotationAngles,
        camera: SceneCamera,
        throttle: Duration,
    ) -> Self {
        let geometry = PointCloudGeometry::with_capacity(points.len());
        Self {
            points,
            angles,
            camera,
            geometry,
            throttle,
            frame_count: 0,
        }
    }

    /// Run one frame of math
    ///
    /// Always starts again from the unrotated points, so the result does
    /// not drift however many frames have run.
    pub fn update(&mut self) -> &PointCloudGeometry {
        self.camera.advance();
        self.geometry.rebuild(&self.points, &self.angles);
        self.frame_count += 1;
        &self.geometry
    }

    /// Camera and geometry of the most recent `update`
    pub fn frame(&self) -> (&SceneCamera, &PointCloudGeometry) {
        (&self.camera, &self.geometry)
    }

    /// Earliest time the frame after one presented at `presented_at` may start
    pub fn next_deadline(&self, presented_at: Instant) -> Instant {
        presented_at + self.throttle
    }

    /// The generated points, never modified after startup
    pub fn points(&self) -> &PointSet {
        &self.points
    }

    pub fn point_count(&self) -> usize {
        self.points.len()
    }

    /// Frames updated so far
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }
}
