//! Point-Cloud Rendering Library
//!
//! This crate provides the wgpu-based pipeline that draws projected 4D
//! points as an unconnected point list.
//!
//! ## Key Components
//!
//! - [`context::RenderContext`] - WGPU device, queue, and surface management
//! - [`camera::SceneCamera`] - Perspective camera with an incremental scene spin
//! - [`pipeline::PointPipeline`] - Point-list render pipeline with depth testing
//! - [`renderable::PointCloudGeometry`] - Converts rotated points to GPU vertices

pub mod context;
pub mod camera;
pub mod pipeline;
pub mod renderable;

// Re-export math types for convenience
pub use hypertorus_math::{PointSet, Vec4, Point3D};

pub use renderable::PointCloudGeometry;
