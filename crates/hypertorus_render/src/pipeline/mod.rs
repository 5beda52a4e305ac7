//! Rendering pipeline components
//!
//! GPU data layouts and the point-list render pipeline.

pub mod types;
pub mod point_pipeline;

pub use types::{PointVertex, RenderUniforms};
pub use point_pipeline::PointPipeline;
