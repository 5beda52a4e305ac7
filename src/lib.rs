//! Hypertorus - 4D torus point-cloud viewer
//!
//! Samples points on a torus in 4D, rotates them through three planes,
//! drops W and draws the result with wgpu.

pub mod config;
pub mod systems;
