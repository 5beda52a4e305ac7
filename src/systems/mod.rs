//! Application systems
//!
//! Window, GPU and per-frame logic kept apart from the event loop in main.rs.

mod frame;
mod render;
mod window;

pub use frame::{FrameSystem, LoopState};
pub use render::{RenderError, RenderSystem};
pub use window::{WindowError, WindowSystem};
