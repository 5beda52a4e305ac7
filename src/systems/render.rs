//! GPU rendering system
//!
//! Manages GPU rendering including:
//! - Render context and surface
//! - Point pipeline and depth buffer
//! - Frame rendering

use std::sync::Arc;
use winit::window::Window;
use hypertorus_render::{
    camera::SceneCamera,
    context::{ContextError, RenderContext},
    pipeline::{PointPipeline, RenderUniforms},
    PointCloudGeometry,
};
use crate::config::RenderingConfig;

/// Render error types
#[derive(Debug)]
pub enum RenderError {
    /// Surface was lost or outdated (resize, minimize, display change)
    SurfaceLost,
    /// GPU out of memory
    OutOfMemory,
    /// Other surface error
    Other(String),
}

impl std::fmt::Display for RenderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RenderError::SurfaceLost => write!(f, "Surface lost"),
            RenderError::OutOfMemory => write!(f, "Out of memory"),
            RenderError::Other(msg) => write!(f, "Render error: {}", msg),
        }
    }
}

impl std::error::Error for RenderError {}

/// Manages GPU rendering
///
/// This is the one scoped resource of the viewer: created when the window
/// appears and dropped on quit.
pub struct RenderSystem {
    context: RenderContext,
    point_pipeline: PointPipeline,
    render_config: RenderingConfig,
    w_range: f32,
}

impl RenderSystem {
    /// Create render system from window and config
    ///
    /// `capacity` is the expected number of points per frame.
    pub fn new(
        window: Arc<Window>,
        render_config: RenderingConfig,
        vsync: bool,
        capacity: usize,
        w_range: f32,
    ) -> Result<Self, ContextError> {
        let context = pollster::block_on(RenderContext::with_vsync(window, vsync))?;

        let mut point_pipeline =
            PointPipeline::new(&context.device, context.config.format, capacity);

        point_pipeline.ensure_depth_texture(
            &context.device,
            context.config.width,
            context.config.height,
        );

        Ok(Self {
            context,
            point_pipeline,
            render_config,
            w_range,
        })
    }

    /// Handle window resize
    pub fn resize(&mut self, width: u32, height: u32) {
        self.context
            .resize(winit::dpi::PhysicalSize::new(width, height));
        self.point_pipeline.ensure_depth_texture(
            &self.context.device,
            self.context.config.width,
            self.context.config.height,
        );
    }

    /// Reconfigure the surface at its current size (after `SurfaceLost`)
    pub fn reconfigure(&mut self) {
        let size = self.context.size;
        self.resize(size.width, size.height);
    }

    /// Render a single frame: clear, draw every point, present
    pub fn render_frame(
        &mut self,
        camera: &SceneCamera,
        geometry: &PointCloudGeometry,
    ) -> Result<(), RenderError> {
        self.point_pipeline.upload_points(
            &self.context.device,
            &self.context.queue,
            &geometry.vertices,
        );

        let render_uniforms = RenderUniforms {
            view_matrix: camera.view_matrix(),
            projection_matrix: camera.projection_matrix(self.context.aspect_ratio()),
            point_color: self.render_config.point_color,
            w_color_strength: self.render_config.w_color_strength,
            w_range: self.w_range,
            _padding: [0.0; 2],
        };
        self.point_pipeline
            .update_uniforms(&self.context.queue, &render_uniforms);

        // Get surface texture
        let output = match self.context.surface.get_current_texture() {
            Ok(output) => output,
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                return Err(RenderError::SurfaceLost)
            }
            Err(wgpu::SurfaceError::OutOfMemory) => return Err(RenderError::OutOfMemory),
            Err(e) => return Err(RenderError::Other(format!("{:?}", e))),
        };

        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let mut encoder = self
            .context
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Point Encoder"),
            });

        let bg = &self.render_config.background_color;
        self.point_pipeline.render(
            &mut encoder,
            &view,
            wgpu::Color {
                r: bg[0] as f64,
                g: bg[1] as f64,
                b: bg[2] as f64,
                a: bg[3] as f64,
            },
        );

        self.context.queue.submit(std::iter::once(encoder.finish()));
        output.present();

        Ok(())
    }

    /// Get current surface size
    pub fn size(&self) -> (u32, u32) {
        (self.context.config.width, self.context.config.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_error_display() {
        assert_eq!(format!("{}", RenderError::SurfaceLost), "Surface lost");
        assert_eq!(format!("{}", RenderError::OutOfMemory), "Out of memory");
        assert_eq!(
            format!("{}", RenderError::Other("test".to_string())),
            "Render error: test"
        );
    }
}
