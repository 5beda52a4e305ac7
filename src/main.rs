//! Hypertorus - 4D torus point-cloud viewer
//!
//! Generates points on a torus in 4D once, then every frame rotates them,
//! projects them to 3D and draws them while the scene slowly spins.

use std::error::Error;
use std::time::Instant;

use rand::rngs::StdRng;
use rand::SeedableRng;
use winit::{
    application::ApplicationHandler,
    event::{StartCause, WindowEvent},
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    window::WindowId,
};

use hypertorus::config::AppConfig;
use hypertorus::systems::{FrameSystem, LoopState, RenderError, RenderSystem, WindowSystem};
use hypertorus_math::{generate_points, TorusParams};

/// Main application state
struct App {
    /// Application configuration
    config: AppConfig,
    state: LoopState,
    window: Option<WindowSystem>,
    /// GPU resources, present only while a window exists
    renderer: Option<RenderSystem>,
    frames: FrameSystem,
    /// Set when initialization failed; main turns it into a non-zero exit
    fatal: Option<Box<dyn Error>>,
}

impl App {
    fn new(config: AppConfig) -> Self {
        let params = config.torus.to_params().unwrap_or_else(|e| {
            log::warn!("Invalid torus parameters: {}. Using defaults.", e);
            TorusParams::default()
        });

        let mut rng = match config.torus.seed {
            Some(seed) => {
                log::info!("Seeding point generator with {}", seed);
                StdRng::seed_from_u64(seed)
            }
            None => StdRng::from_entropy(),
        };

        let points = generate_points(config.torus.point_count, &params, &mut rng);
        log::info!(
            "Generated {} points (R = {}, r = {}, w in [0, {}))",
            points.len(),
            params.radius(),
            params.tube_radius(),
            params.w_range()
        );

        let frames = FrameSystem::new(
            points,
            config.rotation,
            config.camera.to_scene_camera(),
            config.frame.throttle(),
        );

        Self {
            config,
            state: LoopState::Running,
            window: None,
            renderer: None,
            frames,
            fatal: None,
        }
    }

    /// Release the rendering context and stop the loop
    fn shutdown(&mut self, event_loop: &ActiveEventLoop) {
        if self.state == LoopState::Terminated {
            return;
        }
        self.state = LoopState::Terminated;
        self.renderer = None;
        self.window = None;
        log::info!("Shut down after {} frames", self.frames.frame_count());
        event_loop.exit();
    }

    /// Record a fatal error and stop
    fn fail(&mut self, event_loop: &ActiveEventLoop, error: Box<dyn Error>) {
        log::error!("{}", error);
        self.fatal = Some(error);
        self.shutdown(event_loop);
    }

    fn init_graphics(&mut self, event_loop: &ActiveEventLoop) -> Result<(), Box<dyn Error>> {
        let window = WindowSystem::create(event_loop, &self.config.window)?;
        let renderer = RenderSystem::new(
            window.window().clone(),
            self.config.rendering.clone(),
            self.config.window.vsync,
            self.frames.point_count(),
            self.config.torus.w_range,
        )?;

        let (width, height) = renderer.size();
        log::info!("Rendering {} points at {}x{}", self.frames.point_count(), width, height);

        window.update_title(self.frames.point_count());
        window.request_redraw();

        self.window = Some(window);
        self.renderer = Some(renderer);
        Ok(())
    }

    fn redraw(&mut self, event_loop: &ActiveEventLoop) {
        if self.state != LoopState::Running {
            return;
        }

        self.frames.update();
        let (camera, geometry) = self.frames.frame();
        let result = match self.renderer.as_mut() {
            Some(renderer) => renderer.render_frame(camera, geometry),
            None => return,
        };

        match result {
            Ok(()) => {}
            Err(RenderError::SurfaceLost) => {
                if let Some(renderer) = self.renderer.as_mut() {
                    renderer.reconfigure();
                }
            }
            Err(RenderError::OutOfMemory) => {
                self.fail(event_loop, Box::new(RenderError::OutOfMemory));
                return;
            }
            Err(e) => log::warn!("{}", e),
        }

        event_loop.set_control_flow(ControlFlow::WaitUntil(
            self.frames.next_deadline(Instant::now()),
        ));
    }
}

impl ApplicationHandler for App {
    fn new_events(&mut self, _event_loop: &ActiveEventLoop, cause: StartCause) {
        // Throttle elapsed: draw the next frame
        if let StartCause::ResumeTimeReached { .. } = cause {
            if let Some(window) = &self.window {
                window.request_redraw();
            }
        }
    }

    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_none() && self.state == LoopState::Running {
            if let Err(e) = self.init_graphics(event_loop) {
                self.fail(event_loop, e);
            }
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => {
                log::info!("Quit requested");
                self.shutdown(event_loop);
            }

            WindowEvent::Resized(physical_size) => {
                if let Some(renderer) = &mut self.renderer {
                    renderer.resize(physical_size.width, physical_size.height);
                }
            }

            WindowEvent::RedrawRequested => self.redraw(event_loop),

            // All other input is ignored
            _ => {}
        }
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    log::info!("Starting Hypertorus");

    let config = AppConfig::load().unwrap_or_else(|e| {
        log::warn!("Failed to load config: {}. Using defaults.", e);
        AppConfig::default()
    });

    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Wait);

    let mut app = App::new(config);
    event_loop.run_app(&mut app)?;

    match app.fatal.take() {
        Some(error) => Err(error),
        None => Ok(()),
    }
}
