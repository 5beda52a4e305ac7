//! Application configuration
//!
//! Configuration is loaded from multiple sources with the following priority (lowest to highest):
//! 1. `config/default.toml` (version controlled)
//! 2. `config/user.toml` (gitignored, user overrides)
//! 3. Environment variables (`HT_SECTION__KEY`)
//!
//! Every field has a default, so the viewer runs with no files present.

use figment::{Figment, providers::{Format, Toml, Env}};
use serde::{Serialize, Deserialize};
use std::path::Path;
use std::time::Duration;

use hypertorus_math::{RotationAngles, TorusError, TorusParams};
use hypertorus_render::camera::SceneCamera;

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Window configuration
    #[serde(default)]
    pub window: WindowConfig,
    /// Camera configuration
    #[serde(default)]
    pub camera: CameraConfig,
    /// Torus sampling configuration
    #[serde(default)]
    pub torus: TorusConfig,
    /// Constant 4D rotation angles (radians)
    #[serde(default)]
    pub rotation: RotationAngles,
    /// Rendering configuration
    #[serde(default)]
    pub rendering: RenderingConfig,
    /// Frame pacing
    #[serde(default)]
    pub frame: FrameConfig,
}

impl AppConfig {
    /// Load configuration from default locations
    ///
    /// Priority (lowest to highest):
    /// 1. `config/default.toml`
    /// 2. `config/user.toml`
    /// 3. Environment variables (`HT_*`)
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from("config")
    }

    /// Load configuration from a specific config directory
    pub fn load_from<P: AsRef<Path>>(config_dir: P) -> Result<Self, ConfigError> {
        let config_dir = config_dir.as_ref();
        let default_path = config_dir.join("default.toml");
        let user_path = config_dir.join("user.toml");

        let mut figment = Figment::new();

        if default_path.exists() {
            figment = figment.merge(Toml::file(&default_path));
        }

        if user_path.exists() {
            figment = figment.merge(Toml::file(&user_path));
        }

        // HT_TORUS__POINT_COUNT=500 -> torus.point_count = 500
        figment = figment.merge(Env::prefixed("HT_").split("__"));

        let config: Self = figment.extract().map_err(ConfigError::from)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values the viewer cannot run with
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.torus.to_params()?;
        if self.window.width == 0 || self.window.height == 0 {
            return Err(ConfigError::invalid("window size must be non-zero"));
        }
        if !(self.camera.near > 0.0 && self.camera.far > self.camera.near) {
            return Err(ConfigError::invalid("camera requires 0 < near < far"));
        }
        if !(self.camera.fov > 0.0 && self.camera.fov < 180.0) {
            return Err(ConfigError::invalid("camera fov must be in (0, 180) degrees"));
        }
        let angles = [self.rotation.theta, self.rotation.phi, self.rotation.psi];
        if angles.iter().any(|a| !a.is_finite()) {
            return Err(ConfigError::invalid("rotation angles must be finite"));
        }
        Ok(())
    }
}

/// Window configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    /// Window title
    pub title: String,
    /// Window width in pixels
    pub width: u32,
    /// Window height in pixels
    pub height: u32,
    /// Enable VSync
    pub vsync: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Hypertorus".to_string(),
            width: 800,
            height: 600,
            vsync: true,
        }
    }
}

/// Camera configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    /// Field of view in degrees
    pub fov: f32,
    /// Near clipping plane
    pub near: f32,
    /// Far clipping plane
    pub far: f32,
    /// Distance the camera sits back from the origin
    pub distance: f32,
    /// Scene spin per frame in degrees
    pub spin_degrees_per_frame: f32,
    /// Axis of the scene spin [x, y, z]
    pub spin_axis: [f32; 3],
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            fov: 45.0,
            near: 0.1,
            far: 50.0,
            distance: 30.0,
            spin_degrees_per_frame: 1.0,
            spin_axis: [0.0, 1.0, 0.0],
        }
    }
}

impl CameraConfig {
    /// Build the scene camera described by this config
    pub fn to_scene_camera(&self) -> SceneCamera {
        let mut camera = SceneCamera::new();
        camera.fov_degrees = self.fov;
        camera.near = self.near;
        camera.far = self.far;
        camera.distance = self.distance;
        camera.spin_axis = self.spin_axis;
        camera.spin_step_degrees = self.spin_degrees_per_frame;
        camera
    }
}

/// Torus sampling configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TorusConfig {
    /// Number of points to generate
    pub point_count: usize,
    /// Distance from the origin to the tube centre
    pub radius: f32,
    /// Radius of the tube
    pub tube_radius: f32,
    /// W is drawn from [0, w_range)
    pub w_range: f32,
    /// Fixed RNG seed; unset means a fresh random torus every run
    pub seed: Option<u64>,
}

impl Default for TorusConfig {
    fn default() -> Self {
        Self {
            point_count: 1000,
            radius: 5.0,
            tube_radius: 1.0,
            w_range: 10.0,
            seed: None,
        }
    }
}

impl TorusConfig {
    /// Convert to validated generator parameters
    pub fn to_params(&self) -> Result<TorusParams, TorusError> {
        TorusParams::new(self.radius, self.tube_radius, self.w_range)
    }
}

/// Rendering configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderingConfig {
    /// Background color [r, g, b, a]
    pub background_color: [f32; 4],
    /// Point color [r, g, b, a]
    pub point_color: [f32; 4],
    /// Blend of the W gradient into the point color (0 = plain points)
    pub w_color_strength: f32,
}

impl Default for RenderingConfig {
    fn default() -> Self {
        Self {
            background_color: [0.0, 0.0, 0.0, 1.0],
            point_color: [1.0, 1.0, 1.0, 1.0],
            w_color_strength: 0.0,
        }
    }
}

/// Frame pacing configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FrameConfig {
    /// Pause after presenting each frame, in milliseconds
    pub throttle_ms: u64,
}

impl Default for FrameConfig {
    fn default() -> Self {
        Self { throttle_ms: 10 }
    }
}

impl FrameConfig {
    pub fn throttle(&self) -> Duration {
        Duration::from_millis(self.throttle_ms)
    }
}

/// Configuration error
#[derive(Debug)]
pub struct ConfigError {
    message: String,
}

impl ConfigError {
    fn invalid(message: &str) -> Self {
        ConfigError {
            message: message.to_string(),
        }
    }
}

impl From<figment::Error> for ConfigError {
    fn from(e: figment::Error) -> Self {
        ConfigError {
            message: e.to_string(),
        }
    }
}

impl From<TorusError> for ConfigError {
    fn from(e: TorusError) -> Self {
        ConfigError {
            message: e.to_string(),
        }
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Configuration error: {}", self.message)
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_matches_demo_constants() {
        let config = AppConfig::default();
        assert_eq!(config.window.width, 800);
        assert_eq!(config.window.height, 600);
        assert_eq!(config.torus.point_count, 1000);
        assert_eq!(config.torus.radius, 5.0);
        assert_eq!(config.torus.tube_radius, 1.0);
        assert_eq!(config.rotation, RotationAngles::default());
        assert_eq!(config.frame.throttle(), Duration::from_millis(10));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_serialization() {
        let config = AppConfig::default();
        let toml = toml::to_string(&config).unwrap();
        assert!(toml.contains("point_count"));
        assert!(toml.contains("theta"));
        assert!(toml.contains("throttle_ms"));
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config: AppConfig = Figment::new()
            .merge(Toml::string("[torus]\npoint_count = 12\n"))
            .extract()
            .unwrap();
        assert_eq!(config.torus.point_count, 12);
        assert_eq!(config.window.width, 800);
        assert_eq!(config.torus.radius, 5.0);
        assert_eq!(config.camera.far, 50.0);
    }

    #[test]
    fn test_validate_rejects_bad_torus() {
        let mut config = AppConfig::default();
        config.torus.w_range = 0.0;
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("W range"));
    }

    #[test]
    fn test_validate_rejects_bad_camera() {
        let mut config = AppConfig::default();
        config.camera.near = 60.0;
        assert!(config.validate().is_err());

        let mut config = AppConfig::default();
        config.camera.fov = 0.0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_camera_config_to_scene_camera() {
        let mut camera_config = CameraConfig::default();
        camera_config.spin_degrees_per_frame = 2.5;
        let camera = camera_config.to_scene_camera();
        assert_eq!(camera.spin_step_degrees, 2.5);
        assert_eq!(camera.distance, 30.0);
        assert_eq!(camera.spin_degrees(), 0.0);
    }
}
