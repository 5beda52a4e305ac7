//! Integration tests for configuration loading
//!
//! Tests that verify config loading from files and environment variables.

use std::fs;
use std::path::PathBuf;

use hypertorus::config::AppConfig;
use serial_test::serial;

/// Fresh, empty config directory under the system temp dir
fn temp_config_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("hypertorus-config-{}-{}", name, std::process::id()));
    let _ = fs::remove_dir_all(&dir);
    fs::create_dir_all(&dir).unwrap();
    dir
}

#[test]
#[serial]
fn test_shipped_default_toml_matches_builtin_defaults() {
    let config = AppConfig::load_from(concat!(env!("CARGO_MANIFEST_DIR"), "/config")).unwrap();
    let builtin = AppConfig::default();

    assert_eq!(config.window.width, builtin.window.width);
    assert_eq!(config.window.height, builtin.window.height);
    assert_eq!(config.torus.point_count, builtin.torus.point_count);
    assert_eq!(config.torus.radius, builtin.torus.radius);
    assert_eq!(config.camera.fov, builtin.camera.fov);
    assert_eq!(config.frame.throttle_ms, builtin.frame.throttle_ms);
    assert!((config.rotation.theta - builtin.rotation.theta).abs() < 1e-6);
}

#[test]
#[serial]
fn test_missing_directory_uses_defaults() {
    let dir = temp_config_dir("missing");
    let config = AppConfig::load_from(dir.join("does-not-exist")).unwrap();
    assert_eq!(config.torus.point_count, 1000);
    assert_eq!(config.window.title, "Hypertorus");
}

#[test]
#[serial]
fn test_user_toml_overrides_default() {
    let dir = temp_config_dir("user");
    fs::write(dir.join("default.toml"), "[torus]\npoint_count = 200\nseed = 1\n").unwrap();
    fs::write(dir.join("user.toml"), "[torus]\npoint_count = 300\n").unwrap();

    let config = AppConfig::load_from(&dir).unwrap();
    assert_eq!(config.torus.point_count, 300);
    assert_eq!(config.torus.seed, Some(1));
    assert_eq!(config.torus.radius, 5.0);

    let _ = fs::remove_dir_all(&dir);
}

#[test]
#[serial]
fn test_env_override() {
    let dir = temp_config_dir("env");
    std::env::set_var("HT_WINDOW__TITLE", "Test From Env");
    std::env::set_var("HT_TORUS__POINT_COUNT", "42");
    let result = AppConfig::load_from(&dir);
    std::env::remove_var("HT_WINDOW__TITLE");
    std::env::remove_var("HT_TORUS__POINT_COUNT");

    let config = result.unwrap();
    assert_eq!(config.window.title, "Test From Env");
    assert_eq!(config.torus.point_count, 42);
}

#[test]
#[serial]
fn test_invalid_values_are_rejected() {
    let dir = temp_config_dir("invalid");
    fs::write(dir.join("default.toml"), "[torus]\nradius = -1.0\n").unwrap();

    let err = AppConfig::load_from(&dir).unwrap_err();
    assert!(err.to_string().contains("radius"), "{}", err);

    let _ = fs::remove_dir_all(&dir);
}
