//! Integration tests for configuration loading
//!
//! Tests that verify config loading from files and environment variables.

use glide::config::AppConfig;
use glide_camera::{CameraVariant, SmoothingMode};
use glide_physics::AccelerationPolicy;
use serial_test::serial;
use std::path::PathBuf;

/// Fresh, empty config directory under the system temp dir
fn temp_config_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("glide_config_{}_{}", name, std::process::id()));
    let _ = std::fs::remove_dir_all(&dir);
    std::fs::create_dir_all(&dir).unwrap();
    dir
}

#[test]
#[serial]
fn test_default_file_matches_builtin_defaults() {
    let config = AppConfig::load().unwrap();
    let builtin = AppConfig::default();

    assert_eq!(config.locomotion, builtin.locomotion);
    assert_eq!(config.camera, builtin.camera);
    assert_eq!(config.physics.gravity, builtin.physics.gravity);
    assert_eq!(config.simulation.fixed_timestep, builtin.simulation.fixed_timestep);
}

#[test]
#[serial]
fn test_env_override() {
    std::env::set_var("GLIDE_CAMERA__CIRCLE_RADIUS", "2.5");
    std::env::set_var("GLIDE_CAMERA__VARIANT", "dual_zone");
    let config = AppConfig::load();
    std::env::remove_var("GLIDE_CAMERA__CIRCLE_RADIUS");
    std::env::remove_var("GLIDE_CAMERA__VARIANT");

    let config = config.unwrap();
    assert_eq!(config.camera.circle_radius, 2.5);
    assert_eq!(config.camera.variant, CameraVariant::DualZone);
}

#[test]
#[serial]
fn test_env_override_is_validated() {
    std::env::set_var("GLIDE_CAMERA__DISTANCE", "0");
    let result = AppConfig::load();
    std::env::remove_var("GLIDE_CAMERA__DISTANCE");

    let err = result.unwrap_err();
    assert!(err.to_string().contains("camera.distance"));
}

#[test]
#[serial]
fn test_user_file_overrides_default_file() {
    let dir = temp_config_dir("layers");
    std::fs::write(
        dir.join("default.toml"),
        "[locomotion]\nmax_speed = 6.0\nacceleration_policy = \"linear_boost\"\n",
    )
    .unwrap();
    std::fs::write(dir.join("user.toml"), "[locomotion]\nmax_speed = 8.0\n").unwrap();

    let config = AppConfig::load_from(&dir).unwrap();
    std::fs::remove_dir_all(&dir).ok();

    assert_eq!(config.locomotion.max_speed, 8.0);
    assert_eq!(config.locomotion.acceleration_policy, AccelerationPolicy::LinearBoost);
    // Untouched keys keep their defaults
    assert_eq!(config.locomotion.jump_height, 2.0);
}

#[test]
#[serial]
fn test_missing_files_fall_back_to_defaults() {
    let dir = temp_config_dir("empty");
    let config = AppConfig::load_from(&dir).unwrap();
    std::fs::remove_dir_all(&dir).ok();

    assert_eq!(config.camera.inner_mode, SmoothingMode::NoFollow);
    assert_eq!(config.physics.gravity_percent, 100.0);
}

#[test]
#[serial]
fn test_malformed_value_reports_error() {
    let dir = temp_config_dir("malformed");
    std::fs::write(dir.join("default.toml"), "[camera]\ninner_mode = \"wobbly\"\n").unwrap();

    let result = AppConfig::load_from(&dir);
    std::fs::remove_dir_all(&dir).ok();

    let err = result.unwrap_err();
    assert!(err.to_string().starts_with("Configuration error"));
}

#[test]
#[serial]
fn test_outer_no_follow_rejected_from_file() {
    let dir = temp_config_dir("outer");
    std::fs::write(dir.join("default.toml"), "[camera]\nouter_mode = \"no_follow\"\n").unwrap();

    let result = AppConfig::load_from(&dir);
    std::fs::remove_dir_all(&dir).ok();

    assert!(result.is_err());
}
