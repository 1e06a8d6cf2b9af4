//! Application configuration
//!
//! Configuration is loaded from multiple sources with the following priority (lowest to highest):
//! 1. `config/default.toml` (version controlled)
//! 2. `config/user.toml` (gitignored, user overrides)
//! 3. Environment variables (`GLIDE_SECTION__KEY`)

use figment::{Figment, providers::{Format, Toml, Env}};
use glide_camera::CameraConfig;
use glide_physics::LocomotionConfig;
use serde::{Serialize, Deserialize};
use std::path::Path;

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Actor movement tuning
    #[serde(default)]
    pub locomotion: LocomotionConfig,
    /// Follow camera tuning
    #[serde(default)]
    pub camera: CameraConfig,
    /// World physics and scene geometry
    #[serde(default)]
    pub physics: PhysicsConfig,
    /// Fixed-step scheduling
    #[serde(default)]
    pub simulation: SimulationConfig,
    /// Debug configuration
    #[serde(default)]
    pub debug: DebugConfig,
}

impl AppConfig {
    /// Load configuration from default locations
    ///
    /// Priority (lowest to highest):
    /// 1. `config/default.toml`
    /// 2. `config/user.toml`
    /// 3. Environment variables (`GLIDE_*`)
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from("config")
    }

    /// Load configuration from a specific config directory
    ///
    /// The loaded configuration is validated before it is returned.
    pub fn load_from<P: AsRef<Path>>(config_dir: P) -> Result<Self, ConfigError> {
        let config_dir = config_dir.as_ref();
        let default_path = config_dir.join("default.toml");
        let user_path = config_dir.join("user.toml");

        let mut figment = Figment::new();

        if default_path.exists() {
            figment = figment.merge(Toml::file(&default_path));
        }

        // Optional, never committed
        if user_path.exists() {
            figment = figment.merge(Toml::file(&user_path));
        }

        // Environment variables override everything
        // GLIDE_CAMERA__CIRCLE_RADIUS=2 -> camera.circle_radius = 2.0
        figment = figment.merge(Env::prefixed("GLIDE_").split("__"));

        let config: Self = figment.extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Check value ranges the tick code relies on
    pub fn validate(&self) -> Result<(), ConfigError> {
        let loco = &self.locomotion;
        let cam = &self.camera;

        non_negative("locomotion.max_speed", loco.max_speed)?;
        non_negative("locomotion.acceleration", loco.acceleration)?;
        non_negative("locomotion.air_control", loco.air_control)?;
        non_negative("locomotion.jump_height", loco.jump_height)?;
        non_negative("locomotion.max_snap_speed", loco.max_snap_speed)?;
        non_negative("locomotion.probe_distance", loco.probe_distance)?;
        if !(0.0..=90.0).contains(&loco.grounded_angle_deg) {
            return Err(ConfigError::invalid(
                "locomotion.grounded_angle_deg",
                format!("must be between 0 and 90 degrees, got {}", loco.grounded_angle_deg),
            ));
        }

        non_negative("camera.circle_radius", cam.circle_radius)?;
        non_negative("camera.inner_follow_speed", cam.inner_follow_speed)?;
        non_negative("camera.outer_follow_speed", cam.outer_follow_speed)?;
        positive("camera.distance", cam.distance)?;
        if !cam.outer_mode.is_valid_outer() {
            return Err(ConfigError::invalid(
                "camera.outer_mode",
                "no_follow is only valid for the inner zone",
            ));
        }

        non_negative("physics.gravity", self.physics.gravity)?;
        non_negative("physics.gravity_percent", self.physics.gravity_percent)?;
        positive("physics.player_radius", self.physics.player_radius)?;

        positive("simulation.fixed_timestep", self.simulation.fixed_timestep)?;
        positive("simulation.frame_time", self.simulation.frame_time)?;

        Ok(())
    }

    /// Locomotion tuning with gravity taken from the world configuration
    ///
    /// Jump impulses must match the gravity the backend actually applies.
    pub fn locomotion_config(&self) -> LocomotionConfig {
        LocomotionConfig {
            gravity: self.physics.effective_gravity(),
            ..self.locomotion
        }
    }
}

fn non_negative(field: &str, value: f32) -> Result<(), ConfigError> {
    if value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::invalid(field, format!("must not be negative, got {}", value)))
    }
}

fn positive(field: &str, value: f32) -> Result<(), ConfigError> {
    if value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::invalid(field, format!("must be greater than zero, got {}", value)))
    }
}

/// World physics and demo scene geometry
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PhysicsConfig {
    /// Gravity magnitude before scaling (applied along -Y)
    pub gravity: f32,
    /// Percentage of `gravity` actually applied
    pub gravity_percent: f32,
    /// Floor Y position
    pub floor_y: f32,
    /// Actor collision radius
    pub player_radius: f32,
    /// Actor spawn point [x, y, z]
    pub player_start: [f32; 3],
    /// Where the ramp leaves the floor, along X
    pub ramp_start_x: f32,
    /// Ramp incline in degrees (0 disables the ramp)
    pub ramp_angle_deg: f32,
    /// Height of the low bump the actor can roll over (0 disables it)
    pub bump_height: f32,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            gravity: 9.81,
            gravity_percent: 100.0,
            floor_y: 0.0,
            player_radius: 0.5,
            player_start: [0.0, 0.5, 0.0],
            ramp_start_x: 20.0,
            ramp_angle_deg: 15.0,
            bump_height: 0.1,
        }
    }
}

impl PhysicsConfig {
    /// Gravity magnitude after applying the percentage
    pub fn effective_gravity(&self) -> f32 {
        self.gravity * self.gravity_percent / 100.0
    }

    /// Convert to the backend's configuration
    pub fn to_physics_config(&self) -> glide_physics::PhysicsConfig {
        glide_physics::PhysicsConfig::new(self.effective_gravity())
    }
}

/// Fixed-step scheduling for the headless run
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Physics tick length in seconds
    pub fixed_timestep: f32,
    /// Simulated frame length in seconds
    pub frame_time: f32,
    /// Frames to run before exiting
    pub frame_count: u32,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            fixed_timestep: 0.02,
            frame_time: 1.0 / 60.0,
            frame_count: 600,
        }
    }
}

/// Debug configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DebugConfig {
    /// Log level (error, warn, info, debug, trace), overridden by `RUST_LOG`
    pub log_level: String,
    /// Log the camera look point each reported frame
    pub show_look_point: bool,
    /// Log actor state every this many frames (0 disables)
    pub report_interval: u32,
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            show_look_point: false,
            report_interval: 30,
        }
    }
}

/// Configuration error
#[derive(Debug)]
pub struct ConfigError {
    message: String,
}

impl ConfigError {
    /// A value that loaded fine but is out of range
    pub fn invalid(field: &str, reason: impl std::fmt::Display) -> Self {
        ConfigError {
            message: format!("{}: {}", field, reason),
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

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Configuration error: {}", self.message)
    }
}

impl std::error::Error for ConfigError {}
