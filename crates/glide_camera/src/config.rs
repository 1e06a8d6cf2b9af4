//! Camera tuning

use glide_math::Quat;
use serde::{Deserialize, Serialize};

use crate::smoothing::{SmoothingMode, ZoneSettings};

/// Which follow camera to build
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CameraVariant {
    /// Single switch between the inner and outer zone
    #[default]
    Orbit,
    /// Blend of both zones' candidates, with hysteresis for a dead-zone inner mode
    DualZone,
}

/// Follow camera configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    pub variant: CameraVariant,
    /// Distance from the look point to the camera
    pub distance: f32,
    /// Radius separating the inner and outer zones
    pub circle_radius: f32,
    pub inner_mode: SmoothingMode,
    pub outer_mode: SmoothingMode,
    pub inner_follow_speed: f32,
    pub outer_follow_speed: f32,
    /// Orbit pitch and yaw in degrees
    pub orbit_angles: [f32; 2],
    /// Dual-zone only: when false the outer zone mirrors the inner one
    pub use_two_zones: bool,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            variant: CameraVariant::Orbit,
            distance: 5.0,
            circle_radius: 1.0,
            inner_mode: SmoothingMode::NoFollow,
            outer_mode: SmoothingMode::Exponential,
            inner_follow_speed: 5.0,
            outer_follow_speed: 5.0,
            orbit_angles: [45.0, 0.0],
            use_two_zones: true,
        }
    }
}

impl CameraConfig {
    pub fn inner_zone(&self) -> ZoneSettings {
        ZoneSettings::new(self.inner_mode, self.inner_follow_speed)
    }

    pub fn outer_zone(&self) -> ZoneSettings {
        ZoneSettings::new(self.outer_mode, self.outer_follow_speed)
    }

    /// Fixed orbit rotation from the configured pitch and yaw
    pub fn orbit_rotation(&self) -> Quat {
        let [pitch, yaw] = self.orbit_angles;
        Quat::from_euler_degrees(pitch, yaw, 0.0)
    }

    /// Builder: set both zone modes
    pub fn with_modes(mut self, inner: SmoothingMode, outer: SmoothingMode) -> Self {
        self.inner_mode = inner;
        self.outer_mode = outer;
        self
    }

    /// Builder: set the zone radius
    pub fn with_radius(mut self, circle_radius: f32) -> Self {
        self.circle_radius = circle_radius;
        self
    }
}
