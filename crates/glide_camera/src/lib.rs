//! Follow cameras for Glide
//!
//! This crate provides:
//! - [`SmoothingMode`] and per-zone look-point stepping
//! - [`OrbitFollowCamera`], which switches between an inner and outer zone
//! - [`DualZoneCamera`], which blends both zones' candidates
//! - The [`TransformSink`] a camera writes its pose to
//!
//! Cameras run once per render tick, after physics has settled the target.

pub mod config;
pub mod dual_zone;
pub mod orbit;
pub mod pose;
pub mod smoothing;

use glide_math::Vec3;

pub use config::{CameraConfig, CameraVariant};
pub use dual_zone::DualZoneCamera;
pub use orbit::OrbitFollowCamera;
pub use pose::{CameraPose, PoseRecorder, TransformSink};
pub use smoothing::{SmoothingMode, Zone, ZoneSettings};

/// A camera that tracks a moving target once per render tick
pub trait FollowCamera {
    /// Advance the look point toward `target` and write the resulting pose to `sink`
    fn on_render_tick(&mut self, target: Vec3, dt: f32, sink: &mut dyn TransformSink) -> CameraPose;

    /// Point the camera is currently aimed at
    fn look_point(&self) -> Vec3;
}

/// Build the camera variant selected by `config`, looking at `start`
pub fn build_camera(config: &CameraConfig, start: Vec3) -> Box<dyn FollowCamera> {
    match config.variant {
        CameraVariant::Orbit => Box::new(OrbitFollowCamera::new(config, start)),
        CameraVariant::DualZone => Box::new(DualZoneCamera::new(config, start)),
    }
}
