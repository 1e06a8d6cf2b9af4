//! Dual-zone follow camera
//!
//! Both zones compute a candidate look point every tick and the camera
//! blends between them based on how far the target is from the look point.
//! A dead-zone inner mode (`no_follow`) cannot be blended, so in that case
//! the camera hard switches between zones and resizes the boundary to avoid
//! flickering across it.

use glide_math::{inverse_lerp_clamped, Quat, Vec3};

use crate::config::CameraConfig;
use crate::pose::{CameraPose, TransformSink};
use crate::smoothing::{SmoothingMode, Zone, ZoneSettings};
use crate::FollowCamera;

/// Distance/radius ratio at which blending starts favouring the outer zone
const BLEND_START: f32 = 0.7;
/// Distance/radius ratio at which the outer zone fully takes over
const BLEND_END: f32 = 1.4;
/// Boundary scale while the target is inside the dead zone
const HYSTERESIS_GROW: f32 = 1.3;
/// Boundary scale while the camera is chasing the target
const HYSTERESIS_SHRINK: f32 = 0.8;

/// Follow camera that blends inner and outer zone candidates
pub struct DualZoneCamera {
    inner: ZoneSettings,
    outer: ZoneSettings,
    circle_radius: f32,
    circle_start_radius: f32,
    distance: f32,
    rotation: Quat,

    current_look_point: Vec3,
    next_look_point: Vec3,
    inner_velocity: Vec3,
    outer_velocity: Vec3,
}

impl DualZoneCamera {
    /// Create a camera looking at `start`
    ///
    /// With `use_two_zones` off, the outer zone copies the inner mode and
    /// speed. A `no_follow` inner mode is paired with an instant outer zone
    /// instead, since it would otherwise never move.
    pub fn new(config: &CameraConfig, start: Vec3) -> Self {
        let inner = config.inner_zone();
        let outer = if config.use_two_zones {
            config.outer_zone()
        } else {
            let mode = match inner.mode {
                SmoothingMode::NoFollow => {
                    log::warn!("no_follow cannot be used with a single smoothing zone, using instant outside the radius");
                    SmoothingMode::Instant
                }
                mode => mode,
            };
            ZoneSettings::new(mode, inner.follow_speed)
        };

        Self {
            inner,
            outer,
            circle_radius: config.circle_radius,
            circle_start_radius: config.circle_radius,
            distance: config.distance,
            rotation: config.orbit_rotation(),
            current_look_point: start,
            next_look_point: start,
            inner_velocity: Vec3::ZERO,
            outer_velocity: Vec3::ZERO,
        }
    }

    pub fn inner_zone(&self) -> ZoneSettings {
        self.inner
    }

    pub fn outer_zone(&self) -> ZoneSettings {
        self.outer
    }

    /// Current zone boundary, including any hysteresis scaling
    pub fn circle_radius(&self) -> f32 {
        self.circle_radius
    }

    /// Weight of the outer candidate for a given target distance
    pub fn blend_factor(&self, distance: f32) -> f32 {
        if self.circle_radius > 0.0 {
            inverse_lerp_clamped(BLEND_START, BLEND_END, distance / self.circle_radius)
        } else if distance > 0.0 {
            1.0
        } else {
            0.0
        }
    }

    fn hard_switch(&mut self, inside: bool, inner: Vec3, outer: Vec3) -> Vec3 {
        let (scale_inside, scale_outside) = if self.outer.mode == SmoothingMode::Instant {
            (1.0, 1.0)
        } else {
            (HYSTERESIS_GROW, HYSTERESIS_SHRINK)
        };

        if inside {
            self.circle_radius = self.circle_start_radius * scale_inside;
            inner
        } else {
            self.circle_radius = self.circle_start_radius * scale_outside;
            outer
        }
    }
}

impl FollowCamera for DualZoneCamera {
    fn on_render_tick(&mut self, target: Vec3, dt: f32, sink: &mut dyn TransformSink) -> CameraPose {
        let current = self.current_look_point;
        let radius = self.circle_radius;

        let inner = self.inner.step(Zone::Inner, target, current, &mut self.inner_velocity, radius, dt);
        let outer = self.outer.step(Zone::Outer, target, current, &mut self.outer_velocity, radius, dt);

        let distance = target.distance(current);
        self.next_look_point = if self.inner.mode == SmoothingMode::NoFollow {
            self.hard_switch(distance <= radius, inner, outer)
        } else {
            inner.lerp(outer, self.blend_factor(distance))
        };

        let pose = CameraPose::orbiting(self.next_look_point, self.rotation, self.distance);
        sink.set_pose(pose.position, pose.rotation);

        self.current_look_point = self.next_look_point;
        pose
    }

    fn look_point(&self) -> Vec3 {
        self.current_look_point
    }
}
