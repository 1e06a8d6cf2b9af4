//! Single-switch orbit follow camera

use glide_math::{Quat, Vec3};

use crate::config::CameraConfig;
use crate::pose::{CameraPose, TransformSink};
use crate::smoothing::{Zone, ZoneSettings};
use crate::FollowCamera;

/// Follows a target from a fixed orbit, smoothing the look point per zone
///
/// Each render tick exactly one zone runs: the inner zone while the target is
/// within `circle_radius` of the current look point, the outer zone otherwise.
pub struct OrbitFollowCamera {
    inner: ZoneSettings,
    outer: ZoneSettings,
    circle_radius: f32,
    distance: f32,
    rotation: Quat,

    current_look_point: Vec3,
    next_look_point: Vec3,
    velocity: Vec3,
    last_zone: Zone,
}

impl OrbitFollowCamera {
    /// Create a camera looking at `start`
    pub fn new(config: &CameraConfig, start: Vec3) -> Self {
        Self {
            inner: config.inner_zone(),
            outer: config.outer_zone(),
            circle_radius: config.circle_radius,
            distance: config.distance,
            rotation: config.orbit_rotation(),
            current_look_point: start,
            next_look_point: start,
            velocity: Vec3::ZERO,
            last_zone: Zone::Inner,
        }
    }

    /// Zone that ran on the most recent tick
    pub fn last_zone(&self) -> Zone {
        self.last_zone
    }

    /// Smoothing velocity carried between ticks
    pub fn velocity(&self) -> Vec3 {
        self.velocity
    }

    pub fn circle_radius(&self) -> f32 {
        self.circle_radius
    }

    /// Resize the zone boundary at runtime
    pub fn set_circle_radius(&mut self, radius: f32) {
        self.circle_radius = radius.max(0.0);
    }
}

impl FollowCamera for OrbitFollowCamera {
    fn on_render_tick(&mut self, target: Vec3, dt: f32, sink: &mut dyn TransformSink) -> CameraPose {
        let current = self.current_look_point;
        let distance = target.distance(current);

        self.last_zone = if distance <= self.circle_radius {
            Zone::Inner
        } else {
            Zone::Outer
        };
        let settings = match self.last_zone {
            Zone::Inner => self.inner,
            Zone::Outer => self.outer,
        };
        self.next_look_point = settings.step(
            self.last_zone,
            target,
            current,
            &mut self.velocity,
            self.circle_radius,
            dt,
        );

        let pose = CameraPose::orbiting(self.next_look_point, self.rotation, self.distance);
        sink.set_pose(pose.position, pose.rotation);

        self.current_look_point = self.next_look_point;
        pose
    }

    fn look_point(&self) -> Vec3 {
        self.current_look_point
    }
}
