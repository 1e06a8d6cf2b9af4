//! Locomotion controller for a rolling actor
//!
//! Turns movement intent and ground contacts into a velocity written to an
//! externally integrated rigid body once per fixed physics tick. Movement
//! follows the ground plane, jumps are launched along the contact normal, and
//! the actor is snapped back onto the ground after cresting small bumps.

use glide_math::{move_towards, Vec3};
use serde::{Deserialize, Serialize};

use crate::backend::{BodyKey, PhysicsBackend};
use crate::contact::{ground_dot_threshold, is_ground_normal, GroundContacts};

/// Ticks after a jump during which ground snapping is suppressed
pub const SNAP_JUMP_COOLDOWN_STEPS: u32 = 10;

/// Snapping is only attempted this many ticks after losing ground
pub const SNAP_MAX_STEPS_SINCE_GROUNDED: u32 = 1;

/// How the planar velocity approaches the desired velocity
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccelerationPolicy {
    /// Velocity jumps straight to the desired velocity
    None,
    /// Fixed acceleration
    #[default]
    Constant,
    /// Acceleration grows linearly with the velocity gap
    LinearBoost,
    /// Acceleration grows with the fourth power of the velocity gap
    QuadraticBoost,
}

/// Tuning for the locomotion controller
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LocomotionConfig {
    /// Top planar speed reachable from input (units per second)
    pub max_speed: f32,
    /// Planar acceleration on the ground (units per second squared)
    pub acceleration: f32,
    pub acceleration_policy: AccelerationPolicy,
    /// Fraction of `acceleration` available while airborne
    pub air_control: f32,
    /// Apex height of a jump from flat ground
    pub jump_height: f32,
    /// Steepest slope, in degrees, that still counts as ground
    pub grounded_angle_deg: f32,
    /// Speed above which the actor is allowed to leave the ground
    pub max_snap_speed: f32,
    /// Length of the downward ground-snap probe
    pub probe_distance: f32,
    /// Gravity magnitude used for the jump impulse
    pub gravity: f32,
}

impl Default for LocomotionConfig {
    fn default() -> Self {
        Self {
            max_speed: 10.0,
            acceleration: 10.0,
            acceleration_policy: AccelerationPolicy::Constant,
            air_control: 0.1,
            jump_height: 2.0,
            grounded_angle_deg: 20.0,
            max_snap_speed: 10.0,
            probe_distance: 1.0,
            gravity: 9.81,
        }
    }
}

impl LocomotionConfig {
    /// Velocity added along the contact normal by a jump
    ///
    /// Launching at `sqrt(2 g h)` against gravity `g` peaks at height `h`.
    pub fn jump_speed(&self) -> f32 {
        (2.0 * self.gravity * self.jump_height).max(0.0).sqrt()
    }

    /// Builder: set the acceleration policy
    pub fn with_policy(mut self, policy: AccelerationPolicy) -> Self {
        self.acceleration_policy = policy;
        self
    }

    /// Builder: set top speed and acceleration
    pub fn with_speed(mut self, max_speed: f32, acceleration: f32) -> Self {
        self.max_speed = max_speed;
        self.acceleration = acceleration;
        self
    }
}

/// Kinematic state of the actor
///
/// `on_ground` and `contact_normal` describe the most recent tick; they are
/// rebuilt from that tick's contacts (or probe) at the start of every tick.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ActorState {
    /// Velocity resolved by the last tick
    pub velocity: Vec3,
    /// Planar velocity requested by input
    pub desired_velocity: Vec3,
    /// Averaged ground normal, or world up while airborne
    pub contact_normal: Vec3,
    pub on_ground: bool,
    pub steps_since_last_grounded: u32,
    pub steps_since_last_jump: u32,
}

impl Default for ActorState {
    fn default() -> Self {
        Self {
            velocity: Vec3::ZERO,
            desired_velocity: Vec3::ZERO,
            contact_normal: Vec3::UP,
            on_ground: false,
            steps_since_last_grounded: 0,
            steps_since_last_jump: 0,
        }
    }
}

/// Drives one actor's rigid body from movement intent
#[derive(Clone, Debug)]
pub struct LocomotionController {
    config: LocomotionConfig,
    min_ground_dot: f32,
    body: BodyKey,
    state: ActorState,
    desired_jump: bool,
}

impl LocomotionController {
    /// Create a controller for the given body
    pub fn new(body: BodyKey, config: LocomotionConfig) -> Self {
        Self {
            min_ground_dot: ground_dot_threshold(config.grounded_angle_deg),
            config,
            body,
            state: ActorState::default(),
            desired_jump: false,
        }
    }

    pub fn body(&self) -> BodyKey {
        self.body
    }

    pub fn config(&self) -> &LocomotionConfig {
        &self.config
    }

    pub fn state(&self) -> &ActorState {
        &self.state
    }

    /// Record this frame's input
    ///
    /// `axes` is (horizontal, vertical); vertical maps to world forward.
    /// A jump request is latched until the next physics tick consumes it.
    pub fn on_input(&mut self, axes: (f32, f32), jump_requested: bool) {
        let mut planar = Vec3::new(axes.0, 0.0, axes.1);
        if planar.length_squared() > 1.0 {
            planar = planar.normalized();
        }
        self.state.desired_velocity = planar * self.config.max_speed;
        self.desired_jump |= jump_requested;
    }

    /// Run one fixed physics tick
    ///
    /// `contacts` are the contact normals the backend reported for this body
    /// since the previous tick. The body's velocity is written exactly once.
    pub fn on_physics_tick<B>(&mut self, backend: &mut B, contacts: &[Vec3], dt: f32)
    where
        B: PhysicsBackend + ?Sized,
    {
        self.evaluate_contacts(contacts);

        self.state.velocity = backend.body_velocity(self.body).unwrap_or(Vec3::ZERO);
        self.adjust_velocity(dt);

        if std::mem::take(&mut self.desired_jump) {
            self.jump();
        }

        self.update_ground_state(backend);

        backend.set_body_velocity(self.body, self.state.velocity);
    }

    /// Rebuild grounded status from this tick's contacts
    fn evaluate_contacts(&mut self, contacts: &[Vec3]) {
        let mut ground = GroundContacts::new();
        ground.evaluate(contacts, self.min_ground_dot);

        self.state.on_ground = ground.is_grounded();
        self.state.contact_normal = if ground.is_grounded() {
            ground.normal()
        } else {
            Vec3::UP
        };
    }

    /// Per-axis velocity change allowed this tick
    fn scaled_acceleration(&self, dt: f32) -> f32 {
        let acceleration = if self.state.on_ground {
            self.config.acceleration
        } else {
            self.config.acceleration * self.config.air_control
        };

        let gap = self.state.desired_velocity.distance(self.state.velocity);
        let normalized_gap = if self.config.max_speed > 0.0 {
            gap / (2.0 * self.config.max_speed)
        } else {
            0.0
        };

        match self.config.acceleration_policy {
            AccelerationPolicy::None => 0.0,
            AccelerationPolicy::Constant => acceleration * dt,
            AccelerationPolicy::LinearBoost => acceleration * (0.1 + 5.0 * normalized_gap) * dt,
            AccelerationPolicy::QuadraticBoost => {
                5.0 * acceleration * (0.1 + 10.0 * normalized_gap.powi(4)) * dt
            }
        }
    }

    /// Steer the planar velocity toward the desired velocity along the ground
    fn adjust_velocity(&mut self, dt: f32) {
        let normal = self.state.contact_normal;
        let x_axis = Vec3::RIGHT.project_on_plane(normal).normalized();
        let z_axis = Vec3::FORWARD.project_on_plane(normal).normalized();

        let desired = self.state.desired_velocity;
        let velocity = self.state.velocity;

        if self.config.acceleration_policy == AccelerationPolicy::None {
            let vertical = velocity.y;
            self.state.velocity = x_axis * desired.x + z_axis * desired.z + Vec3::UP * vertical;
            return;
        }

        let max_change = self.scaled_acceleration(dt);
        let current_x = velocity.dot(x_axis);
        let current_z = velocity.dot(z_axis);
        let new_x = move_towards(current_x, desired.x, max_change);
        let new_z = move_towards(current_z, desired.z, max_change);

        self.state.velocity += x_axis * (new_x - current_x) + z_axis * (new_z - current_z);
    }

    fn jump(&mut self) {
        if !self.state.on_ground {
            return;
        }
        self.state.steps_since_last_jump = 0;
        self.state.velocity += self.state.contact_normal * self.config.jump_speed();
        log::debug!("Jump along {:?}", self.state.contact_normal);
    }

    /// Advance step counters, snapping to the ground if contact was just lost
    fn update_ground_state<B>(&mut self, backend: &B)
    where
        B: PhysicsBackend + ?Sized,
    {
        self.state.steps_since_last_grounded = self.state.steps_since_last_grounded.saturating_add(1);
        self.state.steps_since_last_jump = self.state.steps_since_last_jump.saturating_add(1);

        if self.state.on_ground || self.snap_to_ground(backend) {
            self.state.steps_since_last_grounded = 0;
        } else {
            self.state.contact_normal = Vec3::UP;
        }
    }

    /// Keep the actor glued to the ground after it crests a small bump
    ///
    /// Returns true if the actor was snapped.
    fn snap_to_ground<B>(&mut self, backend: &B) -> bool
    where
        B: PhysicsBackend + ?Sized,
    {
        if self.state.steps_since_last_grounded > SNAP_MAX_STEPS_SINCE_GROUNDED
            || self.state.steps_since_last_jump <= SNAP_JUMP_COOLDOWN_STEPS
        {
            return false;
        }

        let speed = self.state.velocity.length();
        if speed > self.config.max_snap_speed {
            return false;
        }

        let Some(origin) = backend.body_position(self.body) else {
            return false;
        };
        let Some(hit) = backend.raycast_down(origin, self.config.probe_distance) else {
            return false;
        };
        if !is_ground_normal(hit.normal, self.min_ground_dot) {
            return false;
        }

        self.state.on_ground = true;
        self.state.contact_normal = hit.normal;

        // Drop any velocity leaving the surface but keep the speed
        let away = self.state.velocity.dot(hit.normal);
        if away > 0.0 {
            if let Some(direction) = (self.state.velocity - hit.normal * away).try_normalized() {
                self.state.velocity = direction * speed;
            }
        }

        log::trace!("Snapped to ground {:.3} below", hit.distance);
        true
    }
}
