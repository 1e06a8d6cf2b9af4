//! The physics capability consumed by the locomotion controller

use glide_math::Vec3;
use slotmap::new_key_type;

new_key_type! {
    /// Key to a rigid body owned by a physics backend
    ///
    /// Generational: a key to a removed body never aliases a newer body that
    /// reuses its slot.
    pub struct BodyKey;
}

/// Result of a downward probe
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RayHit {
    /// Surface normal at the hit point
    pub normal: Vec3,
    /// Distance from the probe origin to the hit point
    pub distance: f32,
}

/// Rigid-body integration and collision queries supplied by the host engine
///
/// The controller reads a body's velocity and position, issues downward
/// probes, and writes the body's velocity once per tick. Contact normals are
/// delivered separately, as the argument of each physics tick.
pub trait PhysicsBackend {
    /// Current velocity of a body, or `None` if the key is stale
    fn body_velocity(&self, body: BodyKey) -> Option<Vec3>;

    /// Overwrite a body's velocity; stale keys are ignored
    fn set_body_velocity(&mut self, body: BodyKey, velocity: Vec3);

    /// Current position of a body, or `None` if the key is stale
    fn body_position(&self, body: BodyKey) -> Option<Vec3>;

    /// Cast a ray straight down from `origin` and return the nearest hit
    /// within `max_distance`
    fn raycast_down(&self, origin: Vec3, max_distance: f32) -> Option<RayHit>;
}
