//! SceneBuilder - Declarative scene construction
//!
//! Provides a fluent API for building a physics world with one actor.

use glide_math::Vec3;
use glide_physics::{
    Aabb, BodyKey, CollisionFilter, PhysicsConfig, Plane, RigidBody, SimWorld, StaticCollider,
};

use crate::config;

/// Half-width of ground features across the Z axis
const FEATURE_HALF_WIDTH: f32 = 50.0;
/// Where the demo bump starts, along X
const BUMP_START_X: f32 = 8.0;
const BUMP_LENGTH: f32 = 1.0;

/// Builder for constructing a scene with physics
///
/// # Example
/// ```ignore
/// let builder = SceneBuilder::new()
///     .with_physics(PhysicsConfig::new(9.81))
///     .add_floor(0.0)
///     .add_ramp(20.0, 0.0, 15.0)
///     .add_player(Vec3::new(0.0, 0.5, 0.0), 0.5);
/// let player = builder.player();
/// let world = builder.build();
/// ```
pub struct SceneBuilder {
    world: SimWorld,
    player: Option<BodyKey>,
    player_start: Option<Vec3>,
}

impl SceneBuilder {
    /// Create a new scene builder
    pub fn new() -> Self {
        Self {
            world: SimWorld::new(),
            player: None,
            player_start: None,
        }
    }

    /// Build the demo scene geometry described by the physics configuration
    ///
    /// Always adds a floor; the ramp and bump are skipped when their angle or
    /// height is zero. The actor is spawned separately.
    pub fn from_config(config: &config::PhysicsConfig) -> Self {
        let mut builder = Self::new()
            .with_physics(config.to_physics_config())
            .add_floor(config.floor_y);

        if config.ramp_angle_deg > 0.0 {
            builder = builder.add_ramp(config.ramp_start_x, config.floor_y, config.ramp_angle_deg);
        }
        if config.bump_height > 0.0 {
            builder = builder.add_bump(BUMP_START_X, config.floor_y, config.bump_height);
        }

        builder
    }

    /// Replace the world's physics configuration
    pub fn with_physics(mut self, config: PhysicsConfig) -> Self {
        self.world.config = config;
        self
    }

    /// Add a walkable floor at the given Y position
    pub fn add_floor(mut self, y: f32) -> Self {
        self.world.add_static_collider(StaticCollider::floor(y));
        self
    }

    /// Add a ramp rising toward +X from `start_x`
    pub fn add_ramp(mut self, start_x: f32, floor_y: f32, angle_deg: f32) -> Self {
        let foot = Vec3::new(start_x, floor_y, 0.0);
        self.world.add_static_collider(StaticCollider::plane(Plane::ramp(foot, angle_deg)));
        self
    }

    /// Add a low box spanning the Z axis, starting at `start_x`
    pub fn add_bump(mut self, start_x: f32, floor_y: f32, height: f32) -> Self {
        let aabb = Aabb::new(
            Vec3::new(start_x, floor_y, -FEATURE_HALF_WIDTH),
            Vec3::new(start_x + BUMP_LENGTH, floor_y + height, FEATURE_HALF_WIDTH),
        );
        self.world.add_static_collider(StaticCollider::aabb(aabb));
        self
    }

    /// Add an invisible wall that blocks the actor but is ignored by ground probes
    pub fn add_barrier(mut self, point: Vec3, normal: Vec3) -> Self {
        self.world.add_static_collider(
            StaticCollider::plane(Plane::from_point_normal(point, normal)).with_filter(CollisionFilter::barrier()),
        );
        self
    }

    /// Add the actor at the given position with the given collision radius
    ///
    /// Only one actor is tracked; adding another replaces the tracked key.
    pub fn add_player(mut self, position: Vec3, radius: f32) -> Self {
        self.player = Some(self.world.add_body(player_body(position, radius)));
        self.player_start = Some(position);
        self
    }

    /// Key of the actor's body (if an actor was added)
    pub fn player(&self) -> Option<BodyKey> {
        self.player
    }

    /// Get the actor's starting position (if an actor was added)
    pub fn player_start(&self) -> Option<Vec3> {
        self.player_start
    }

    /// Build the scene and return the configured world
    pub fn build(self) -> SimWorld {
        self.world
    }
}

/// Sphere body for the actor, colliding with everything but other actors
pub fn player_body(position: Vec3, radius: f32) -> RigidBody {
    RigidBody::new_sphere(position, radius).with_filter(CollisionFilter::player())
}

impl Default for SceneBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glide_physics::PhysicsBackend;

    #[test]
    fn test_empty_scene() {
        let builder = SceneBuilder::new();
        assert!(builder.player().is_none());

        let world = builder.build();
        assert_eq!(world.body_count(), 0);
        assert!(world.static_colliders().is_empty());
    }

    #[test]
    fn test_scene_with_physics() {
        let world = SceneBuilder::new().with_physics(PhysicsConfig::new(4.0)).build();
        assert_eq!(world.config.gravity, 4.0);
    }

    #[test]
    fn test_scene_with_player() {
        let builder = SceneBuilder::new().add_player(Vec3::new(0.0, 1.0, 5.0), 0.5);
        let key = builder.player().expect("player added");
        assert_eq!(builder.player_start(), Some(Vec3::new(0.0, 1.0, 5.0)));

        let world = builder.build();
        let body = world.get_body(key).unwrap();
        assert_eq!(body.radius, 0.5);
        assert_eq!(body.filter, CollisionFilter::player());
    }

    #[test]
    fn test_barrier_is_not_ground() {
        let world = SceneBuilder::new()
            .add_barrier(Vec3::ZERO, Vec3::UP)
            .build();
        assert_eq!(world.static_colliders().len(), 1);
        assert!(world.raycast_down(Vec3::new(0.0, 0.5, 0.0), 1.0).is_none());
    }

    #[test]
    fn test_scene_from_default_config() {
        let config = config::PhysicsConfig::default();
        let builder = SceneBuilder::from_config(&config);
        assert!(builder.player().is_none());

        let world = builder.build();
        // floor + ramp + bump
        assert_eq!(world.static_colliders().len(), 3);
        assert_eq!(world.config.gravity, 9.81);
    }

    #[test]
    fn test_scene_from_config_skips_disabled_features() {
        let config = config::PhysicsConfig {
            ramp_angle_deg: 0.0,
            bump_height: 0.0,
            ..config::PhysicsConfig::default()
        };
        let world = SceneBuilder::from_config(&config).build();
        assert_eq!(world.static_colliders().len(), 1);
    }

    #[test]
    fn test_bump_top_is_walkable() {
        let world = SceneBuilder::new().add_floor(0.0).add_bump(2.0, 0.0, 0.25).build();
        let hit = world.raycast_down(Vec3::new(2.5, 0.75, 0.0), 1.0).expect("bump below");
        assert!((hit.distance - 0.5).abs() < 0.0001);
    }
}
