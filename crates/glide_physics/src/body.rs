//! Body types for the reference backend

use glide_math::Vec3;

use crate::collision::CollisionFilter;
use crate::shapes::{Aabb, Collider, Plane, Sphere};

/// A sphere-shaped rigid body with position and velocity
#[derive(Clone, Debug)]
pub struct RigidBody {
    /// Center of the sphere (world coordinates)
    pub position: Vec3,
    /// Velocity (units per second)
    pub velocity: Vec3,
    pub radius: f32,
    pub affected_by_gravity: bool,
    pub filter: CollisionFilter,
}

impl RigidBody {
    /// Create a new sphere body at rest
    pub fn new_sphere(position: Vec3, radius: f32) -> Self {
        Self {
            position,
            velocity: Vec3::ZERO,
            radius,
            affected_by_gravity: true,
            filter: CollisionFilter::default(),
        }
    }

    /// Builder: set the initial velocity
    pub fn with_velocity(mut self, velocity: Vec3) -> Self {
        self.velocity = velocity;
        self
    }

    /// Builder: enable or disable gravity
    pub fn with_gravity(mut self, enabled: bool) -> Self {
        self.affected_by_gravity = enabled;
        self
    }

    /// Builder: set the collision filter
    pub fn with_filter(mut self, filter: CollisionFilter) -> Self {
        self.filter = filter;
        self
    }

    /// The body's collision sphere at its current position
    pub fn collider(&self) -> Sphere {
        Sphere::new(self.position, self.radius)
    }
}

/// Immovable collision geometry
#[derive(Clone, Copy, Debug)]
pub struct StaticCollider {
    pub collider: Collider,
    pub filter: CollisionFilter,
}

impl StaticCollider {
    /// Walkable horizontal floor at height `y`
    pub fn floor(y: f32) -> Self {
        Self::plane(Plane::floor(y))
    }

    /// Walkable plane
    pub fn plane(plane: Plane) -> Self {
        Self {
            collider: Collider::Plane(plane),
            filter: CollisionFilter::static_world(),
        }
    }

    /// Walkable box (steps, bumps, platforms)
    pub fn aabb(aabb: Aabb) -> Self {
        Self {
            collider: Collider::Aabb(aabb),
            filter: CollisionFilter::static_world(),
        }
    }

    /// Builder: set the collision filter
    pub fn with_filter(mut self, filter: CollisionFilter) -> Self {
        self.filter = filter;
        self
    }
}
