//! Reference physics backend
//!
//! A small world: sphere bodies integrate gravity and velocity,
//! then get pushed out of static planes and boxes. Each step records the
//! contact normals every body touched, which is what the locomotion
//! controller consumes on its next tick.

use glide_math::Vec3;
use slotmap::{SecondaryMap, SlotMap};

use crate::backend::{BodyKey, PhysicsBackend, RayHit};
use crate::body::{RigidBody, StaticCollider};
use crate::collision::{ray_down_vs_collider, sphere_vs_collider, CollisionLayer};

/// Configuration for the reference backend
#[derive(Clone, Debug)]
pub struct PhysicsConfig {
    /// Gravity magnitude, applied along -Y
    pub gravity: f32,
    /// Static layers that downward probes can hit
    pub probe_mask: CollisionLayer,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            gravity: 9.81,
            probe_mask: CollisionLayer::STATIC,
        }
    }
}

impl PhysicsConfig {
    pub fn new(gravity: f32) -> Self {
        Self {
            gravity,
            ..Self::default()
        }
    }
}

/// Bodies, static geometry and the contacts from the most recent step
pub struct SimWorld {
    bodies: SlotMap<BodyKey, RigidBody>,
    static_colliders: Vec<StaticCollider>,
    contacts: SecondaryMap<BodyKey, Vec<Vec3>>,
    pub config: PhysicsConfig,
}

impl SimWorld {
    /// Create a world with default configuration
    pub fn new() -> Self {
        Self::with_config(PhysicsConfig::default())
    }

    pub fn with_config(config: PhysicsConfig) -> Self {
        Self {
            bodies: SlotMap::with_key(),
            static_colliders: Vec::new(),
            contacts: SecondaryMap::new(),
            config,
        }
    }

    pub fn add_static_collider(&mut self, collider: StaticCollider) {
        self.static_colliders.push(collider);
    }

    pub fn static_colliders(&self) -> &[StaticCollider] {
        &self.static_colliders
    }

    /// Add a body to the world and return its key
    pub fn add_body(&mut self, body: RigidBody) -> BodyKey {
        let key = self.bodies.insert(body);
        self.contacts.insert(key, Vec::new());
        key
    }

    /// Remove a body from the world and return it
    pub fn remove_body(&mut self, key: BodyKey) -> Option<RigidBody> {
        self.contacts.remove(key);
        self.bodies.remove(key)
    }

    pub fn get_body(&self, key: BodyKey) -> Option<&RigidBody> {
        self.bodies.get(key)
    }

    pub fn get_body_mut(&mut self, key: BodyKey) -> Option<&mut RigidBody> {
        self.bodies.get_mut(key)
    }

    pub fn body_count(&self) -> usize {
        self.bodies.len()
    }

    /// Contact normals a body touched during the most recent step
    pub fn contacts(&self, key: BodyKey) -> &[Vec3] {
        self.contacts.get(key).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Step the simulation forward by dt seconds
    ///
    /// 1. Apply gravity and integrate velocity into position
    /// 2. Push bodies out of static geometry, cancelling inward velocity
    /// 3. Record each contact normal for the body
    pub fn step(&mut self, dt: f32) {
        for (_key, list) in &mut self.contacts {
            list.clear();
        }

        for (_key, body) in &mut self.bodies {
            if body.affected_by_gravity {
                body.velocity.y -= self.config.gravity * dt;
            }
            body.position += body.velocity * dt;
        }

        self.resolve_static_collisions();
    }

    fn resolve_static_collisions(&mut self) {
        for (key, body) in &mut self.bodies {
            for static_col in &self.static_colliders {
                if !body.filter.collides_with(&static_col.filter) {
                    continue;
                }
                let Some(contact) = sphere_vs_collider(&body.collider(), &static_col.collider) else {
                    continue;
                };
                if !contact.is_colliding() {
                    continue;
                }

                body.position += contact.normal * contact.penetration;

                // No bounce: only the component moving into the surface is removed
                let into = body.velocity.dot(contact.normal);
                if into < 0.0 {
                    body.velocity -= contact.normal * into;
                }

                if let Some(list) = self.contacts.get_mut(key) {
                    list.push(contact.normal);
                }
            }
        }
    }
}

impl Default for SimWorld {
    fn default() -> Self {
        Self::new()
    }
}

impl PhysicsBackend for SimWorld {
    fn body_velocity(&self, body: BodyKey) -> Option<Vec3> {
        self.bodies.get(body).map(|b| b.velocity)
    }

    fn set_body_velocity(&mut self, body: BodyKey, velocity: Vec3) {
        if let Some(b) = self.bodies.get_mut(body) {
            b.velocity = velocity;
        }
    }

    fn body_position(&self, body: BodyKey) -> Option<Vec3> {
        self.bodies.get(body).map(|b| b.position)
    }

    fn raycast_down(&self, origin: Vec3, max_distance: f32) -> Option<RayHit> {
        self.static_colliders
            .iter()
            .filter(|s| s.filter.layer.intersects(self.config.probe_mask))
            .filter_map(|s| ray_down_vs_collider(origin, max_distance, &s.collider))
            .min_by(|a, b| a.distance.total_cmp(&b.distance))
    }
}
