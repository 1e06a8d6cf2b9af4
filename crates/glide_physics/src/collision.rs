//! Narrow-phase collision tests and downward probes
//!
//! Also provides collision filtering via layer masks.

use bitflags::bitflags;
use glide_math::Vec3;

use crate::backend::RayHit;
use crate::shapes::{Aabb, Collider, Plane, Sphere};

bitflags! {
    /// Collision layers for filtering which objects can collide
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct CollisionLayer: u32 {
        /// Default layer for most objects
        const DEFAULT = 1 << 0;
        /// The controlled actor
        const PLAYER = 1 << 1;
        /// Static world geometry (floors, ramps, steps)
        const STATIC = 1 << 2;
        /// Geometry that only blocks bodies, never probes (e.g. invisible walls)
        const BARRIER = 1 << 3;
        const ALL = 0xFFFFFFFF;
    }
}

/// Layer membership and the layers an object collides with
///
/// Two objects collide if each one's layer intersects the other's mask.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CollisionFilter {
    pub layer: CollisionLayer,
    pub mask: CollisionLayer,
}

impl Default for CollisionFilter {
    fn default() -> Self {
        Self {
            layer: CollisionLayer::DEFAULT,
            mask: CollisionLayer::ALL,
        }
    }
}

impl CollisionFilter {
    pub fn new(layer: CollisionLayer, mask: CollisionLayer) -> Self {
        Self { layer, mask }
    }

    /// Check if this filter allows collision with another filter
    pub fn collides_with(&self, other: &Self) -> bool {
        self.layer.intersects(other.mask) && other.layer.intersects(self.mask)
    }

    /// Filter for the controlled actor
    pub fn player() -> Self {
        Self {
            layer: CollisionLayer::PLAYER,
            mask: CollisionLayer::ALL & !CollisionLayer::PLAYER,
        }
    }

    /// Filter for walkable static geometry
    pub fn static_world() -> Self {
        Self {
            layer: CollisionLayer::STATIC,
            mask: CollisionLayer::ALL,
        }
    }

    /// Filter for barriers that block bodies but are ignored by ground probes
    pub fn barrier() -> Self {
        Self {
            layer: CollisionLayer::BARRIER,
            mask: CollisionLayer::ALL,
        }
    }
}

/// Contact information from a collision
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Contact {
    /// Point of contact on the sphere surface
    pub point: Vec3,
    /// Normal pointing from the static shape toward the sphere
    pub normal: Vec3,
    /// Penetration depth (positive means overlapping)
    pub penetration: f32,
}

impl Contact {
    pub fn new(point: Vec3, normal: Vec3, penetration: f32) -> Self {
        Self {
            point,
            normal,
            penetration,
        }
    }

    /// Check if this represents an actual collision (positive penetration)
    pub fn is_colliding(&self) -> bool {
        self.penetration > 0.0
    }
}

/// Test sphere vs plane collision
///
/// The contact normal is always the plane normal.
pub fn sphere_vs_plane(sphere: &Sphere, plane: &Plane) -> Option<Contact> {
    // Works for centers on either side of the plane
    let penetration = sphere.radius - plane.signed_distance(sphere.center);

    if penetration > 0.0 {
        let normal = plane.normal;
        let point = sphere.center - normal * sphere.radius;
        Some(Contact::new(point, normal, penetration))
    } else {
        None
    }
}

/// Test sphere vs box collision
pub fn sphere_vs_aabb(sphere: &Sphere, aabb: &Aabb) -> Option<Contact> {
    let closest = aabb.closest_point(sphere.center);
    let delta = sphere.center - closest;
    let dist_squared = delta.length_squared();

    if dist_squared >= sphere.radius * sphere.radius {
        return None;
    }

    let dist = dist_squared.sqrt();
    if dist > 0.0001 {
        let normal = delta / dist;
        let point = sphere.center - normal * sphere.radius;
        return Some(Contact::new(point, normal, sphere.radius - dist));
    }

    // Center inside the box: push out through the nearest face
    let to_min = sphere.center - aabb.min;
    let to_max = aabb.max - sphere.center;
    let faces = [
        (to_min.x, -Vec3::X),
        (to_max.x, Vec3::X),
        (to_min.y, Vec3::DOWN),
        (to_max.y, Vec3::UP),
        (to_min.z, -Vec3::Z),
        (to_max.z, Vec3::Z),
    ];
    let (depth, normal) = faces
        .into_iter()
        .fold((f32::INFINITY, Vec3::UP), |best, face| if face.0 < best.0 { face } else { best });

    let point = sphere.center - normal * sphere.radius;
    Some(Contact::new(point, normal, depth + sphere.radius))
}

/// Check a body sphere against static geometry
pub fn sphere_vs_collider(sphere: &Sphere, collider: &Collider) -> Option<Contact> {
    match collider {
        Collider::Plane(plane) => sphere_vs_plane(sphere, plane),
        Collider::Aabb(aabb) => sphere_vs_aabb(sphere, aabb),
    }
}

/// Cast a ray straight down onto a plane
///
/// Only planes facing upward can be hit, and only from above.
pub fn ray_down_vs_plane(origin: Vec3, max_distance: f32, plane: &Plane) -> Option<RayHit> {
    if plane.normal.y <= 1e-6 {
        return None;
    }
    let height = plane.signed_distance(origin);
    if height < 0.0 {
        return None;
    }

    // Vertical distance to the plane along -Y
    let distance = height / plane.normal.y;
    (distance <= max_distance).then_some(RayHit {
        normal: plane.normal,
        distance,
    })
}

/// Cast a ray straight down onto the top face of a box
pub fn ray_down_vs_aabb(origin: Vec3, max_distance: f32, aabb: &Aabb) -> Option<RayHit> {
    let over_top = origin.x >= aabb.min.x
        && origin.x <= aabb.max.x
        && origin.z >= aabb.min.z
        && origin.z <= aabb.max.z;
    if !over_top || origin.y < aabb.max.y {
        return None;
    }

    let distance = origin.y - aabb.max.y;
    (distance <= max_distance).then_some(RayHit {
        normal: Vec3::UP,
        distance,
    })
}

/// Cast a ray straight down onto static geometry
pub fn ray_down_vs_collider(origin: Vec3, max_distance: f32, collider: &Collider) -> Option<RayHit> {
    match collider {
        Collider::Plane(plane) => ray_down_vs_plane(origin, max_distance, plane),
        Collider::Aabb(aabb) => ray_down_vs_aabb(origin, max_distance, aabb),
    }
}
