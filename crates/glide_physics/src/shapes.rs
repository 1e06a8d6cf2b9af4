//! Collision shapes for the reference backend

use glide_math::Vec3;

/// A sphere defined by center and radius
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sphere {
    pub center: Vec3,
    pub radius: f32,
}

impl Sphere {
    pub fn new(center: Vec3, radius: f32) -> Self {
        Self { center, radius }
    }
}

/// An axis-aligned box
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Aabb {
    pub min: Vec3,
    pub max: Vec3,
}

impl Aabb {
    pub fn new(min: Vec3, max: Vec3) -> Self {
        Self { min, max }
    }

    /// Create a box centered at a position with given half-extents
    pub fn from_center_half_extents(center: Vec3, half_extents: Vec3) -> Self {
        Self {
            min: center - half_extents,
            max: center + half_extents,
        }
    }

    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    /// Check if a point is inside or on the box
    pub fn contains(&self, point: Vec3) -> bool {
        point.x >= self.min.x
            && point.x <= self.max.x
            && point.y >= self.min.y
            && point.y <= self.max.y
            && point.z >= self.min.z
            && point.z <= self.max.z
    }

    /// Closest point inside or on the box
    pub fn closest_point(&self, point: Vec3) -> Vec3 {
        Vec3::new(
            point.x.clamp(self.min.x, self.max.x),
            point.y.clamp(self.min.y, self.max.y),
            point.z.clamp(self.min.z, self.max.z),
        )
    }
}

/// An infinite plane: `normal · point = distance`
///
/// Points with `normal · point > distance` are above the plane.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Plane {
    /// Unit normal pointing to the positive side
    pub normal: Vec3,
    pub distance: f32,
}

impl Plane {
    /// Create a plane from a point on it and a normal (normalized here)
    pub fn from_point_normal(point: Vec3, normal: Vec3) -> Self {
        let n = normal.normalized();
        Self {
            normal: n,
            distance: n.dot(point),
        }
    }

    /// Horizontal floor at height `y`
    pub fn floor(y: f32) -> Self {
        Self::from_point_normal(Vec3::new(0.0, y, 0.0), Vec3::UP)
    }

    /// Incline rising toward +X, passing through `foot`
    ///
    /// Combined with a floor at the foot's height, the walkable surface is the
    /// upper envelope of the two planes: flat before the foot, sloped after.
    pub fn ramp(foot: Vec3, angle_deg: f32) -> Self {
        let angle = angle_deg.to_radians();
        Self::from_point_normal(foot, Vec3::new(-angle.sin(), angle.cos(), 0.0))
    }

    /// Signed distance from a point to the plane (positive above)
    pub fn signed_distance(&self, point: Vec3) -> f32 {
        self.normal.dot(point) - self.distance
    }
}

/// Static collision geometry
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Collider {
    Plane(Plane),
    Aabb(Aabb),
}
