//! Ground-contact evaluation
//!
//! A contact counts as ground when its normal is within the grounded angle of
//! world up. Ground normals seen during one tick are summed and normalized.

use glide_math::Vec3;

/// Minimum `normal · up` for a surface to count as ground
///
/// `grounded_angle_deg` is the steepest walkable slope in degrees.
pub fn ground_dot_threshold(grounded_angle_deg: f32) -> f32 {
    grounded_angle_deg.clamp(0.0, 90.0).to_radians().cos()
}

/// Check whether a unit surface normal is walkable
#[inline]
pub fn is_ground_normal(normal: Vec3, min_ground_dot: f32) -> bool {
    // Small slack so a slope at exactly the configured angle still counts
    normal.dot(Vec3::UP) >= min_ground_dot - 1e-5
}

/// Accumulates ground normals reported during a tick
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct GroundContacts {
    sum: Vec3,
    count: u32,
}

impl GroundContacts {
    pub fn new() -> Self {
        Self::default()
    }

    /// Evaluate a batch of contact normals, keeping the walkable ones
    pub fn evaluate(&mut self, normals: &[Vec3], min_ground_dot: f32) {
        for &normal in normals {
            if is_ground_normal(normal, min_ground_dot) {
                self.sum += normal;
                self.count += 1;
            }
        }
    }

    /// True if at least one walkable contact was seen
    pub fn is_grounded(&self) -> bool {
        self.count > 0
    }

    /// Number of walkable contacts seen
    pub fn count(&self) -> u32 {
        self.count
    }

    /// Normalized sum of the walkable normals, or zero if there were none
    pub fn normal(&self) -> Vec3 {
        self.sum.normalized()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 0.0001;

    #[test]
    fn test_threshold() {
        assert!((ground_dot_threshold(0.0) - 1.0).abs() < EPSILON);
        assert!(ground_dot_threshold(90.0).abs() < EPSILON);
        assert!((ground_dot_threshold(60.0) - 0.5).abs() < EPSILON);
    }

    #[test]
    fn test_flat_ground_is_walkable() {
        assert!(is_ground_normal(Vec3::UP, ground_dot_threshold(20.0)));
    }

    #[test]
    fn test_wall_is_not_walkable() {
        assert!(!is_ground_normal(Vec3::X, ground_dot_threshold(20.0)));
        assert!(!is_ground_normal(Vec3::DOWN, ground_dot_threshold(20.0)));
    }

    #[test]
    fn test_slope_at_exact_angle_is_walkable() {
        let angle = 20f32.to_radians();
        let normal = Vec3::new(-angle.sin(), angle.cos(), 0.0);
        assert!(is_ground_normal(normal, ground_dot_threshold(20.0)));

        let steeper = 21f32.to_radians();
        let normal = Vec3::new(-steeper.sin(), steeper.cos(), 0.0);
        assert!(!is_ground_normal(normal, ground_dot_threshold(20.0)));
    }

    #[test]
    fn test_accumulated_normal_is_normalized_sum() {
        let a = Vec3::new(0.2, 1.0, 0.0).normalized();
        let b = Vec3::new(-0.1, 1.0, 0.1).normalized();
        let c = Vec3::UP;

        let mut contacts = GroundContacts::new();
        contacts.evaluate(&[a, b], ground_dot_threshold(20.0));
        contacts.evaluate(&[c], ground_dot_threshold(20.0));

        assert!(contacts.is_grounded());
        assert_eq!(contacts.count(), 3);
        assert!(contacts.normal().abs_diff_eq((a + b + c).normalized(), EPSILON));
    }

    #[test]
    fn test_steep_contacts_are_ignored() {
        let mut contacts = GroundContacts::new();
        contacts.evaluate(&[Vec3::X, -Vec3::Z], ground_dot_threshold(20.0));

        assert!(!contacts.is_grounded());
        assert_eq!(contacts.normal(), Vec3::ZERO);
    }
}
