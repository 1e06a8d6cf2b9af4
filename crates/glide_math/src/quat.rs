//! Unit quaternion rotations

use bytemuck::{Pod, Zeroable};
use serde::{Deserialize, Serialize};

use crate::Vec3;

/// A rotation stored as a unit quaternion (x, y, z vector part, w scalar part)
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable, Serialize, Deserialize)]
pub struct Quat {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub w: f32,
}

impl Default for Quat {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Quat {
    pub const IDENTITY: Self = Self { x: 0.0, y: 0.0, z: 0.0, w: 1.0 };

    /// Rotation of `radians` around `axis` (right-hand rule)
    ///
    /// A zero axis yields the identity rotation.
    pub fn from_axis_angle(axis: Vec3, radians: f32) -> Self {
        let Some(axis) = axis.try_normalized() else {
            return Self::IDENTITY;
        };
        let (s, c) = (radians * 0.5).sin_cos();
        Self {
            x: axis.x * s,
            y: axis.y * s,
            z: axis.z * s,
            w: c,
        }
    }

    /// Build an orbit rotation from Euler angles in degrees
    ///
    /// Roll is applied first, then pitch about X, then yaw about Y, so a
    /// positive pitch tilts the forward axis downward and a positive yaw
    /// turns it toward +X.
    pub fn from_euler_degrees(pitch: f32, yaw: f32, roll: f32) -> Self {
        let qx = Self::from_axis_angle(Vec3::X, pitch.to_radians());
        let qy = Self::from_axis_angle(Vec3::Y, yaw.to_radians());
        let qz = Self::from_axis_angle(Vec3::Z, roll.to_radians());
        qy * qx * qz
    }

    /// Rotate a vector
    #[inline]
    pub fn rotate(self, v: Vec3) -> Vec3 {
        let u = Vec3::new(self.x, self.y, self.z);
        let t = u.cross(v) * 2.0;
        v + t * self.w + u.cross(t)
    }

    /// The rotated forward axis (+Z)
    #[inline]
    pub fn forward(self) -> Vec3 {
        self.rotate(Vec3::FORWARD)
    }

    /// Quaternion norm
    #[inline]
    pub fn length(self) -> f32 {
        (self.x * self.x + self.y * self.y + self.z * self.z + self.w * self.w).sqrt()
    }
}

impl std::ops::Mul for Quat {
    type Output = Self;

    /// Compose rotations: `(a * b).rotate(v) == a.rotate(b.rotate(v))`
    fn mul(self, rhs: Self) -> Self {
        Self {
            w: self.w * rhs.w - self.x * rhs.x - self.y * rhs.y - self.z * rhs.z,
            x: self.w * rhs.x + self.x * rhs.w + self.y * rhs.z - self.z * rhs.y,
            y: self.w * rhs.y - self.x * rhs.z + self.y * rhs.w + self.z * rhs.x,
            z: self.w * rhs.z + self.x * rhs.y - self.y * rhs.x + self.z * rhs.w,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 0.0001;

    #[test]
    fn test_identity_rotation() {
        let v = Vec3::new(1.0, 2.0, 3.0);
        assert_eq!(Quat::IDENTITY.rotate(v), v);
        assert_eq!(Quat::default(), Quat::IDENTITY);
    }

    #[test]
    fn test_pitch_tilts_forward_down() {
        let q = Quat::from_euler_degrees(45.0, 0.0, 0.0);
        let f = q.forward();
        let s = std::f32::consts::FRAC_1_SQRT_2;
        assert!(f.abs_diff_eq(Vec3::new(0.0, -s, s), EPSILON));
    }

    #[test]
    fn test_yaw_turns_forward_right() {
        let q = Quat::from_euler_degrees(0.0, 90.0, 0.0);
        assert!(q.forward().abs_diff_eq(Vec3::X, EPSILON));
    }

    #[test]
    fn test_composition_order() {
        let pitch = Quat::from_axis_angle(Vec3::X, 0.3);
        let yaw = Quat::from_axis_angle(Vec3::Y, 1.1);
        let v = Vec3::new(0.2, -0.5, 0.9);
        let composed = (yaw * pitch).rotate(v);
        let sequential = yaw.rotate(pitch.rotate(v));
        assert!(composed.abs_diff_eq(sequential, EPSILON));
    }

    #[test]
    fn test_unit_length_and_zero_axis() {
        let q = Quat::from_euler_degrees(30.0, 60.0, 10.0);
        assert!((q.length() - 1.0).abs() < EPSILON);
        assert_eq!(Quat::from_axis_angle(Vec3::ZERO, 1.0), Quat::IDENTITY);
    }

    #[test]
    fn test_rotation_preserves_length() {
        let q = Quat::from_euler_degrees(45.0, 20.0, 0.0);
        let v = Vec3::new(3.0, -1.0, 2.0);
        assert!((q.rotate(v).length() - v.length()).abs() < EPSILON);
    }
}
