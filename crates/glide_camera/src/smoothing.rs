//! Look-point smoothing models
//!
//! Each zone of a follow camera owns a [`ZoneSettings`]: a smoothing mode and
//! a follow speed. Stepping a zone moves the current look point toward the
//! target and updates the zone's smoothing velocity.
//!
//! With `P` the target, `C` the current look point, `V` the stored velocity,
//! `s` the follow speed and `dt' = dt * s`:
//!
//! | mode            | velocity update                               |
//! |-----------------|-----------------------------------------------|
//! | `no_follow`     | `V = 0`                                       |
//! | `linear`        | `V = normalize(P - C)`                        |
//! | `exponential`   | `V = P - C`                                   |
//! | `spring`        | `V = (V - (C - P) * s * dt') / (1 + dt')^2`     |
//! | `damped_spring` | `V = (V - (C - P) * s^2 * dt') / (1 + s * dt')^2` |
//! | `instant`       | no velocity; jumps to `P` (inner) or the zone edge (outer) |
//!
//! The next look point is `C + V * dt'` unless that step would reach or pass
//! the target, in which case it is the target.

use glide_math::Vec3;
use serde::{Deserialize, Serialize};

/// How a zone moves the look point toward the target
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SmoothingMode {
    /// Look point stays put (inner zone only)
    NoFollow,
    /// Constant-rate approach
    Linear,
    /// Approach proportional to the remaining distance
    Exponential,
    /// Critically damped style spring
    Spring,
    /// Spring with the damping scaled by the follow speed
    DampedSpring,
    /// Jump straight to the target (inner) or the zone boundary (outer)
    Instant,
}

impl SmoothingMode {
    /// Whether the mode is usable for the outer zone
    pub fn is_valid_outer(self) -> bool {
        self != SmoothingMode::NoFollow
    }
}

/// Which side of the zone boundary is being evaluated
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Zone {
    /// Target within the circle radius
    Inner,
    /// Target outside the circle radius
    Outer,
}

/// Smoothing mode and follow speed for one zone
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ZoneSettings {
    pub mode: SmoothingMode,
    pub follow_speed: f32,
}

impl ZoneSettings {
    pub fn new(mode: SmoothingMode, follow_speed: f32) -> Self {
        Self { mode, follow_speed }
    }

    /// Compute this zone's candidate look point
    ///
    /// `velocity` is the zone's smoothing state and is updated in place.
    /// `radius` is only used by the outer instant mode, which places the look
    /// point on the zone boundary between the target and the current point.
    pub fn step(
        &self,
        zone: Zone,
        target: Vec3,
        current: Vec3,
        velocity: &mut Vec3,
        radius: f32,
        dt: f32,
    ) -> Vec3 {
        let distance = target.distance(current);
        let speed = self.follow_speed;
        let scaled_dt = dt * speed;

        match self.mode {
            SmoothingMode::Instant => {
                return match zone {
                    Zone::Inner => target,
                    Zone::Outer if distance > 0.0 => {
                        // Never pushes the look point further from the target than it was
                        target.lerp(current, (radius / distance).clamp(0.0, 1.0))
                    }
                    Zone::Outer => target,
                };
            }
            SmoothingMode::NoFollow => *velocity = Vec3::ZERO,
            SmoothingMode::Linear => *velocity = (target - current).normalized(),
            SmoothingMode::Exponential => *velocity = target - current,
            SmoothingMode::Spring => {
                let damping = 1.0 + scaled_dt;
                *velocity = (*velocity - (current - target) * (speed * scaled_dt)) / (damping * damping);
            }
            SmoothingMode::DampedSpring => {
                let damping = 1.0 + speed * scaled_dt;
                *velocity =
                    (*velocity - (current - target) * (speed * speed * scaled_dt)) / (damping * damping);
            }
        }

        if velocity.length() * scaled_dt < distance {
            current + *velocity * scaled_dt
        } else {
            target
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 0.0001;
    const DT: f32 = 0.02;

    const ALL_MODES: [SmoothingMode; 6] = [
        SmoothingMode::NoFollow,
        SmoothingMode::Linear,
        SmoothingMode::Exponential,
        SmoothingMode::Spring,
        SmoothingMode::DampedSpring,
        SmoothingMode::Instant,
    ];

    #[test]
    fn test_zero_distance_leaves_look_point_unchanged() {
        let point = Vec3::new(1.0, 2.0, 3.0);
        for mode in ALL_MODES {
            for zone in [Zone::Inner, Zone::Outer] {
                let settings = ZoneSettings::new(mode, 5.0);
                let mut velocity = Vec3::new(0.3, 0.0, -0.2);
                let next = settings.step(zone, point, point, &mut velocity, 1.0, DT);
                assert_eq!(next, point, "{:?} {:?}", mode, zone);
            }
        }
    }

    #[test]
    fn test_inner_instant_reaches_target() {
        let settings = ZoneSettings::new(SmoothingMode::Instant, 5.0);
        let target = Vec3::new(0.3, 0.1, -0.4);
        let mut velocity = Vec3::ZERO;
        let next = settings.step(Zone::Inner, target, Vec3::ZERO, &mut velocity, 1.0, DT);
        assert_eq!(next, target);
    }

    #[test]
    fn test_outer_instant_stops_at_radius() {
        let settings = ZoneSettings::new(SmoothingMode::Instant, 5.0);
        let mut velocity = Vec3::ZERO;
        let next = settings.step(Zone::Outer, Vec3::new(5.0, 0.0, 0.0), Vec3::ZERO, &mut velocity, 1.0, DT);
        assert!(next.abs_diff_eq(Vec3::new(4.0, 0.0, 0.0), EPSILON));
    }

    #[test]
    fn test_outer_instant_never_moves_away() {
        let settings = ZoneSettings::new(SmoothingMode::Instant, 5.0);
        let mut velocity = Vec3::ZERO;
        let current = Vec3::new(0.5, 0.0, 0.0);
        let next = settings.step(Zone::Outer, Vec3::ZERO, current, &mut velocity, 1.0, DT);
        assert_eq!(next, current);
    }

    #[test]
    fn test_no_follow_clears_velocity() {
        let settings = ZoneSettings::new(SmoothingMode::NoFollow, 5.0);
        let mut velocity = Vec3::new(1.0, 1.0, 1.0);
        let next = settings.step(Zone::Inner, Vec3::new(0.5, 0.0, 0.0), Vec3::ZERO, &mut velocity, 1.0, DT);
        assert_eq!(next, Vec3::ZERO);
        assert_eq!(velocity, Vec3::ZERO);
    }

    #[test]
    fn test_linear_moves_at_follow_speed() {
        let settings = ZoneSettings::new(SmoothingMode::Linear, 5.0);
        let mut velocity = Vec3::ZERO;
        let next = settings.step(Zone::Outer, Vec3::new(0.0, 0.0, 10.0), Vec3::ZERO, &mut velocity, 1.0, DT);
        // dt' = 0.1, unit velocity
        assert!(next.abs_diff_eq(Vec3::new(0.0, 0.0, 0.1), EPSILON));
    }

    #[test]
    fn test_exponential_closes_fraction_of_gap() {
        let settings = ZoneSettings::new(SmoothingMode::Exponential, 5.0);
        let mut velocity = Vec3::ZERO;
        let next = settings.step(Zone::Outer, Vec3::new(2.0, 0.0, 0.0), Vec3::ZERO, &mut velocity, 1.0, DT);
        assert!(next.abs_diff_eq(Vec3::new(0.2, 0.0, 0.0), EPSILON));
        assert_eq!(velocity, Vec3::new(2.0, 0.0, 0.0));
    }

    #[test]
    fn test_spring_velocity_update() {
        let settings = ZoneSettings::new(SmoothingMode::Spring, 2.0);
        let mut velocity = Vec3::ZERO;
        let target = Vec3::new(1.0, 0.0, 0.0);
        settings.step(Zone::Inner, target, Vec3::ZERO, &mut velocity, 2.0, 0.05);
        // dt' = 0.1, V = (0 + 1 * 2 * 0.1) / 1.1^2
        assert!((velocity.x - 0.2 / 1.21).abs() < EPSILON);
    }

    #[test]
    fn test_damped_spring_velocity_update() {
        let settings = ZoneSettings::new(SmoothingMode::DampedSpring, 2.0);
        let mut velocity = Vec3::ZERO;
        let target = Vec3::new(1.0, 0.0, 0.0);
        settings.step(Zone::Inner, target, Vec3::ZERO, &mut velocity, 2.0, 0.05);
        // dt' = 0.1, V = (0 + 1 * 4 * 0.1) / 1.2^2
        assert!((velocity.x - 0.4 / 1.44).abs() < EPSILON);
    }

    #[test]
    fn test_overshoot_clamps_to_target() {
        let settings = ZoneSettings::new(SmoothingMode::Exponential, 10.0);
        let mut velocity = Vec3::ZERO;
        let target = Vec3::new(0.0, 1.0, 0.0);
        // dt' = 1.0: a full step lands exactly on the target
        let next = settings.step(Zone::Outer, target, Vec3::ZERO, &mut velocity, 0.5, 0.1);
        assert_eq!(next, target);
    }

    #[test]
    fn test_spring_converges_without_passing_target() {
        let settings = ZoneSettings::new(SmoothingMode::Spring, 5.0);
        let target = Vec3::new(3.0, 0.0, 0.0);
        let mut current = Vec3::ZERO;
        let mut velocity = Vec3::ZERO;

        for _ in 0..500 {
            current = settings.step(Zone::Outer, target, current, &mut velocity, 1.0, DT);
            assert!(current.x <= target.x + EPSILON);
        }
        assert!(current.abs_diff_eq(target, 0.01));
    }

    #[test]
    fn test_outer_mode_validity() {
        assert!(SmoothingMode::Linear.is_valid_outer());
        assert!(!SmoothingMode::NoFollow.is_valid_outer());
    }
}
