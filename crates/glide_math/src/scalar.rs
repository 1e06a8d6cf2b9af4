//! Scalar interpolation helpers

/// Move `current` toward `target` by at most `max_delta`
///
/// Never overshoots the target. A non-positive `max_delta` leaves `current`
/// unchanged.
#[inline]
pub fn move_towards(current: f32, target: f32, max_delta: f32) -> f32 {
    let delta = target - current;
    if delta.abs() <= max_delta {
        target
    } else if max_delta <= 0.0 {
        current
    } else {
        current + delta.signum() * max_delta
    }
}

/// Map `value` from `[lower, upper]` onto `[0, 1]`, clamping outside the range
///
/// A degenerate range (`upper <= lower`) yields 0 at or below `lower`, else 1.
#[inline]
pub fn inverse_lerp_clamped(lower: f32, upper: f32, value: f32) -> f32 {
    if upper <= lower {
        return if value <= lower { 0.0 } else { 1.0 };
    }
    ((value - lower) / (upper - lower)).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_towards_clamps_step() {
        assert_eq!(move_towards(0.0, 10.0, 1.0), 1.0);
        assert_eq!(move_towards(0.0, -10.0, 1.0), -1.0);
    }

    #[test]
    fn test_move_towards_never_overshoots() {
        assert_eq!(move_towards(9.5, 10.0, 1.0), 10.0);
        assert_eq!(move_towards(-9.5, -10.0, 1.0), -10.0);
    }

    #[test]
    fn test_move_towards_zero_step() {
        assert_eq!(move_towards(3.0, 10.0, 0.0), 3.0);
        assert_eq!(move_towards(3.0, 3.0, 0.0), 3.0);
    }

    #[test]
    fn test_inverse_lerp_clamped() {
        assert_eq!(inverse_lerp_clamped(0.7, 1.4, 0.5), 0.0);
        assert_eq!(inverse_lerp_clamped(0.7, 1.4, 2.0), 1.0);
        assert!((inverse_lerp_clamped(0.7, 1.4, 1.05) - 0.5).abs() < 0.0001);
        assert_eq!(inverse_lerp_clamped(1.0, 1.0, 1.0), 0.0);
        assert_eq!(inverse_lerp_clamped(1.0, 1.0, 1.5), 1.0);
    }
}
