//! The input capability consumed by the locomotion controller

/// Source of movement intent
///
/// Allows the scheduler to work with keyboards, gamepads or scripted
/// timelines interchangeably.
pub trait InputSource {
    /// Horizontal (x) and vertical (y) axes, each in `[-1, 1]`, with a
    /// combined magnitude of at most 1.
    fn movement_axes(&self) -> (f32, f32);

    /// Returns true once per jump press, then clears the request.
    fn consume_jump(&mut self) -> bool;
}

/// Clamp an axis pair to the unit disc
///
/// Diagonal input from two digital keys has magnitude sqrt(2); it is scaled
/// back to 1 so diagonal movement is no faster than straight movement.
pub fn clamp_axes(x: f32, y: f32) -> (f32, f32) {
    let x = x.clamp(-1.0, 1.0);
    let y = y.clamp(-1.0, 1.0);
    let len_sq = x * x + y * y;
    if len_sq > 1.0 {
        let inv = 1.0 / len_sq.sqrt();
        (x * inv, y * inv)
    } else {
        (x, y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 0.0001;

    #[test]
    fn test_clamp_axes_inside_disc_untouched() {
        assert_eq!(clamp_axes(0.5, -0.5), (0.5, -0.5));
        assert_eq!(clamp_axes(1.0, 0.0), (1.0, 0.0));
    }

    #[test]
    fn test_clamp_axes_diagonal() {
        let (x, y) = clamp_axes(1.0, 1.0);
        assert!(((x * x + y * y).sqrt() - 1.0).abs() < EPSILON);
        assert!((x - y).abs() < EPSILON);
    }

    #[test]
    fn test_clamp_axes_out_of_range_components() {
        let (x, y) = clamp_axes(4.0, 0.0);
        assert_eq!((x, y), (1.0, 0.0));
    }
}
