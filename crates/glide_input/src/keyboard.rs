//! Keyboard-driven movement input
//!
//! Controls:
//! - W/S or Up/Down: Forward/backward (vertical axis)
//! - A/D or Left/Right: Left/right (horizontal axis)
//! - Space: Jump

use winit::event::ElementState;
use winit::keyboard::KeyCode;

use crate::input_source::{clamp_axes, InputSource};

/// Tracks held movement keys and latches jump presses
#[derive(Clone, Debug, Default)]
pub struct KeyboardInput {
    forward: bool,
    backward: bool,
    left: bool,
    right: bool,

    // Set on button-down, cleared by consume_jump
    jump_pressed: bool,
    jump_held: bool,
}

impl KeyboardInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Process keyboard input
    ///
    /// Returns true if the key is one this input source handles.
    pub fn process_keyboard(&mut self, key: KeyCode, state: ElementState) -> bool {
        let pressed = state == ElementState::Pressed;

        match key {
            KeyCode::KeyW | KeyCode::ArrowUp => { self.forward = pressed; true }
            KeyCode::KeyS | KeyCode::ArrowDown => { self.backward = pressed; true }
            KeyCode::KeyA | KeyCode::ArrowLeft => { self.left = pressed; true }
            KeyCode::KeyD | KeyCode::ArrowRight => { self.right = pressed; true }
            KeyCode::Space => {
                // Only the down edge requests a jump; OS key repeat is ignored
                if pressed && !self.jump_held {
                    self.jump_pressed = true;
                }
                self.jump_held = pressed;
                true
            }
            _ => false,
        }
    }

    /// Release every key, e.g. when the window loses focus
    pub fn release_all(&mut self) {
        let jump_pressed = self.jump_pressed;
        *self = Self::default();
        // A press that already happened this frame still counts
        self.jump_pressed = jump_pressed;
    }

    /// Check if any movement keys are pressed
    pub fn is_moving(&self) -> bool {
        self.forward || self.backward || self.left || self.right
    }
}

impl InputSource for KeyboardInput {
    fn movement_axes(&self) -> (f32, f32) {
        let horizontal = (self.right as i32 - self.left as i32) as f32;
        let vertical = (self.forward as i32 - self.backward as i32) as f32;
        clamp_axes(horizontal, vertical)
    }

    fn consume_jump(&mut self) -> bool {
        let was_pressed = self.jump_pressed;
        self.jump_pressed = false;
        was_pressed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 0.0001;

    #[test]
    fn test_idle_has_no_movement() {
        let input = KeyboardInput::new();
        assert_eq!(input.movement_axes(), (0.0, 0.0));
        assert!(!input.is_moving());
    }

    #[test]
    fn test_wasd_axes() {
        let mut input = KeyboardInput::new();
        assert!(input.process_keyboard(KeyCode::KeyD, ElementState::Pressed));
        assert_eq!(input.movement_axes(), (1.0, 0.0));

        input.process_keyboard(KeyCode::KeyD, ElementState::Released);
        input.process_keyboard(KeyCode::KeyS, ElementState::Pressed);
        assert_eq!(input.movement_axes(), (0.0, -1.0));
    }

    #[test]
    fn test_opposite_keys_cancel() {
        let mut input = KeyboardInput::new();
        input.process_keyboard(KeyCode::KeyA, ElementState::Pressed);
        input.process_keyboard(KeyCode::ArrowRight, ElementState::Pressed);
        assert_eq!(input.movement_axes(), (0.0, 0.0));
        assert!(input.is_moving());
    }

    #[test]
    fn test_diagonal_is_clamped() {
        let mut input = KeyboardInput::new();
        input.process_keyboard(KeyCode::KeyW, ElementState::Pressed);
        input.process_keyboard(KeyCode::KeyD, ElementState::Pressed);
        let (x, y) = input.movement_axes();
        assert!(((x * x + y * y).sqrt() - 1.0).abs() < EPSILON);
    }

    #[test]
    fn test_jump_is_one_shot() {
        let mut input = KeyboardInput::new();
        input.process_keyboard(KeyCode::Space, ElementState::Pressed);

        assert!(input.consume_jump());
        assert!(!input.consume_jump());
    }

    #[test]
    fn test_held_jump_does_not_repeat() {
        let mut input = KeyboardInput::new();
        input.process_keyboard(KeyCode::Space, ElementState::Pressed);
        assert!(input.consume_jump());

        // Key repeat delivers another Pressed while still held
        input.process_keyboard(KeyCode::Space, ElementState::Pressed);
        assert!(!input.consume_jump());

        input.process_keyboard(KeyCode::Space, ElementState::Released);
        input.process_keyboard(KeyCode::Space, ElementState::Pressed);
        assert!(input.consume_jump());
    }

    #[test]
    fn test_unhandled_key() {
        let mut input = KeyboardInput::new();
        assert!(!input.process_keyboard(KeyCode::KeyQ, ElementState::Pressed));
    }

    #[test]
    fn test_release_all_keeps_pending_jump() {
        let mut input = KeyboardInput::new();
        input.process_keyboard(KeyCode::KeyW, ElementState::Pressed);
        input.process_keyboard(KeyCode::Space, ElementState::Pressed);

        input.release_all();

        assert!(!input.is_moving());
        assert!(input.consume_jump());
    }
}
