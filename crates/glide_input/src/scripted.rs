//! Scripted input timelines for headless runs and tests

use crate::input_source::{clamp_axes, InputSource};

/// One segment of a script: hold `axes` for `frames` frames
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScriptStep {
    pub axes: (f32, f32),
    /// Request a jump on the first frame of this step
    pub jump: bool,
    pub frames: u32,
}

/// Plays back a fixed timeline of movement and jump requests
///
/// Call [`ScriptedInput::advance`] once per frame before reading the axes.
/// Once the script runs out the source reports no movement.
#[derive(Clone, Debug, Default)]
pub struct ScriptedInput {
    steps: Vec<ScriptStep>,
    frame: Option<u64>,
    jump_pressed: bool,
}

impl ScriptedInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: hold the given axes for a number of frames
    pub fn hold(mut self, x: f32, y: f32, frames: u32) -> Self {
        self.steps.push(ScriptStep {
            axes: clamp_axes(x, y),
            jump: false,
            frames,
        });
        self
    }

    /// Builder: press jump, then hold the given axes for a number of frames
    pub fn jump_and_hold(mut self, x: f32, y: f32, frames: u32) -> Self {
        self.steps.push(ScriptStep {
            axes: clamp_axes(x, y),
            jump: true,
            frames: frames.max(1),
        });
        self
    }

    /// Total length of the script in frames
    pub fn total_frames(&self) -> u64 {
        self.steps.iter().map(|s| u64::from(s.frames)).sum()
    }

    /// Move to the next frame of the script
    pub fn advance(&mut self) {
        let next = self.frame.map_or(0, |f| f + 1);
        self.frame = Some(next);

        match self.step_at(next) {
            Some((step, 0)) if step.jump => self.jump_pressed = true,
            Some(_) => {}
            None if next == self.total_frames() => log::debug!("Input script finished after {} frames", next),
            None => {}
        }
    }

    /// Check if the script has run past its last frame
    pub fn is_finished(&self) -> bool {
        self.frame.is_some_and(|f| f >= self.total_frames())
    }

    /// The step containing `frame`, and the frame's offset within it
    fn step_at(&self, frame: u64) -> Option<(&ScriptStep, u64)> {
        let mut start = 0u64;
        for step in &self.steps {
            let end = start + u64::from(step.frames);
            if frame < end {
                return Some((step, frame - start));
            }
            start = end;
        }
        None
    }
}

impl InputSource for ScriptedInput {
    fn movement_axes(&self) -> (f32, f32) {
        self.frame
            .and_then(|f| self.step_at(f))
            .map(|(step, _)| step.axes)
            .unwrap_or((0.0, 0.0))
    }

    fn consume_jump(&mut self) -> bool {
        let was_pressed = self.jump_pressed;
        self.jump_pressed = false;
        was_pressed
    }
}
