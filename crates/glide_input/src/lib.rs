//! Player input for Glide
//!
//! This crate turns raw key state or a prepared script into movement intent
//! (two clamped axes) and a one-shot jump request.

mod input_source;
mod keyboard;
mod scripted;

pub use input_source::{clamp_axes, InputSource};
pub use keyboard::KeyboardInput;
pub use scripted::{ScriptStep, ScriptedInput};
