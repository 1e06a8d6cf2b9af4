//! Scene construction utilities
//!
//! This module provides a declarative API for building the physics world
//! the actor moves through.

mod scene_builder;

pub use scene_builder::{player_body, SceneBuilder};
