//! Glide - frame-tick kinematics for a rolling actor and a follow camera
//!
//! The root crate wires the workspace together:
//! - [`config`] - Layered configuration (TOML files and `GLIDE_*` environment variables)
//! - [`scene`] - Scene construction for the reference physics world
//! - [`systems`] - The fixed-step simulation scheduler

pub mod config;
pub mod scene;
pub mod systems;
