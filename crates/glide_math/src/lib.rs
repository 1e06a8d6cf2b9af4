//! 3D Mathematics Library
//!
//! This crate provides the vector and rotation types shared by the Glide
//! locomotion and camera crates.
//!
//! ## Core Types
//!
//! - [`Vec3`] - 3D vector with x, y, z components
//! - [`Quat`] - Unit quaternion rotation
//!
//! ## Scalar helpers
//!
//! - [`move_towards`] - Clamped step toward a target value

mod quat;
mod scalar;
mod vec3;

pub use quat::Quat;
pub use scalar::{inverse_lerp_clamped, move_towards};
pub use vec3::Vec3;
