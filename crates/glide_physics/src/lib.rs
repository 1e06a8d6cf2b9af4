//! Locomotion physics for Glide
//!
//! This crate provides:
//! - The [`PhysicsBackend`] capability the locomotion controller drives
//! - Ground-contact evaluation
//! - The [`LocomotionController`] (acceleration policies, jumping, slope
//!   following and ground snapping)
//! - [`SimWorld`], a small reference backend with sphere bodies against
//!   static planes and boxes

pub mod backend;
pub mod body;
pub mod collision;
pub mod contact;
pub mod locomotion;
pub mod shapes;
pub mod world;

// Re-export commonly used types
pub use backend::{BodyKey, PhysicsBackend, RayHit};
pub use body::{RigidBody, StaticCollider};
pub use collision::{sphere_vs_aabb, sphere_vs_plane, CollisionFilter, CollisionLayer, Contact};
pub use contact::{ground_dot_threshold, GroundContacts};
pub use locomotion::{AccelerationPolicy, ActorState, LocomotionConfig, LocomotionController};
pub use shapes::{Aabb, Collider, Plane, Sphere};
pub use world::{PhysicsConfig, SimWorld};
