//! Camera pose output

use glide_math::{Quat, Vec3};

/// World-space camera transform
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CameraPose {
    pub position: Vec3,
    pub rotation: Quat,
}

impl CameraPose {
    /// Pose orbiting `look_point` at `distance`, looking along the rotation's forward axis
    pub fn orbiting(look_point: Vec3, rotation: Quat, distance: f32) -> Self {
        Self {
            position: look_point - rotation.forward() * distance,
            rotation,
        }
    }

    /// The point this pose looks at from `distance` away
    pub fn look_point(&self, distance: f32) -> Vec3 {
        self.position + self.rotation.forward() * distance
    }
}

/// Receives the camera transform each render tick
pub trait TransformSink {
    fn set_pose(&mut self, position: Vec3, rotation: Quat);
}

/// A sink that remembers the most recent pose
#[derive(Clone, Debug, Default)]
pub struct PoseRecorder {
    last: Option<CameraPose>,
    writes: usize,
}

impl PoseRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// The last pose written, if any
    pub fn last(&self) -> Option<CameraPose> {
        self.last
    }

    /// Number of poses written so far
    pub fn writes(&self) -> usize {
        self.writes
    }
}

impl TransformSink for PoseRecorder {
    fn set_pose(&mut self, position: Vec3, rotation: Quat) {
        self.last = Some(CameraPose { position, rotation });
        self.writes += 1;
    }
}
