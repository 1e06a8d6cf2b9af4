//! Game simulation system
//!
//! Drives one frame of the simulation:
//! - Input → locomotion intent
//! - Fixed-step physics ticks (controller, then backend step)
//! - One camera render tick on the settled actor position

use glide_camera::{build_camera, CameraPose, FollowCamera, PoseRecorder};
use glide_input::InputSource;
use glide_math::Vec3;
use glide_physics::{BodyKey, LocomotionConfig, LocomotionController, PhysicsBackend, SimWorld};

use crate::config::AppConfig;
use crate::scene::{player_body, SceneBuilder};

/// Longest frame the simulation will catch up on
///
/// Longer frames (first frame, a debugger pause) are truncated so the
/// physics loop cannot spiral.
pub const MAX_FRAME_TIME: f32 = 0.25;

/// Result of a simulation update
#[derive(Clone, Copy, Debug)]
pub struct SimulationResult {
    /// Physics ticks run this frame
    pub physics_ticks: u32,
    /// Actor position after the last physics tick
    pub actor_position: Vec3,
    /// Camera pose written this frame
    pub camera_pose: CameraPose,
}

/// Owns the world, actor controller and camera, and schedules their ticks
pub struct SimulationSystem {
    world: SimWorld,
    controller: LocomotionController,
    camera: Box<dyn FollowCamera>,
    camera_pose: PoseRecorder,

    fixed_timestep: f32,
    accumulator: f32,
    total_physics_ticks: u64,
    contact_buffer: Vec<Vec3>,
}

impl SimulationSystem {
    /// Create a simulation around an existing world and actor body
    pub fn new(
        world: SimWorld,
        player: BodyKey,
        locomotion: LocomotionConfig,
        camera: Box<dyn FollowCamera>,
        fixed_timestep: f32,
    ) -> Self {
        Self {
            world,
            controller: LocomotionController::new(player, locomotion),
            camera,
            camera_pose: PoseRecorder::new(),
            fixed_timestep,
            accumulator: 0.0,
            total_physics_ticks: 0,
            contact_buffer: Vec::new(),
        }
    }

    /// Build the configured scene, actor and camera
    pub fn from_config(config: &AppConfig) -> Self {
        let mut world = SceneBuilder::from_config(&config.physics).build();

        let start = Vec3::from_array(config.physics.player_start);
        let player = world.add_body(player_body(start, config.physics.player_radius));
        let camera = build_camera(&config.camera, start);

        log::info!(
            "Simulation ready: {} static colliders, {:?} camera, {:.3}s physics step",
            world.static_colliders().len(),
            config.camera.variant,
            config.simulation.fixed_timestep,
        );

        Self::new(
            world,
            player,
            config.locomotion_config(),
            camera,
            config.simulation.fixed_timestep,
        )
    }

    /// Run one simulation frame
    ///
    /// # Arguments
    /// * `frame_dt` - Time since the previous frame, in seconds
    /// * `input` - Source of movement axes and jump requests
    pub fn update(&mut self, frame_dt: f32, input: &mut dyn InputSource) -> SimulationResult {
        // 1. Cap frame time
        let dt = frame_dt.clamp(0.0, MAX_FRAME_TIME);

        // 2. Input → intent (the jump latch survives frames without a physics tick)
        let axes = input.movement_axes();
        let jump = input.consume_jump();
        self.controller.on_input(axes, jump);

        // 3. Fixed-step physics
        self.accumulator += dt;
        let mut physics_ticks = 0;
        while self.accumulator >= self.fixed_timestep {
            self.physics_tick();
            self.accumulator -= self.fixed_timestep;
            physics_ticks += 1;
        }
        self.total_physics_ticks += u64::from(physics_ticks);

        // 4. Camera follows the settled actor position
        let actor_position = self.actor_position();
        let camera_pose = self.camera.on_render_tick(actor_position, dt, &mut self.camera_pose);

        SimulationResult {
            physics_ticks,
            actor_position,
            camera_pose,
        }
    }

    fn physics_tick(&mut self) {
        let body = self.controller.body();

        // Contacts from the previous step feed this tick
        self.contact_buffer.clear();
        self.contact_buffer.extend_from_slice(self.world.contacts(body));

        self.controller
            .on_physics_tick(&mut self.world, &self.contact_buffer, self.fixed_timestep);
        self.world.step(self.fixed_timestep);
    }

    /// Current actor position (the camera's look point if the body is gone)
    pub fn actor_position(&self) -> Vec3 {
        self.world
            .body_position(self.controller.body())
            .unwrap_or_else(|| self.camera.look_point())
    }

    pub fn world(&self) -> &SimWorld {
        &self.world
    }

    pub fn world_mut(&mut self) -> &mut SimWorld {
        &mut self.world
    }

    pub fn controller(&self) -> &LocomotionController {
        &self.controller
    }

    pub fn camera(&self) -> &dyn FollowCamera {
        self.camera.as_ref()
    }

    /// Last camera pose written
    pub fn camera_pose(&self) -> &PoseRecorder {
        &self.camera_pose
    }

    pub fn total_physics_ticks(&self) -> u64 {
        self.total_physics_ticks
    }
}
