//! Glide - headless demo
//!
//! Rolls the actor across the configured scene with a scripted input
//! timeline and logs where it and the camera end up.

use glide::config::AppConfig;
use glide::systems::SimulationSystem;
use glide_input::ScriptedInput;

/// Run right, jump while running, cross the bump and climb the ramp, then let go
fn demo_script() -> ScriptedInput {
    ScriptedInput::new()
        .hold(1.0, 0.0, 90)
        .jump_and_hold(1.0, 0.0, 60)
        .hold(1.0, 0.0, 240)
        .hold(0.0, 0.0, 60)
}

fn main() {
    // Load configuration before logging so the configured level applies
    let (config, load_error) = match AppConfig::load() {
        Ok(config) => (config, None),
        Err(e) => (AppConfig::default(), Some(e)),
    };

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(config.debug.log_level.as_str()))
        .init();
    log::info!("Starting Glide");
    if let Some(e) = load_error {
        log::warn!("Failed to load config: {}. Using defaults.", e);
    }

    let mut sim = SimulationSystem::from_config(&config);
    let mut input = demo_script();
    let frame_time = config.simulation.frame_time;
    let report_interval = config.debug.report_interval;

    for frame in 0..config.simulation.frame_count {
        input.advance();
        let result = sim.update(frame_time, &mut input);

        if report_interval > 0 && frame % report_interval == 0 {
            let state = sim.controller().state();
            log::info!(
                "frame {:4}: pos ({:6.2}, {:5.2}, {:6.2}) speed {:5.2} grounded {}",
                frame,
                result.actor_position.x,
                result.actor_position.y,
                result.actor_position.z,
                state.velocity.length(),
                state.on_ground,
            );
            if config.debug.show_look_point {
                let look = sim.camera().look_point();
                log::info!("           look point ({:6.2}, {:5.2}, {:6.2})", look.x, look.y, look.z);
            }
        }
    }

    let position = sim.actor_position();
    log::info!(
        "Finished after {} physics ticks at ({:.2}, {:.2}, {:.2})",
        sim.total_physics_ticks(),
        position.x,
        position.y,
        position.z,
    );
    if let Some(pose) = sim.camera_pose().last() {
        log::info!(
            "Camera at ({:.2}, {:.2}, {:.2})",
            pose.position.x,
            pose.position.y,
            pose.position.z,
        );
    }
}
