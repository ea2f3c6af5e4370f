pub mod camera;
pub mod components;
pub mod config;
pub mod error;
pub mod fsm;
pub mod input;
pub mod level;
pub mod params;
pub mod resources;
pub mod simulation;
pub mod systems;

pub use camera::*;
pub use components::*;
pub use config::*;
pub use error::*;
pub use fsm::*;
pub use input::*;
pub use level::*;
pub use params::*;
pub use resources::*;
pub use simulation::*;

use hecs::World;
use systems::*;

/// Run one pass of the platformer pipeline over explicit resources.
///
/// Input resolution, physics integration, collision resolution, playfield
/// bounds, then the camera. `time.dt` is used as given.
#[allow(clippy::too_many_arguments)]
pub fn step(
    world: &mut World,
    time: &mut Time,
    level: &Level,
    config: &Config,
    input: &InputSnapshot,
    camera: &mut Camera,
    events: &mut Events,
) {
    // Clear events at start of frame
    events.clear();

    // 1. Input sets horizontal speed and starts jumps
    apply_input(world, input, config, events);

    // 2. Gravity and candidate positions
    integrate_actors(world, time, config);

    // 3. Per-axis correction against platforms
    resolve_collisions(world, level, events);

    // 4. Fall-out and ceiling
    check_bounds(world, level, config, events);

    // 5. Camera follows the corrected position
    update_camera(world, level, camera);

    time.now += time.dt;
}

/// Helper to create the actor entity, standing at `pos`
pub fn create_actor(world: &mut World, pos: glam::Vec2, size: glam::Vec2) -> hecs::Entity {
    world.spawn((
        Actor::new(pos, size),
        Velocity::default(),
        Contact::grounded(),
        Candidate { next: pos },
    ))
}
