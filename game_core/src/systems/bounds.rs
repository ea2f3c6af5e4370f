use crate::{Actor, Config, Events, Level, Velocity};
use hecs::World;

/// Apply the playfield limits after collision resolution.
///
/// Dropping more than `fall_out_margin` below the viewport raises
/// `events.fell_out`; the top of the playfield is a hard ceiling at y = 0.
pub fn check_bounds(world: &mut World, level: &Level, config: &Config, events: &mut Events) {
    let fall_out_line = level.viewport.y + config.fall_out_margin;

    for (_entity, (actor, velocity)) in world.query_mut::<(&mut Actor, &mut Velocity)>() {
        if actor.bottom() > fall_out_line {
            events.fell_out = true;
        }
        if actor.pos.y < 0.0 {
            actor.pos.y = 0.0;
            if velocity.vel.y < 0.0 {
                velocity.vel.y = 0.0;
            }
        }
    }
}
