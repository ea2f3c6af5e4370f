use crate::{Config, Contact, Events, InputSnapshot, Velocity};
use hecs::World;

/// Turn the frame's input snapshot into actor velocity.
///
/// Horizontal speed is set directly (no acceleration); a jump only starts
/// from the ground, using the contact flags left by the previous frame.
pub fn apply_input(
    world: &mut World,
    input: &InputSnapshot,
    config: &Config,
    events: &mut Events,
) {
    for (_entity, (velocity, contact)) in world.query_mut::<(&mut Velocity, &mut Contact)>() {
        velocity.vel.x = input.horizontal() as f32 * config.actor_speed;

        if input.jump && contact.on_ground {
            velocity.vel.y = -config.jump_velocity;
            contact.on_ground = false;
            contact.jumping = true;
            events.jumped = true;
        }
    }
}
