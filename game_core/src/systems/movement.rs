use crate::{Actor, Candidate, Config, Time, Velocity};
use glam::Vec2;
use hecs::World;

/// Accumulate gravity and return the unconstrained next position.
///
/// `vel.y` gains `gravity * dt`; `vel.x` is left as the input set it.
pub fn integrate(pos: Vec2, vel: &mut Vec2, gravity: f32, dt: f32) -> Vec2 {
    vel.y += gravity * dt;
    pos + *vel * dt
}

/// Integrate every actor and store the candidate position for collision.
pub fn integrate_actors(world: &mut World, time: &Time, config: &Config) {
    for (_entity, (actor, velocity, candidate)) in
        world.query_mut::<(&Actor, &mut Velocity, &mut Candidate)>()
    {
        candidate.next = integrate(actor.pos, &mut velocity.vel, config.gravity, time.dt);
    }
}
