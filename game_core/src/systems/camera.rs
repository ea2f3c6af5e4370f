use crate::{camera::follow_x, Actor, Camera, Level};
use hecs::World;

/// Snap the camera to the actor, clamped to the level bounds
pub fn update_camera(world: &World, level: &Level, camera: &mut Camera) {
    let mut query = world.query::<&Actor>();
    if let Some((_entity, actor)) = query.iter().next() {
        camera.x = follow_x(actor.pos.x, level.viewport.x, level.width());
    }
}
