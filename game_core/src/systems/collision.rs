use crate::{Aabb, Actor, Candidate, Contact, Events, Level, Velocity};
use glam::Vec2;
use hecs::World;

/// What a single resolution pass ran into
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Resolution {
    pub pos: Vec2,
    pub hit_wall: bool,
    pub hit_ceiling: bool,
    /// A downward collision this pass (true every frame while standing)
    pub grounded: bool,
}

/// Correct a candidate position against the platforms, one axis at a time.
///
/// Platforms are visited in list order. A snap zeroes the velocity on that
/// axis, so when several platforms overlap the first one in the list decides
/// the corrected position. The X test
/// uses the running candidate x at the current y; the Y test uses the current
/// x at the running candidate y.
pub fn resolve(
    actor: &Actor,
    candidate: Vec2,
    vel: &mut Vec2,
    contact: &mut Contact,
    platforms: &[Aabb],
) -> Resolution {
    let mut next = candidate;
    let mut hit_wall = false;
    let mut hit_ceiling = false;

    contact.on_ground = false;

    for platform in platforms {
        let rect_x = actor.rect_at(Vec2::new(next.x, actor.pos.y));
        let rect_y = actor.rect_at(Vec2::new(actor.pos.x, next.y));

        if rect_x.overlaps(platform) {
            if vel.x > 0.0 {
                next.x = platform.left() - actor.size.x;
            } else if vel.x < 0.0 {
                next.x = platform.right();
            }
            vel.x = 0.0;
            hit_wall = true;
        }

        if rect_y.overlaps(platform) {
            if vel.y > 0.0 {
                next.y = platform.top() - actor.size.y;
                vel.y = 0.0;
                contact.on_ground = true;
                contact.jumping = false;
            } else if vel.y < 0.0 {
                next.y = platform.bottom();
                vel.y = 0.0;
                hit_ceiling = true;
            }
        }
    }

    Resolution {
        pos: next,
        hit_wall,
        hit_ceiling,
        grounded: contact.on_ground,
    }
}

/// Resolve every actor's candidate position against the level platforms
pub fn resolve_collisions(world: &mut World, level: &Level, events: &mut Events) {
    for (_entity, (actor, velocity, contact, candidate)) in
        world.query_mut::<(&mut Actor, &mut Velocity, &mut Contact, &Candidate)>()
    {
        let was_grounded = contact.on_ground;
        let resolution = resolve(
            actor,
            candidate.next,
            &mut velocity.vel,
            contact,
            &level.platforms,
        );
        actor.pos = resolution.pos;

        events.hit_wall |= resolution.hit_wall;
        events.hit_ceiling |= resolution.hit_ceiling;
        if resolution.grounded && !was_grounded {
            log::debug!("landed at ({:.1}, {:.1})", actor.pos.x, actor.pos.y);
            events.landed = true;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::create_actor;

    const SIZE: Vec2 = Vec2::new(30.0, 40.0);

    fn airborne() -> Contact {
        Contact {
            on_ground: false,
            jumping: true,
        }
    }

    #[test]
    fn test_moving_right_snaps_to_left_edge() {
        let wall = Aabb::from_xywh(100.0, 0.0, 20.0, 100.0);
        let actor = Actor::new(Vec2::new(65.0, 50.0), SIZE);
        let mut vel = Vec2::new(180.0, 0.0);
        let mut contact = airborne();

        let result = resolve(&actor, Vec2::new(72.0, 50.0), &mut vel, &mut contact, &[wall]);

        assert_eq!(result.pos.x, 70.0);
        assert_eq!(vel.x, 0.0);
        assert!(result.hit_wall);
        let placed = actor.rect_at(result.pos);
        assert_eq!(placed.right(), wall.left(), "flush against the wall");
        assert!(!placed.overlaps(&wall));
    }

    #[test]
    fn test_moving_left_snaps_to_right_edge() {
        let wall = Aabb::from_xywh(0.0, 0.0, 20.0, 100.0);
        let actor = Actor::new(Vec2::new(22.0, 50.0), SIZE);
        let mut vel = Vec2::new(-180.0, 0.0);
        let mut contact = airborne();

        let result = resolve(&actor, Vec2::new(19.0, 50.0), &mut vel, &mut contact, &[wall]);

        assert_eq!(result.pos.x, 20.0);
        assert_eq!(vel.x, 0.0);
        assert!(!actor.rect_at(result.pos).overlaps(&wall));
    }

    #[test]
    fn test_falling_lands_on_top() {
        let floor = Aabb::from_xywh(0.0, 360.0, 800.0, 40.0);
        let actor = Actor::new(Vec2::new(80.0, 318.0), SIZE);
        let mut vel = Vec2::new(0.0, 300.0);
        let mut contact = airborne();

        let result = resolve(&actor, Vec2::new(80.0, 323.0), &mut vel, &mut contact, &[floor]);

        assert_eq!(result.pos.y, 320.0);
        assert_eq!(vel.y, 0.0);
        assert!(contact.on_ground);
        assert!(!contact.jumping);
        assert!(result.grounded);
    }

    #[test]
    fn test_rising_bumps_underside() {
        let ceiling = Aabb::from_xywh(0.0, 100.0, 200.0, 40.0);
        let actor = Actor::new(Vec2::new(50.0, 142.0), SIZE);
        let mut vel = Vec2::new(0.0, -400.0);
        let mut contact = airborne();

        let result = resolve(&actor, Vec2::new(50.0, 135.0), &mut vel, &mut contact, &[ceiling]);

        assert_eq!(result.pos.y, 140.0);
        assert_eq!(vel.y, 0.0);
        assert!(result.hit_ceiling);
        assert!(!contact.on_ground);
        assert!(contact.jumping, "bumping the ceiling does not end the jump");
    }

    #[test]
    fn test_ground_flag_cleared_without_contact() {
        let far = Aabb::from_xywh(1000.0, 1000.0, 10.0, 10.0);
        let actor = Actor::new(Vec2::new(0.0, 0.0), SIZE);
        let mut vel = Vec2::new(0.0, 15.0);
        let mut contact = Contact::grounded();

        let result = resolve(&actor, Vec2::new(0.0, 0.25), &mut vel, &mut contact, &[far]);

        assert!(!contact.on_ground);
        assert!(!result.grounded);
        assert_eq!(result.pos, Vec2::new(0.0, 0.25));
        assert_eq!(vel.y, 15.0);
    }

    #[test]
    fn test_touching_edges_do_not_collide() {
        let floor = Aabb::from_xywh(0.0, 360.0, 800.0, 40.0);
        let actor = Actor::new(Vec2::new(80.0, 320.0), SIZE);
        let mut vel = Vec2::new(180.0, 0.0);
        let mut contact = Contact::grounded();

        // Walking along the floor: the X test uses the current y, which only touches.
        let result = resolve(&actor, Vec2::new(83.0, 320.0), &mut vel, &mut contact, &[floor]);

        assert_eq!(result.pos.x, 83.0);
        assert_eq!(vel.x, 180.0);
        assert!(!result.hit_wall);
    }

    #[test]
    fn test_overlaps_resolve_in_list_order() {
        // Two stacked floors both overlap the candidate; list order decides the snap.
        let upper = Aabb::from_xywh(0.0, 100.0, 200.0, 20.0);
        let lower = Aabb::from_xywh(0.0, 105.0, 200.0, 20.0);
        let actor = Actor::new(Vec2::new(50.0, 58.0), SIZE);

        let mut vel = Vec2::new(0.0, 600.0);
        let mut contact = airborne();
        let result = resolve(&actor, Vec2::new(50.0, 70.0), &mut vel, &mut contact, &[upper, lower]);
        assert_eq!(result.pos.y, 60.0, "first overlap snaps, then velocity is zero");

        let mut vel = Vec2::new(0.0, 600.0);
        let mut contact = airborne();
        let result = resolve(&actor, Vec2::new(50.0, 70.0), &mut vel, &mut contact, &[lower, upper]);
        assert_eq!(result.pos.y, 65.0);
    }

    #[test]
    fn test_system_reports_landing_once() {
        let mut world = World::new();
        let level = Level::new(
            vec![Aabb::from_xywh(0.0, 360.0, 800.0, 40.0)],
            Vec2::new(80.0, 300.0),
            Vec2::new(800.0, 400.0),
        )
        .unwrap();
        let entity = create_actor(&mut world, Vec2::new(80.0, 318.0), SIZE);
        world.insert_one(entity, airborne()).unwrap();
        world.insert_one(entity, Velocity::new(Vec2::new(0.0, 300.0))).unwrap();
        world.insert_one(entity, Candidate { next: Vec2::new(80.0, 323.0) }).unwrap();

        let mut events = Events::new();
        resolve_collisions(&mut world, &level, &mut events);
        assert!(events.landed);
        assert_eq!(world.get::<&Actor>(entity).unwrap().pos.y, 320.0);

        // Standing still: the snap repeats but it is not a new landing.
        world.get::<&mut Velocity>(entity).unwrap().vel.y = 15.0;
        world.get::<&mut Candidate>(entity).unwrap().next = Vec2::new(80.0, 320.25);
        let mut events = Events::new();
        resolve_collisions(&mut world, &level, &mut events);
        assert!(!events.landed);
        assert!(world.get::<&Contact>(entity).unwrap().on_ground);
    }
}
