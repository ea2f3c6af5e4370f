use game_core::*;
use glam::Vec2;
use hecs::World;

const FRAME_MS: f64 = 1000.0 / 60.0;
const DT: f32 = 1.0 / 60.0;

fn idle() -> InputSnapshot {
    InputSnapshot::idle()
}

fn hold_right() -> InputSnapshot {
    InputSnapshot {
        right: true,
        ..InputSnapshot::idle()
    }
}

fn start() -> InputSnapshot {
    InputSnapshot {
        start: true,
        ..InputSnapshot::idle()
    }
}

/// A short floor with nothing past it, so walking right ends in a fall.
fn ledge_level() -> Level {
    Level::new(
        vec![Aabb::from_xywh(0.0, 360.0, 200.0, 40.0)],
        Vec2::new(10.0, 320.0),
        Vec2::new(800.0, 400.0),
    )
    .unwrap()
}

/// Start a run and return the timestamp of the next frame.
fn started(sim: &mut Simulation) -> f64 {
    sim.run_frame(0.0, &start());
    FRAME_MS
}

#[test]
fn test_actor_settles_on_ground() {
    let mut world = World::new();
    let mut time = Time::new(DT, 0.0);
    let level = Level::classic();
    let config = Config::new();
    let mut camera = Camera::new();
    let mut events = Events::new();

    let actor = create_actor(&mut world, level.spawn, config.actor_size());

    for _ in 0..120 {
        step(
            &mut world,
            &mut time,
            &level,
            &config,
            &idle(),
            &mut camera,
            &mut events,
        );
        let body = world.get::<&Actor>(actor).unwrap();
        assert_eq!(body.pos.y, 320.0, "standing actor must not sink");
        assert!(world.get::<&Contact>(actor).unwrap().on_ground);
        assert!(!events.landed, "standing is not landing");
    }
    assert!((time.now - 2.0).abs() < 1e-3);
}

#[test]
fn test_jump_and_land_cycle() {
    let mut sim = Simulation::classic();
    let mut t = started(&mut sim);

    let jump = InputSnapshot {
        jump: true,
        ..InputSnapshot::idle()
    };
    let report = sim.run_frame(t, &jump);
    assert!(report.events.jumped);
    assert!(sim.actor().unwrap().contact.jumping);

    let mut min_y = f32::MAX;
    let mut landings = 0;
    for _ in 0..120 {
        t += FRAME_MS;
        let report = sim.run_frame(t, &idle());
        let actor = sim.actor().unwrap();
        min_y = min_y.min(actor.pos.y);
        if report.events.landed {
            landings += 1;
        }
    }

    let apex = 320.0 - min_y;
    assert!(apex > 120.0 && apex < 145.0, "apex height {}", apex);
    assert_eq!(landings, 1);

    let actor = sim.actor().unwrap();
    assert_eq!(actor.pos.y, 320.0);
    assert!(actor.contact.on_ground);
    assert!(!actor.contact.jumping);
}

#[test]
fn test_jump_is_ignored_in_the_air() {
    let mut sim = Simulation::classic();
    let mut t = started(&mut sim);
    let jump = InputSnapshot {
        jump: true,
        ..InputSnapshot::idle()
    };

    sim.run_frame(t, &jump);
    t += FRAME_MS;
    sim.run_frame(t, &idle());
    let rising = sim.actor().unwrap().vel.y;

    t += FRAME_MS;
    let report = sim.run_frame(t, &jump);
    assert!(!report.events.jumped);
    assert!(sim.actor().unwrap().vel.y > rising, "gravity keeps acting");
}

#[test]
fn test_wall_blocks_horizontal_motion() {
    let level = Level::new(
        vec![
            Aabb::from_xywh(0.0, 360.0, 800.0, 40.0),
            Aabb::from_xywh(300.0, 200.0, 40.0, 160.0),
        ],
        Vec2::new(10.0, 320.0),
        Vec2::new(800.0, 400.0),
    )
    .unwrap();
    let mut sim = Simulation::new(level, Config::new()).unwrap();
    let mut t = started(&mut sim);

    let mut hit_wall = false;
    for _ in 0..200 {
        let report = sim.run_frame(t, &hold_right());
        hit_wall |= report.events.hit_wall;
        t += FRAME_MS;

        let actor = sim.actor().unwrap();
        assert!(actor.pos.x <= 270.0, "actor passed the wall at {}", actor.pos.x);
    }

    assert!(hit_wall);
    let actor = sim.actor().unwrap();
    assert_eq!(actor.pos.x, 270.0);
    assert_eq!(actor.pos.y, 320.0);
}

#[test]
fn test_fall_out_ends_the_run_once() {
    let mut sim = Simulation::new(ledge_level(), Config::new()).unwrap();
    let mut t = started(&mut sim);

    let mut fell_out = Vec::new();
    for frame in 0..300 {
        let report = sim.run_frame(t, &hold_right());
        t += FRAME_MS;
        if let Some(transition) = report.transition {
            assert_eq!(transition.action, RunAction::FellOut);
            assert!(transition.success);
            fell_out.push(frame);
        }
    }

    assert_eq!(fell_out.len(), 1);
    assert_eq!(sim.state(), RunState::GameOver);
    assert_eq!(sim.status_message(), "Game over! You fell.");
    assert_eq!(sim.button_label(), "Play Again");

    // The world is frozen after the run ends.
    let frozen = sim.actor().unwrap();
    assert!(frozen.pos.y + frozen.size.y > 500.0);
    for _ in 0..10 {
        let report = sim.run_frame(t, &hold_right());
        t += FRAME_MS;
        assert!(!report.events.any());
    }
    assert_eq!(sim.actor().unwrap(), frozen);
}

#[test]
fn test_play_again_returns_to_spawn() {
    let mut sim = Simulation::new(ledge_level(), Config::new()).unwrap();
    let mut t = started(&mut sim);
    while sim.state() == RunState::Running {
        sim.run_frame(t, &hold_right());
        t += FRAME_MS;
    }
    assert!(sim.can_restart());

    let restart = InputSnapshot {
        restart: true,
        ..InputSnapshot::idle()
    };
    let report = sim.run_frame(t, &restart);
    let transition = report.transition.unwrap();
    assert_eq!(transition.action, RunAction::Restart);
    assert_eq!(transition.to_state, RunState::Running);

    let actor = sim.actor().unwrap();
    assert_eq!(actor.pos, Vec2::new(10.0, 320.0));
    assert_eq!(actor.vel, Vec2::ZERO);
    assert!(actor.contact.on_ground);
    assert_eq!(sim.camera_x(), 0.0);
}

#[test]
fn test_camera_tracks_actor_within_level() {
    let mut sim = Simulation::classic();
    let mut t = started(&mut sim);

    for _ in 0..200 {
        sim.run_frame(t, &hold_right());
        t += FRAME_MS;

        let actor = sim.actor().unwrap();
        let camera_x = sim.camera_x();
        assert_eq!(camera_x, follow_x(actor.pos.x, 800.0, 2200.0));
        assert!((0.0..=1400.0).contains(&camera_x));
    }

    let actor = sim.actor().unwrap();
    assert!(actor.pos.x > 600.0);
    assert!((sim.camera_x() - (actor.pos.x - 400.0)).abs() < 1e-3);
}

#[test]
fn test_camera_clamps_at_level_end() {
    let mut world = World::new();
    let mut time = Time::new(DT, 0.0);
    let level = Level::classic();
    let config = Config::new();
    let mut camera = Camera::new();
    let mut events = Events::new();

    create_actor(&mut world, Vec2::new(2150.0, 320.0), config.actor_size());
    step(
        &mut world,
        &mut time,
        &level,
        &config,
        &hold_right(),
        &mut camera,
        &mut events,
    );

    assert_eq!(camera.x, 1400.0);
}

#[test]
fn test_long_frame_without_clamp_tunnels_through_floor() {
    let mut sim = Simulation::classic();
    let t = started(&mut sim);
    sim.run_frame(t, &idle());

    let report = sim.run_frame(t + 2000.0, &idle());
    assert!((report.dt - 2.0).abs() < 1e-3);
    assert!(report.events.fell_out);
    assert_eq!(sim.state(), RunState::GameOver);
}

#[test]
fn test_clamped_config_survives_long_frame() {
    let mut sim = Simulation::new(Level::classic(), Config::clamped()).unwrap();
    let t = started(&mut sim);
    sim.run_frame(t, &idle());

    let report = sim.run_frame(t + 2000.0, &idle());
    assert_eq!(report.dt, Params::MAX_DT);
    assert_eq!(sim.state(), RunState::Running);
    assert_eq!(sim.actor().unwrap().pos.y, 320.0);
}

#[test]
fn test_level_json_round_trip_into_simulation() {
    let json = serde_json::to_string(&ledge_level()).unwrap();
    let sim = Simulation::from_json(&json, Config::new()).unwrap();
    assert_eq!(sim.level, ledge_level());
    assert_eq!(sim.actor().unwrap().pos, Vec2::new(10.0, 320.0));
}
