use crate::{
    create_actor, step, Actor, Camera, Candidate, Config, Contact, Events, GameError,
    InputSnapshot, Level, RunAction, RunFsm, RunState, Time, TransitionResult, Velocity,
};
use glam::Vec2;
use hecs::{Entity, World};

/// Copy of the actor's state, detached from the world
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ActorView {
    pub pos: Vec2,
    pub size: Vec2,
    pub vel: Vec2,
    pub contact: Contact,
}

/// What happened during one call to [`Simulation::run_frame`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameReport {
    pub state: RunState,
    /// Set when a control trigger or a fall-out moved the run state
    pub transition: Option<TransitionResult>,
    /// Physics events of this frame; empty when nothing was stepped
    pub events: Events,
    /// Sanitized dt, whether or not it was integrated
    pub dt: f32,
}

/// One player's run: world, level, camera and run state driven frame by frame
pub struct Simulation {
    pub world: World,
    pub actor: Entity,
    pub time: Time,
    pub level: Level,
    pub config: Config,
    pub camera: Camera,
    pub events: Events,
    pub fsm: RunFsm,
    /// Timestamp of the previous frame in milliseconds, `None` before the first
    pub last_timestamp: Option<f64>,
}

impl Simulation {
    pub fn new(level: Level, config: Config) -> Result<Self, GameError> {
        config.validate()?;
        level.validate(config.actor_size())?;
        Ok(Self::build(level, config))
    }

    /// The built-in level with default tuning
    pub fn classic() -> Self {
        Self::build(Level::classic(), Config::new())
    }

    fn build(level: Level, config: Config) -> Self {
        let mut world = World::new();
        let actor = create_actor(&mut world, level.spawn, config.actor_size());

        log::info!(
            "simulation ready: {} platforms, level width {}",
            level.platforms.len(),
            level.width()
        );

        Self {
            world,
            actor,
            time: Time::default(),
            level,
            config,
            camera: Camera::new(),
            events: Events::new(),
            fsm: RunFsm::new(),
            last_timestamp: None,
        }
    }

    pub fn from_json(level_json: &str, config: Config) -> Result<Self, GameError> {
        Self::new(Level::from_json(level_json)?, config)
    }

    /// Put the actor back at spawn, standing still, and rewind the camera.
    pub fn reset(&mut self) {
        let spawn = self.level.spawn;
        if let Ok(mut actor) = self.world.get::<&mut Actor>(self.actor) {
            actor.pos = spawn;
        }
        if let Ok(mut velocity) = self.world.get::<&mut Velocity>(self.actor) {
            velocity.vel = Vec2::ZERO;
        }
        if let Ok(mut contact) = self.world.get::<&mut Contact>(self.actor) {
            *contact = Contact::grounded();
        }
        if let Ok(mut candidate) = self.world.get::<&mut Candidate>(self.actor) {
            candidate.next = spawn;
        }
        self.camera.reset();
        self.events.clear();
        self.time.now = 0.0;
    }

    /// Advance by one animation frame.
    ///
    /// `timestamp_ms` is the frame clock; dt is derived from the previous
    /// call, and the first call has dt = 0. Control triggers are handled
    /// before physics, and a frame that changes the run state does not also
    /// step physics.
    pub fn run_frame(&mut self, timestamp_ms: f64, input: &InputSnapshot) -> FrameReport {
        let raw_dt = match self.last_timestamp {
            Some(last) => ((timestamp_ms - last) / 1000.0) as f32,
            None => 0.0,
        };
        self.last_timestamp = Some(timestamp_ms);
        let dt = self.config.sanitize_dt(raw_dt);

        let mut transition = None;
        if self.control_triggered(input) {
            let result = self.fsm.transition(self.fsm.control_action());
            if result.resets_world() {
                self.reset();
            }
            transition = Some(result);
        }

        if self.fsm.is_running() && transition.is_none() {
            self.time.dt = dt;
            step(
                &mut self.world,
                &mut self.time,
                &self.level,
                &self.config,
                input,
                &mut self.camera,
                &mut self.events,
            );
            if self.events.fell_out {
                log::info!("actor fell out at t = {:.2}s", self.time.now);
                transition = Some(self.fsm.transition(RunAction::FellOut));
            }
        } else {
            self.events.clear();
        }

        FrameReport {
            state: self.fsm.state(),
            transition,
            events: self.events,
            dt,
        }
    }

    fn control_triggered(&self, input: &InputSnapshot) -> bool {
        match self.fsm.state() {
            // Space only jumps during a run; the button and R restart it.
            RunState::Running => input.restart,
            RunState::Idle | RunState::GameOver => input.start || input.restart,
        }
    }

    pub fn actor(&self) -> Option<ActorView> {
        let mut query = self
            .world
            .query_one::<(&Actor, &Velocity, &Contact)>(self.actor)
            .ok()?;
        query.get().map(|(actor, velocity, contact)| ActorView {
            pos: actor.pos,
            size: actor.size,
            vel: velocity.vel,
            contact: *contact,
        })
    }

    pub fn camera_x(&self) -> f32 {
        self.camera.x
    }

    pub fn state(&self) -> RunState {
        self.fsm.state()
    }

    pub fn status_message(&self) -> &'static str {
        self.fsm.status_message()
    }

    pub fn button_label(&self) -> &'static str {
        self.fsm.button_label()
    }

    pub fn can_restart(&self) -> bool {
        self.fsm.can_restart()
    }
}

impl Default for Simulation {
    fn default() -> Self {
        Self::classic()
    }
}
