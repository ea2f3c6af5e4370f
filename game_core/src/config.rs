use crate::{GameError, Params};
use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Game configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub actor_width: f32,
    pub actor_height: f32,
    pub actor_speed: f32,
    pub jump_velocity: f32,
    pub gravity: f32,
    pub fall_out_margin: f32,
    /// Upper bound applied to each frame's dt. `None` integrates the measured
    /// dt as-is, which can tunnel through thin platforms after a stall.
    pub max_dt: Option<f32>,
    /// Frames longer than this are reported through `log::warn!`.
    pub long_frame_warn_dt: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            actor_width: Params::ACTOR_WIDTH,
            actor_height: Params::ACTOR_HEIGHT,
            actor_speed: Params::ACTOR_SPEED,
            jump_velocity: Params::JUMP_VELOCITY,
            gravity: Params::GRAVITY,
            fall_out_margin: Params::FALL_OUT_MARGIN,
            max_dt: None,
            long_frame_warn_dt: Params::LONG_FRAME_DT,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Same as the default config but with dt clamped to `Params::MAX_DT`.
    pub fn clamped() -> Self {
        Self {
            max_dt: Some(Params::MAX_DT),
            ..Self::default()
        }
    }

    pub fn actor_size(&self) -> Vec2 {
        Vec2::new(self.actor_width, self.actor_height)
    }

    pub fn validate(&self) -> Result<(), GameError> {
        if !(self.actor_width > 0.0 && self.actor_height > 0.0) {
            return Err(GameError::InvalidConfig("actor size must be positive"));
        }
        if self.actor_speed < 0.0 {
            return Err(GameError::InvalidConfig("actor speed must not be negative"));
        }
        if self.jump_velocity < 0.0 {
            return Err(GameError::InvalidConfig("jump velocity must not be negative"));
        }
        if !self.gravity.is_finite() {
            return Err(GameError::InvalidConfig("gravity must be finite"));
        }
        if self.fall_out_margin < 0.0 {
            return Err(GameError::InvalidConfig("fall-out margin must not be negative"));
        }
        if let Some(max_dt) = self.max_dt {
            if max_dt <= 0.0 {
                return Err(GameError::InvalidConfig("max_dt must be positive"));
            }
        }
        Ok(())
    }

    /// Turn a measured frame interval into the dt fed to the physics step.
    pub fn sanitize_dt(&self, raw_dt: f32) -> f32 {
        if raw_dt < 0.0 || !raw_dt.is_finite() {
            log::warn!("non-monotonic frame timestamp (dt = {raw_dt}), treating as 0");
            return 0.0;
        }
        if raw_dt > self.long_frame_warn_dt {
            log::warn!("long frame: dt = {raw_dt:.3}s");
        }
        match self.max_dt {
            Some(max_dt) => raw_dt.min(max_dt),
            None => raw_dt,
        }
    }
}
