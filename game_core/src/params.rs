/// Game tuning parameters for the platformer
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Level grid
    pub const TILE_SIZE: f32 = 40.0;
    pub const VIEWPORT_WIDTH: f32 = 800.0;
    pub const VIEWPORT_HEIGHT: f32 = 400.0;

    // Actor
    pub const ACTOR_WIDTH: f32 = 30.0;
    pub const ACTOR_HEIGHT: f32 = 40.0;
    pub const ACTOR_SPEED: f32 = 180.0; // units per second
    pub const JUMP_VELOCITY: f32 = 500.0; // initial upward speed

    // Physics
    pub const GRAVITY: f32 = 900.0; // units per second squared
    pub const FALL_OUT_MARGIN: f32 = 100.0; // below the viewport bottom

    // Frame timing
    pub const LONG_FRAME_DT: f32 = 0.25; // logged, not clamped
    pub const MAX_DT: f32 = 0.1; // used only when clamping is enabled
}
