use thiserror::Error;

/// Errors raised while building a level or a simulation.
///
/// Stepping a simulation never fails; these only guard construction.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum GameError {
    #[error("level has no platforms")]
    EmptyLevel,

    #[error("platform {index} has a non-positive size")]
    DegeneratePlatform { index: usize },

    #[error("spawn rectangle overlaps platform {index}")]
    SpawnOverlapsPlatform { index: usize },

    #[error("viewport must be positive, got {width}x{height}")]
    InvalidViewport { width: f32, height: f32 },

    #[error("invalid config: {0}")]
    InvalidConfig(&'static str),

    #[error("failed to parse level: {0}")]
    LevelParse(String),
}
