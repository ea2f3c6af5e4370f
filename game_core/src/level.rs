use crate::{GameError, Params};
use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Axis-aligned bounding box in world units (y grows downward)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    pub min: Vec2,
    pub max: Vec2,
}

impl Aabb {
    pub fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    /// Build from a top-left corner and a size, the way level data is authored.
    pub fn from_xywh(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            min: Vec2::new(x, y),
            max: Vec2::new(x + width, y + height),
        }
    }

    pub fn from_pos_size(pos: Vec2, size: Vec2) -> Self {
        Self {
            min: pos,
            max: pos + size,
        }
    }

    pub fn left(&self) -> f32 {
        self.min.x
    }

    pub fn right(&self) -> f32 {
        self.max.x
    }

    pub fn top(&self) -> f32 {
        self.min.y
    }

    pub fn bottom(&self) -> f32 {
        self.max.y
    }

    pub fn size(&self) -> Vec2 {
        self.max - self.min
    }

    /// Strict overlap test: boxes that only share an edge do not overlap.
    pub fn overlaps(&self, other: &Aabb) -> bool {
        self.min.x < other.max.x
            && self.max.x > other.min.x
            && self.min.y < other.max.y
            && self.max.y > other.min.y
    }

    /// True if any part of the box lies in the horizontal span `[x0, x1)`.
    pub fn spans_x(&self, x0: f32, x1: f32) -> bool {
        self.max.x > x0 && self.min.x < x1
    }
}

/// Static level data: ordered platforms, spawn point and viewport size.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Level {
    pub platforms: Vec<Aabb>,
    /// Top-left corner of the actor at spawn
    pub spawn: Vec2,
    pub viewport: Vec2,
}

impl Level {
    pub fn new(platforms: Vec<Aabb>, spawn: Vec2, viewport: Vec2) -> Result<Self, GameError> {
        let level = Self {
            platforms,
            spawn,
            viewport,
        };
        level.check_shape()?;
        Ok(level)
    }

    /// The level shipped with the game: a ground strip, floating platforms and
    /// a pit before the final stretch of ground.
    pub fn classic() -> Self {
        let t = Params::TILE_SIZE;
        let h = Params::VIEWPORT_HEIGHT;
        let tiles = [
            // (x, y from bottom, width) in tiles; every platform is one tile tall
            (0.0, 1.0, 20.0),
            (5.0, 3.0, 3.0),
            (10.0, 5.0, 2.0),
            (15.0, 3.0, 4.0),
            (22.0, 2.0, 5.0),
            (28.0, 4.0, 3.0),
            (33.0, 6.0, 2.0),
            (37.0, 3.0, 5.0),
            (45.0, 1.0, 10.0),
        ];
        let platforms = tiles
            .iter()
            .map(|&(x, up, w)| Aabb::from_xywh(x * t, h - up * t, w * t, t))
            .collect();

        Self {
            platforms,
            spawn: Vec2::new(t * 2.0, h - t - Params::ACTOR_HEIGHT),
            viewport: Vec2::new(Params::VIEWPORT_WIDTH, h),
        }
    }

    /// Parse a level from JSON and check its shape.
    pub fn from_json(json: &str) -> Result<Self, GameError> {
        let level: Level =
            serde_json::from_str(json).map_err(|e| GameError::LevelParse(e.to_string()))?;
        level.check_shape()?;
        Ok(level)
    }

    /// Total level width: the right edge of the rightmost platform.
    pub fn width(&self) -> f32 {
        self.platforms
            .iter()
            .map(Aabb::right)
            .fold(0.0_f32, f32::max)
    }

    pub fn spawn_rect(&self, actor_size: Vec2) -> Aabb {
        Aabb::from_pos_size(self.spawn, actor_size)
    }

    /// Platforms intersecting the horizontal window `[camera_x, camera_x + viewport.x)`.
    pub fn visible_platforms(&self, camera_x: f32) -> impl Iterator<Item = &Aabb> {
        let right = camera_x + self.viewport.x;
        self.platforms
            .iter()
            .filter(move |p| p.spans_x(camera_x, right))
    }

    /// Full validation, including the spawn clearance for an actor of `actor_size`.
    pub fn validate(&self, actor_size: Vec2) -> Result<(), GameError> {
        self.check_shape()?;
        let spawn = self.spawn_rect(actor_size);
        if let Some(index) = self.platforms.iter().position(|p| p.overlaps(&spawn)) {
            return Err(GameError::SpawnOverlapsPlatform { index });
        }
        Ok(())
    }

    fn check_shape(&self) -> Result<(), GameError> {
        if !(self.viewport.x > 0.0 && self.viewport.y > 0.0) {
            return Err(GameError::InvalidViewport {
                width: self.viewport.x,
                height: self.viewport.y,
            });
        }
        if self.platforms.is_empty() {
            return Err(GameError::EmptyLevel);
        }
        if let Some(index) = self.platforms.iter().position(|p| {
            let size = p.size();
            !(size.x > 0.0 && size.y > 0.0)
        }) {
            return Err(GameError::DegeneratePlatform { index });
        }
        Ok(())
    }
}

impl Default for Level {
    fn default() -> Self {
        Self::classic()
    }
}
