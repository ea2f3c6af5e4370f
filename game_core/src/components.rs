use crate::level::Aabb;
use glam::Vec2;

/// Actor body - the controllable rectangle, anchored at its top-left corner
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Actor {
    pub pos: Vec2,
    pub size: Vec2,
}

impl Actor {
    pub fn new(pos: Vec2, size: Vec2) -> Self {
        Self { pos, size }
    }

    pub fn rect(&self) -> Aabb {
        Aabb::from_pos_size(self.pos, self.size)
    }

    /// Rectangle the actor would occupy at `pos`
    pub fn rect_at(&self, pos: Vec2) -> Aabb {
        Aabb::from_pos_size(pos, self.size)
    }

    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }
}

/// Velocity in world units per second (positive y is down)
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Velocity {
    pub vel: Vec2,
}

impl Velocity {
    pub fn new(vel: Vec2) -> Self {
        Self { vel }
    }
}

/// Ground contact flags, rewritten by collision resolution every running frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Contact {
    pub on_ground: bool,
    pub jumping: bool,
}

impl Contact {
    /// Contact state at spawn: standing, not mid-jump
    pub fn grounded() -> Self {
        Self {
            on_ground: true,
            jumping: false,
        }
    }
}

impl Default for Contact {
    fn default() -> Self {
        Self::grounded()
    }
}

/// Position produced by integration, before collision correction
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Candidate {
    pub next: Vec2,
}
