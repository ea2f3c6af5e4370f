//! Input accumulation
//!
//! Event handlers write into an [`InputState`]; the frame driver takes one
//! [`InputSnapshot`] per frame and the simulation only ever reads that.

/// Horizontal direction of a held control
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
}

/// Where a held control came from. Keyboard and touch are tracked apart so
/// releasing one does not cancel the other.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Source {
    Keyboard,
    Touch,
}

/// Immutable per-frame view of the controls
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputSnapshot {
    pub left: bool,
    pub right: bool,
    /// Jump was pressed since the previous snapshot
    pub jump: bool,
    /// A start trigger (space, tap) arrived since the previous snapshot
    pub start: bool,
    /// The start/restart button was pressed since the previous snapshot
    pub restart: bool,
}

impl InputSnapshot {
    pub fn idle() -> Self {
        Self::default()
    }

    /// Horizontal intent: -1, 0 or 1. Right wins when both are held.
    pub fn horizontal(&self) -> i8 {
        if self.right {
            1
        } else if self.left {
            -1
        } else {
            0
        }
    }
}

/// Mutable accumulator fed by keyboard and touch handlers
#[derive(Debug, Clone, Default)]
pub struct InputState {
    key_left: bool,
    key_right: bool,
    touch_left: bool,
    touch_right: bool,
    jump: bool,
    start: bool,
    restart: bool,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_held(&mut self, source: Source, dir: Direction, held: bool) {
        let flag = match (source, dir) {
            (Source::Keyboard, Direction::Left) => &mut self.key_left,
            (Source::Keyboard, Direction::Right) => &mut self.key_right,
            (Source::Touch, Direction::Left) => &mut self.touch_left,
            (Source::Touch, Direction::Right) => &mut self.touch_right,
        };
        *flag = held;
    }

    pub fn press_jump(&mut self) {
        self.jump = true;
    }

    pub fn press_start(&mut self) {
        self.start = true;
    }

    pub fn press_restart(&mut self) {
        self.restart = true;
    }

    /// Drop every held control, e.g. when the page loses focus.
    pub fn release_all(&mut self) {
        self.key_left = false;
        self.key_right = false;
        self.touch_left = false;
        self.touch_right = false;
    }

    /// Take the per-frame snapshot. One-shot presses are consumed.
    pub fn snapshot(&mut self) -> InputSnapshot {
        let snapshot = InputSnapshot {
            left: self.key_left || self.touch_left,
            right: self.key_right || self.touch_right,
            jump: self.jump,
            start: self.start,
            restart: self.restart,
        };
        self.jump = false;
        self.start = false;
        self.restart = false;
        snapshot
    }
}
