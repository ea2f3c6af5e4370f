//! Keyboard and touch input handling
//!
//! Translates browser key names and touch controls into the shared
//! [`InputState`]. Everything here is plain data so it runs off-browser too.

use game_core::{Direction, InputState, Source};

/// On-screen touch buttons
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TouchControl {
    Left,
    Right,
    Jump,
}

impl TouchControl {
    /// Parse the control name used by the page ("left", "right", "jump")
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "left" => Some(Self::Left),
            "right" => Some(Self::Right),
            "jump" => Some(Self::Jump),
            _ => None,
        }
    }
}

fn direction_for_key(key: &str) -> Option<Direction> {
    match key {
        "ArrowLeft" | "a" | "A" => Some(Direction::Left),
        "ArrowRight" | "d" | "D" => Some(Direction::Right),
        _ => None,
    }
}

/// Handle key down event. Returns true if the key belongs to the game, so
/// the caller can suppress the browser default (page scroll on space).
pub fn handle_key_down(input: &mut InputState, key: &str, repeat: bool) -> bool {
    if let Some(dir) = direction_for_key(key) {
        input.set_held(Source::Keyboard, dir, true);
        return true;
    }
    match key {
        " " => {
            input.press_jump();
            input.press_start();
            true
        }
        "ArrowUp" => {
            input.press_jump();
            true
        }
        "r" | "R" => {
            // Auto-repeat would bounce between running and idle
            if !repeat {
                input.press_restart();
            }
            true
        }
        _ => false,
    }
}

/// Handle key up event
pub fn handle_key_up(input: &mut InputState, key: &str) -> bool {
    match direction_for_key(key) {
        Some(dir) => {
            input.set_held(Source::Keyboard, dir, false);
            true
        }
        None => false,
    }
}

/// Handle a touch button going down (`active`) or up.
///
/// Any touch start doubles as a start trigger; it is ignored while a run is
/// in progress.
pub fn handle_touch(input: &mut InputState, control: TouchControl, active: bool) {
    if active {
        input.press_start();
    }
    match control {
        TouchControl::Left => input.set_held(Source::Touch, Direction::Left, active),
        TouchControl::Right => input.set_held(Source::Touch, Direction::Right, active),
        TouchControl::Jump => {
            if active {
                input.press_jump();
            }
        }
    }
}
