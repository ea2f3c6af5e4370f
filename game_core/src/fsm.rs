//! Run State Machine
//!
//! Tracks whether the simulation is waiting to start, running, or over.

/// Run states
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    Idle,
    Running,
    GameOver,
}

/// Actions that trigger state transitions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunAction {
    /// Start trigger while idle (key, tap or button)
    Start,
    /// Manual restart shortcut while running; returns to idle
    Toggle,
    /// The actor dropped below the playfield
    FellOut,
    /// Explicit restart after a game over
    Restart,
}

/// Result of a state transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransitionResult {
    pub success: bool,
    pub from_state: RunState,
    pub to_state: RunState,
    pub action: RunAction,
}

impl TransitionResult {
    /// Whether the transition requires actor and camera to go back to spawn
    pub fn resets_world(&self) -> bool {
        self.success
            && matches!(
                self.action,
                RunAction::Start | RunAction::Toggle | RunAction::Restart
            )
    }
}

/// Run finite state machine
#[derive(Debug, Clone)]
pub struct RunFsm {
    state: RunState,
    /// Set after a manual toggle so the idle status can say the game was reset
    was_reset: bool,
}

impl RunFsm {
    pub fn new() -> Self {
        Self {
            state: RunState::Idle,
            was_reset: false,
        }
    }

    /// Get current state
    pub fn state(&self) -> RunState {
        self.state
    }

    /// Check if a transition is valid
    pub fn can_transition(&self, action: RunAction) -> bool {
        self.next_state(action).is_some()
    }

    /// Attempt a transition
    pub fn transition(&mut self, action: RunAction) -> TransitionResult {
        let from_state = self.state;

        match self.next_state(action) {
            Some(next_state) => {
                self.state = next_state;
                self.was_reset = action == RunAction::Toggle;
                log::info!("run state {:?} -> {:?} ({:?})", from_state, next_state, action);
                TransitionResult {
                    success: true,
                    from_state,
                    to_state: next_state,
                    action,
                }
            }
            None => TransitionResult {
                success: false,
                from_state,
                to_state: from_state,
                action,
            },
        }
    }

    /// Action a start/restart trigger maps to in the current state
    pub fn control_action(&self) -> RunAction {
        match self.state {
            RunState::Idle => RunAction::Start,
            RunState::Running => RunAction::Toggle,
            RunState::GameOver => RunAction::Restart,
        }
    }

    fn next_state(&self, action: RunAction) -> Option<RunState> {
        match (self.state, action) {
            (RunState::Idle, RunAction::Start) => Some(RunState::Running),
            (RunState::Running, RunAction::FellOut) => Some(RunState::GameOver),
            (RunState::Running, RunAction::Toggle) => Some(RunState::Idle),
            (RunState::GameOver, RunAction::Restart) => Some(RunState::Running),
            _ => None,
        }
    }

    pub fn is_running(&self) -> bool {
        self.state == RunState::Running
    }

    pub fn is_game_over(&self) -> bool {
        self.state == RunState::GameOver
    }

    /// Whether the control button restarts a run in progress or a finished
    /// one, rather than starting from idle
    pub fn can_restart(&self) -> bool {
        matches!(self.state, RunState::Running | RunState::GameOver)
    }

    /// Human-readable status line for the current state
    pub fn status_message(&self) -> &'static str {
        match self.state {
            RunState::Idle if self.was_reset => "Game reset. Press Start or Space to begin.",
            RunState::Idle => "Press Start or Space to begin.",
            RunState::Running => "Jump and advance!",
            RunState::GameOver => "Game over! You fell.",
        }
    }

    /// Label for the start/restart button
    pub fn button_label(&self) -> &'static str {
        match self.state {
            RunState::Idle => "Start Game",
            RunState::Running => "Restart Game",
            RunState::GameOver => "Play Again",
        }
    }
}

impl Default for RunFsm {
    fn default() -> Self {
        Self::new()
    }
}
