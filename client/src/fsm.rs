//! Match State Machine
//!
//! Tracks whether the simulation should be running. Only explicit user
//! actions move it; the simulation never changes match state itself.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

/// Match states
#[cfg_attr(target_arch = "wasm32", wasm_bindgen)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchState {
    NotStarted,
    Running,
    Paused,
    Reset,
}

/// Actions that trigger state transitions
#[cfg_attr(target_arch = "wasm32", wasm_bindgen)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchAction {
    Start,
    Pause,
    Resume,
    Reset,
}

/// Result of a state transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransitionResult {
    pub success: bool,
    pub from_state: MatchState,
    pub to_state: MatchState,
    pub action: MatchAction,
}

/// Match Finite State Machine
#[derive(Debug, Clone)]
pub struct MatchFsm {
    state: MatchState,
}

impl MatchFsm {
    pub fn new() -> Self {
        Self {
            state: MatchState::NotStarted,
        }
    }

    /// Get current state
    pub fn state(&self) -> MatchState {
        self.state
    }

    /// Attempt a transition
    pub fn transition(&mut self, action: MatchAction) -> TransitionResult {
        let from_state = self.state;

        if let Some(next_state) = self.get_next_state(action) {
            self.state = next_state;
            TransitionResult {
                success: true,
                from_state,
                to_state: next_state,
                action,
            }
        } else {
            TransitionResult {
                success: false,
                from_state,
                to_state: from_state,
                action,
            }
        }
    }

    /// Get next state for a given action (if valid)
    fn get_next_state(&self, action: MatchAction) -> Option<MatchState> {
        match (self.state, action) {
            // Reset is accepted from anywhere, including Reset itself
            (_, MatchAction::Reset) => Some(MatchState::Reset),

            (MatchState::NotStarted, MatchAction::Start) => Some(MatchState::Running),
            (MatchState::Reset, MatchAction::Start) => Some(MatchState::Running),

            (MatchState::Running, MatchAction::Pause) => Some(MatchState::Paused),

            (MatchState::Paused, MatchAction::Resume) => Some(MatchState::Running),

            // Invalid transition
            _ => None,
        }
    }

    /// Check if the simulation should step
    pub fn is_running(&self) -> bool {
        self.state == MatchState::Running
    }
}

impl Default for MatchFsm {
    fn default() -> Self {
        Self::new()
    }
}
