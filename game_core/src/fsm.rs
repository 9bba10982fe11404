//! Game State Machine
//!
//! Run lifecycle: Menu -> Running -> Ended -> Running -> ...

use serde::{Deserialize, Serialize};

/// Game states
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FsmState {
    Menu,
    Running,
    Ended,
}

/// Actions that trigger state transitions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    Start,
    Crash,
    Restart,
}

/// Result of a state transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransitionResult {
    pub success: bool,
    pub from_state: FsmState,
    pub to_state: FsmState,
    pub action: GameAction,
}

/// Game Finite State Machine
#[derive(Debug, Clone)]
pub struct GameFsm {
    state: FsmState,
}

impl GameFsm {
    pub fn new() -> Self {
        Self {
            state: FsmState::Menu,
        }
    }

    pub fn state(&self) -> FsmState {
        self.state
    }

    /// Check if a transition is valid
    pub fn can_transition(&self, action: GameAction) -> bool {
        self.get_next_state(action).is_some()
    }

    /// Attempt a transition; invalid actions leave the state untouched
    pub fn transition(&mut self, action: GameAction) -> TransitionResult {
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

    fn get_next_state(&self, action: GameAction) -> Option<FsmState> {
        match (self.state, action) {
            (FsmState::Menu, GameAction::Start) => Some(FsmState::Running),
            (FsmState::Running, GameAction::Crash) => Some(FsmState::Ended),
            (FsmState::Ended, GameAction::Restart) => Some(FsmState::Running),
            _ => None,
        }
    }

    pub fn is_running(&self) -> bool {
        self.state == FsmState::Running
    }

    pub fn is_ended(&self) -> bool {
        self.state == FsmState::Ended
    }
}

impl Default for GameFsm {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let fsm = GameFsm::new();
        assert_eq!(fsm.state(), FsmState::Menu);
        assert!(!fsm.is_running());
    }

    #[test]
    fn test_valid_transition() {
        let mut fsm = GameFsm::new();
        let result = fsm.transition(GameAction::Start);
        assert!(result.success);
        assert_eq!(result.from_state, FsmState::Menu);
        assert_eq!(result.to_state, FsmState::Running);
        assert!(fsm.is_running());
    }

    #[test]
    fn test_invalid_transition() {
        let mut fsm = GameFsm::new();
        let result = fsm.transition(GameAction::Crash);
        assert!(!result.success);
        assert_eq!(result.to_state, FsmState::Menu);
        assert_eq!(fsm.state(), FsmState::Menu);
    }

    #[test]
    fn test_full_flow() {
        let mut fsm = GameFsm::new();
        fsm.transition(GameAction::Start);
        fsm.transition(GameAction::Crash);
        assert!(fsm.is_ended());
        fsm.transition(GameAction::Restart);
        assert_eq!(fsm.state(), FsmState::Running);
    }

    #[test]
    fn test_no_restart_while_running_or_start_after_menu() {
        let mut fsm = GameFsm::new();
        assert!(!fsm.can_transition(GameAction::Restart));
        fsm.transition(GameAction::Start);
        assert!(!fsm.can_transition(GameAction::Start));
        assert!(!fsm.can_transition(GameAction::Restart));
        fsm.transition(GameAction::Crash);
        assert!(!fsm.can_transition(GameAction::Start));
        assert!(!fsm.can_transition(GameAction::Crash));
    }
}
