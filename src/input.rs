//! Keyboard input for the terminal front end.
//!
//! Maps raw key events to runner inputs. The single "action" key (Space,
//! Up, `w`, or a tap in the browser) starts a session when none is
//! running and jumps otherwise.

use crate::runner::{RunnerInput, RunnerPhase};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Result of handling a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Runner(RunnerInput),
    Quit,
    Ignore,
}

/// What the action key means in the given phase.
pub fn press_action(phase: RunnerPhase) -> RunnerInput {
    match phase {
        RunnerPhase::Running => RunnerInput::Jump,
        RunnerPhase::Idle | RunnerPhase::GameOver => RunnerInput::Start,
    }
}

pub fn map_key(key: KeyEvent, phase: RunnerPhase) -> KeyAction {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return KeyAction::Quit;
    }
    match key.code {
        KeyCode::Char(' ') | KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('W') => {
            KeyAction::Runner(press_action(phase))
        }
        KeyCode::Enter if phase != RunnerPhase::Running => KeyAction::Runner(RunnerInput::Start),
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => KeyAction::Quit,
        _ => KeyAction::Ignore,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_space_starts_when_idle() {
        assert_eq!(
            map_key(key(KeyCode::Char(' ')), RunnerPhase::Idle),
            KeyAction::Runner(RunnerInput::Start)
        );
    }

    #[test]
    fn test_space_jumps_when_running() {
        assert_eq!(
            map_key(key(KeyCode::Char(' ')), RunnerPhase::Running),
            KeyAction::Runner(RunnerInput::Jump)
        );
        assert_eq!(
            map_key(key(KeyCode::Up), RunnerPhase::Running),
            KeyAction::Runner(RunnerInput::Jump)
        );
    }

    #[test]
    fn test_space_restarts_after_game_over() {
        assert_eq!(
            map_key(key(KeyCode::Char(' ')), RunnerPhase::GameOver),
            KeyAction::Runner(RunnerInput::Start)
        );
    }

    #[test]
    fn test_enter_only_starts() {
        assert_eq!(
            map_key(key(KeyCode::Enter), RunnerPhase::GameOver),
            KeyAction::Runner(RunnerInput::Start)
        );
        assert_eq!(
            map_key(key(KeyCode::Enter), RunnerPhase::Running),
            KeyAction::Ignore
        );
    }

    #[test]
    fn test_quit_keys() {
        assert_eq!(map_key(key(KeyCode::Esc), RunnerPhase::Running), KeyAction::Quit);
        assert_eq!(map_key(key(KeyCode::Char('q')), RunnerPhase::Idle), KeyAction::Quit);
        assert_eq!(
            map_key(
                KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
                RunnerPhase::Running
            ),
            KeyAction::Quit
        );
    }

    #[test]
    fn test_other_keys_ignored() {
        assert_eq!(
            map_key(key(KeyCode::Char('x')), RunnerPhase::Running),
            KeyAction::Ignore
        );
    }
}
