use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::game::{Difficulty, Direction, Phase};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyAction {
    /// Steer the snake; only produced while a game is running
    Move(Direction),
    /// Start a game with the selected difficulty
    Start,
    /// Abandon the current game and start over
    Restart,
    SelectDifficulty(Difficulty),
    NextDifficulty,
    PreviousDifficulty,
    Quit,
    None,
}

/// Maps key presses to actions. The same key can mean different things on the
/// start screen and during play.
pub struct InputHandler;

impl InputHandler {
    pub fn new() -> Self {
        Self
    }

    pub fn handle_key_event(&self, key: KeyEvent, phase: Phase) -> KeyAction {
        // Handle Ctrl+C
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return KeyAction::Quit;
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => return KeyAction::Quit,
            _ => {}
        }

        match phase {
            Phase::Start => Self::start_screen_key(key.code),
            Phase::Running => Self::running_key(key.code),
        }
    }

    fn start_screen_key(code: KeyCode) -> KeyAction {
        match code {
            KeyCode::Enter | KeyCode::Char(' ') => KeyAction::Start,
            KeyCode::Left | KeyCode::Up => KeyAction::PreviousDifficulty,
            KeyCode::Right | KeyCode::Down | KeyCode::Tab => KeyAction::NextDifficulty,
            KeyCode::Char('1') => KeyAction::SelectDifficulty(Difficulty::Easy),
            KeyCode::Char('2') => KeyAction::SelectDifficulty(Difficulty::Normal),
            KeyCode::Char('3') => KeyAction::SelectDifficulty(Difficulty::Hard),
            _ => KeyAction::None,
        }
    }

    fn running_key(code: KeyCode) -> KeyAction {
        match code {
            // Movement - Arrow keys
            KeyCode::Up => KeyAction::Move(Direction::Up),
            KeyCode::Down => KeyAction::Move(Direction::Down),
            KeyCode::Left => KeyAction::Move(Direction::Left),
            KeyCode::Right => KeyAction::Move(Direction::Right),

            // Movement - WASD
            KeyCode::Char('w') | KeyCode::Char('W') => KeyAction::Move(Direction::Up),
            KeyCode::Char('s') | KeyCode::Char('S') => KeyAction::Move(Direction::Down),
            KeyCode::Char('a') | KeyCode::Char('A') => KeyAction::Move(Direction::Left),
            KeyCode::Char('d') | KeyCode::Char('D') => KeyAction::Move(Direction::Right),

            KeyCode::Char('r') | KeyCode::Char('R') => KeyAction::Restart,

            _ => KeyAction::None,
        }
    }
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_arrow_keys_while_running() {
        let handler = InputHandler::new();

        assert_eq!(
            handler.handle_key_event(press(KeyCode::Up), Phase::Running),
            KeyAction::Move(Direction::Up)
        );
        assert_eq!(
            handler.handle_key_event(press(KeyCode::Down), Phase::Running),
            KeyAction::Move(Direction::Down)
        );
        assert_eq!(
            handler.handle_key_event(press(KeyCode::Left), Phase::Running),
            KeyAction::Move(Direction::Left)
        );
        assert_eq!(
            handler.handle_key_event(press(KeyCode::Right), Phase::Running),
            KeyAction::Move(Direction::Right)
        );
    }

    #[test]
    fn test_wasd_keys() {
        let handler = InputHandler::new();

        assert_eq!(
            handler.handle_key_event(press(KeyCode::Char('w')), Phase::Running),
            KeyAction::Move(Direction::Up)
        );
        assert_eq!(
            handler.handle_key_event(press(KeyCode::Char('a')), Phase::Running),
            KeyAction::Move(Direction::Left)
        );
        let s_upper = KeyEvent::new(KeyCode::Char('S'), KeyModifiers::SHIFT);
        assert_eq!(
            handler.handle_key_event(s_upper, Phase::Running),
            KeyAction::Move(Direction::Down)
        );
    }

    #[test]
    fn test_no_steering_on_start_screen() {
        let handler = InputHandler::new();

        assert_eq!(
            handler.handle_key_event(press(KeyCode::Left), Phase::Start),
            KeyAction::PreviousDifficulty
        );
        assert_eq!(
            handler.handle_key_event(press(KeyCode::Right), Phase::Start),
            KeyAction::NextDifficulty
        );
        assert_eq!(
            handler.handle_key_event(press(KeyCode::Char('w')), Phase::Start),
            KeyAction::None
        );
    }

    #[test]
    fn test_start_and_difficulty_keys() {
        let handler = InputHandler::new();

        assert_eq!(
            handler.handle_key_event(press(KeyCode::Enter), Phase::Start),
            KeyAction::Start
        );
        assert_eq!(
            handler.handle_key_event(press(KeyCode::Char('3')), Phase::Start),
            KeyAction::SelectDifficulty(Difficulty::Hard)
        );
        // Enter does nothing mid-game
        assert_eq!(
            handler.handle_key_event(press(KeyCode::Enter), Phase::Running),
            KeyAction::None
        );
    }

    #[test]
    fn test_quit_keys() {
        let handler = InputHandler::new();

        for phase in [Phase::Start, Phase::Running] {
            assert_eq!(handler.handle_key_event(press(KeyCode::Char('q')), phase), KeyAction::Quit);
            assert_eq!(handler.handle_key_event(press(KeyCode::Esc), phase), KeyAction::Quit);
            let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
            assert_eq!(handler.handle_key_event(ctrl_c, phase), KeyAction::Quit);
        }
    }

    #[test]
    fn test_restart_key() {
        let handler = InputHandler::new();

        let r_upper = KeyEvent::new(KeyCode::Char('R'), KeyModifiers::SHIFT);
        assert_eq!(handler.handle_key_event(r_upper, Phase::Running), KeyAction::Restart);
        assert_eq!(
            handler.handle_key_event(press(KeyCode::Char('r')), Phase::Start),
            KeyAction::None
        );
    }
}
