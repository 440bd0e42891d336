//! Key bindings.

use crate::session::Command;
use chroma_core::{Direction, PlayerAction};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Maps a key press to a command. Releases, repeats and unbound keys map
/// to nothing.
pub fn command_for(key: KeyEvent) -> Option<Command> {
    if key.kind != KeyEventKind::Press {
        return None;
    }

    let step = |direction| Some(Command::Action(PlayerAction::Move(direction)));
    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            Some(Command::Quit)
        }
        KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('W') => step(Direction::Up),
        KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('S') => step(Direction::Down),
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => step(Direction::Left),
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => step(Direction::Right),
        KeyCode::Char(' ') => Some(Command::Action(PlayerAction::CycleColor)),
        KeyCode::Enter => Some(Command::Start),
        KeyCode::Char('r') | KeyCode::Char('R') => Some(Command::Reset),
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Some(Command::Quit),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventState;

    fn release(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        }
    }

    #[test]
    fn test_release_ignored() {
        assert_eq!(command_for(release(KeyCode::Enter)), None);
        assert_eq!(command_for(release(KeyCode::Char(' '))), None);
    }
}
