//! Tests for key bindings.

use chroma_core::{Direction, PlayerAction};
use chroma_shift::{Command, command_for};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

fn press(code: KeyCode) -> Option<Command> {
    command_for(KeyEvent::new(code, KeyModifiers::NONE))
}

fn step(direction: Direction) -> Option<Command> {
    Some(Command::Action(PlayerAction::Move(direction)))
}

#[test]
fn test_arrows_and_wasd_move() {
    assert_eq!(press(KeyCode::Up), step(Direction::Up));
    assert_eq!(press(KeyCode::Down), step(Direction::Down));
    assert_eq!(press(KeyCode::Left), step(Direction::Left));
    assert_eq!(press(KeyCode::Right), step(Direction::Right));

    assert_eq!(press(KeyCode::Char('w')), step(Direction::Up));
    assert_eq!(press(KeyCode::Char('s')), step(Direction::Down));
    assert_eq!(press(KeyCode::Char('a')), step(Direction::Left));
    assert_eq!(press(KeyCode::Char('d')), step(Direction::Right));
}

#[test]
fn test_control_keys() {
    assert_eq!(
        press(KeyCode::Char(' ')),
        Some(Command::Action(PlayerAction::CycleColor))
    );
    assert_eq!(press(KeyCode::Enter), Some(Command::Start));
    assert_eq!(press(KeyCode::Char('r')), Some(Command::Reset));
    assert_eq!(press(KeyCode::Char('q')), Some(Command::Quit));
    assert_eq!(press(KeyCode::Esc), Some(Command::Quit));
    assert_eq!(
        command_for(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
        Some(Command::Quit)
    );
}

#[test]
fn test_unbound_keys_ignored() {
    assert_eq!(press(KeyCode::Char('x')), None);
    assert_eq!(press(KeyCode::Tab), None);
    assert_eq!(press(KeyCode::Char('c')), None);
}
