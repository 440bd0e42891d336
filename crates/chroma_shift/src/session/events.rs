//! Messages delivered to the session controller.

use chroma_core::PlayerAction;

/// A user request, already decoded from raw input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Move or recolor.
    Action(PlayerAction),
    /// Start a new session.
    Start,
    /// Abandon the session and return to idle.
    Reset,
    /// Leave the game.
    Quit,
}

/// Anything the controller reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEvent {
    /// User command.
    Command(Command),
    /// Timer tick from the timer with this generation.
    Tick(u64),
}

impl From<Command> for SessionEvent {
    fn from(command: Command) -> Self {
        SessionEvent::Command(command)
    }
}
