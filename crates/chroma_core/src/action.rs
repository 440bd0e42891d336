//! Player actions and their outcomes.
//!
//! Actions are the player's intent. The game decides whether an action is
//! accepted; a rejected action is not an error, it simply changes nothing.

use crate::types::Direction;
use serde::{Deserialize, Serialize};

/// Something the player asks the game to do while playing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlayerAction {
    /// Step one cell in a direction.
    Move(Direction),
    /// Switch to the next palette color.
    CycleColor,
}

impl std::fmt::Display for PlayerAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PlayerAction::Move(direction) => write!(f, "move {}", direction),
            PlayerAction::CycleColor => write!(f, "cycle color"),
        }
    }
}

/// What a game operation did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionOutcome {
    /// Nothing changed: out of bounds, wrong color, or not playing.
    Ignored,
    /// The player moved to a new cell.
    Moved,
    /// The player changed color.
    Recolored,
    /// The player reached the goal.
    Won,
    /// A fresh session replaced the old one (start or reset).
    NewSession,
    /// The elapsed time advanced by one tick.
    Ticked,
}

impl ActionOutcome {
    /// Returns true if the game state changed.
    pub const fn has_update(self) -> bool {
        !matches!(self, ActionOutcome::Ignored)
    }
}
