//! Core domain types: palette colors, cells, positions and directions.

use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A paint color the player can take on.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::EnumIter,
    strum::Display,
)]
pub enum Color {
    /// Red (the color every session starts with).
    #[default]
    Red,
    /// Green.
    Green,
    /// Blue.
    Blue,
    /// Yellow.
    Yellow,
}

/// The fixed palette, in cycling order.
pub const PALETTE: [Color; 4] = [Color::Red, Color::Green, Color::Blue, Color::Yellow];

impl Color {
    /// Returns the next palette color, wrapping from the last back to the first.
    #[instrument]
    pub fn next(self) -> Self {
        let index = PALETTE.iter().position(|c| *c == self).unwrap_or(0);
        PALETTE[(index + 1) % PALETTE.len()]
    }
}

/// A single grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    /// Ordinary cell painted in a palette color.
    Paint(Color),
    /// The goal marker. Matches any player color.
    Goal,
    /// Obstacle. Matches no player color.
    Obstacle,
}

impl Cell {
    /// Returns true if a player wearing `color` may step onto this cell.
    pub fn admits(self, color: Color) -> bool {
        match self {
            Cell::Paint(paint) => paint == color,
            Cell::Goal => true,
            Cell::Obstacle => false,
        }
    }

    /// Returns the paint color, if this is an ordinary cell.
    pub fn color(self) -> Option<Color> {
        match self {
            Cell::Paint(color) => Some(color),
            Cell::Goal | Cell::Obstacle => None,
        }
    }
}

/// A grid coordinate. `x` is the column, `y` is the row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Position {
    /// Column, counted from the left edge.
    pub x: usize,
    /// Row, counted from the top edge.
    pub y: usize,
}

impl Position {
    /// The start cell.
    pub const ORIGIN: Position = Position { x: 0, y: 0 };

    /// Creates a position.
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// Steps one cell in `direction`.
    ///
    /// Returns `None` when the step would leave the grid on the top or left
    /// edge; callers bound-check the bottom and right edges against the grid.
    pub fn step(self, direction: Direction) -> Option<Self> {
        let (dx, dy) = direction.vector();
        Some(Self {
            x: self.x.checked_add_signed(dx)?,
            y: self.y.checked_add_signed(dy)?,
        })
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// One of the four orthogonal move directions.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter, strum::Display,
)]
pub enum Direction {
    /// Towards row 0.
    Up,
    /// Away from row 0.
    Down,
    /// Towards column 0.
    Left,
    /// Away from column 0.
    Right,
}

impl Direction {
    /// Unit step as `(dx, dy)`.
    pub fn vector(self) -> (isize, isize) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_palette_follows_declaration_order() {
        assert_eq!(Color::iter().collect::<Vec<_>>(), PALETTE);
        assert_eq!(Direction::iter().count(), 4);
    }

    #[test]
    fn test_next_wraps_to_first() {
        assert_eq!(Color::Red.next(), Color::Green);
        assert_eq!(Color::Blue.next(), Color::Yellow);
        assert_eq!(Color::Yellow.next(), Color::Red);
    }

    #[test]
    fn test_step_off_top_left_edge() {
        assert_eq!(Position::ORIGIN.step(Direction::Up), None);
        assert_eq!(Position::ORIGIN.step(Direction::Left), None);
        assert_eq!(
            Position::ORIGIN.step(Direction::Right),
            Some(Position::new(1, 0))
        );
        assert_eq!(
            Position::ORIGIN.step(Direction::Down),
            Some(Position::new(0, 1))
        );
    }

    #[test]
    fn test_goal_admits_every_color() {
        for color in PALETTE {
            assert!(Cell::Goal.admits(color));
            assert!(!Cell::Obstacle.admits(color));
        }
        assert!(Cell::Paint(Color::Blue).admits(Color::Blue));
        assert!(!Cell::Paint(Color::Blue).admits(Color::Red));
    }
}
