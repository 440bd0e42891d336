//! The square cell grid and its layout parameters.

use crate::error::LayoutError;
use crate::types::{Cell, Color, Position};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Side length of the default grid.
pub const DEFAULT_GRID_SIZE: usize = 10;

/// Number of obstacles scattered on the default grid.
pub const DEFAULT_OBSTACLE_COUNT: usize = 20;

/// Largest side length a layout accepts.
pub const MAX_GRID_SIZE: usize = 256;

/// Validated grid dimensions: side length and obstacle count.
///
/// The obstacle count never exceeds the number of cells that are neither
/// the start nor the goal, so obstacle placement always terminates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(try_from = "LayoutFields")]
pub struct GridLayout {
    /// Side length of the square grid.
    size: usize,
    /// Exact number of obstacle cells.
    obstacle_count: usize,
}

impl GridLayout {
    /// Creates a layout.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError`] if `size` is outside `2..=MAX_GRID_SIZE` or if
    /// there are more obstacles than cells available to hold them.
    #[instrument]
    pub fn new(size: usize, obstacle_count: usize) -> Result<Self, LayoutError> {
        if !(2..=MAX_GRID_SIZE).contains(&size) {
            return Err(LayoutError::new(format!(
                "Grid size must be between 2 and {}, got {}",
                MAX_GRID_SIZE, size
            )));
        }
        let free = size
            .checked_mul(size)
            .and_then(|cells| cells.checked_sub(2))
            .ok_or_else(|| LayoutError::new(format!("Grid size {} overflows", size)))?;
        if obstacle_count > free {
            return Err(LayoutError::new(format!(
                "{} obstacles do not fit on a {}x{} grid ({} free cells)",
                obstacle_count, size, size, free
            )));
        }
        Ok(Self {
            size,
            obstacle_count,
        })
    }

    /// Start cell, always the top-left corner.
    pub fn start(&self) -> Position {
        Position::ORIGIN
    }

    /// Goal cell, always the bottom-right corner.
    pub fn goal(&self) -> Position {
        Position::new(self.size - 1, self.size - 1)
    }
}

/// Unvalidated layout fields as they appear in serialized form.
#[derive(Deserialize)]
struct LayoutFields {
    size: usize,
    obstacle_count: usize,
}

impl TryFrom<LayoutFields> for GridLayout {
    type Error = LayoutError;

    fn try_from(fields: LayoutFields) -> Result<Self, Self::Error> {
        Self::new(fields.size, fields.obstacle_count)
    }
}

impl Default for GridLayout {
    fn default() -> Self {
        Self {
            size: DEFAULT_GRID_SIZE,
            obstacle_count: DEFAULT_OBSTACLE_COUNT,
        }
    }
}

/// Square grid of cells in row-major order.
///
/// Grids are immutable once built; a new session builds a new grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Grid {
    size: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Builds a grid from raw row-major cells. Callers guarantee the shape.
    pub(crate) fn from_cells(size: usize, cells: Vec<Cell>) -> Self {
        debug_assert_eq!(cells.len(), size * size);
        Self { size, cells }
    }

    /// Builds a grid from explicit rows, top row first.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError`] if the rows do not form a square of side at
    /// least 2, or if the single goal cell is not in the bottom-right corner.
    #[instrument(skip(rows), fields(rows = rows.len()))]
    pub fn from_rows(rows: Vec<Vec<Cell>>) -> Result<Self, LayoutError> {
        let size = rows.len();
        if size < 2 {
            return Err(LayoutError::new(format!(
                "Grid needs at least 2 rows, got {}",
                size
            )));
        }
        if let Some((y, row)) = rows.iter().enumerate().find(|(_, r)| r.len() != size) {
            return Err(LayoutError::new(format!(
                "Row {} has {} cells, expected {}",
                y,
                row.len(),
                size
            )));
        }

        let cells: Vec<Cell> = rows.into_iter().flatten().collect();
        let grid = Self::from_cells(size, cells);

        let goals = grid.cells.iter().filter(|c| **c == Cell::Goal).count();
        if goals != 1 || grid.get(grid.goal()) != Some(Cell::Goal) {
            return Err(LayoutError::new(
                "Grid must have exactly one goal, in the bottom-right corner",
            ));
        }
        if grid.get(Position::ORIGIN) == Some(Cell::Obstacle) {
            return Err(LayoutError::new("Start cell cannot be an obstacle"));
        }
        Ok(grid)
    }

    /// Side length.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Goal position (bottom-right corner).
    pub fn goal(&self) -> Position {
        Position::new(self.size - 1, self.size - 1)
    }

    /// Returns true if `pos` lies on the grid.
    pub fn contains(&self, pos: Position) -> bool {
        pos.x < self.size && pos.y < self.size
    }

    /// Gets the cell at `pos`, or `None` off the grid.
    pub fn get(&self, pos: Position) -> Option<Cell> {
        if self.contains(pos) {
            Some(self.cells[pos.y * self.size + pos.x])
        } else {
            None
        }
    }

    /// Returns true if a player wearing `color` may enter `pos`.
    pub fn admits(&self, pos: Position, color: Color) -> bool {
        self.get(pos).is_some_and(|cell| cell.admits(color))
    }

    /// Iterates over rows, top first.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(self.size)
    }

    /// Number of obstacle cells.
    pub fn obstacle_count(&self) -> usize {
        self.cells.iter().filter(|c| **c == Cell::Obstacle).count()
    }

    /// Formats the grid as text, one character per cell.
    ///
    /// `R`, `G`, `B`, `Y` are paint colors, `#` is an obstacle, `*` the goal.
    pub fn display(&self) -> String {
        let mut result = String::with_capacity(self.size * (self.size + 1));
        for row in self.rows() {
            for cell in row {
                result.push(match cell {
                    Cell::Paint(Color::Red) => 'R',
                    Cell::Paint(Color::Green) => 'G',
                    Cell::Paint(Color::Blue) => 'B',
                    Cell::Paint(Color::Yellow) => 'Y',
                    Cell::Obstacle => '#',
                    Cell::Goal => '*',
                });
            }
            result.push('\n');
        }
        result
    }
}
