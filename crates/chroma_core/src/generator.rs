//! Grid generation strategies.

use crate::grid::{Grid, GridLayout};
use crate::types::{Cell, PALETTE, Position};
use rand::{Rng, SeedableRng, rngs::StdRng};
use tracing::{debug, instrument};

/// Produces a fresh grid for each session.
pub trait GridGenerator: Send {
    /// Generates a grid for `layout`.
    fn generate(&mut self, layout: &GridLayout) -> Grid;
}

/// Uniformly random painting with rejection-sampled obstacles.
///
/// No reachability check is made: a generated grid may have no path from
/// the start to the goal.
#[derive(Debug, Clone)]
pub struct RandomGridGenerator {
    rng: StdRng,
    seed: Option<u64>,
}

impl RandomGridGenerator {
    /// Creates a generator seeded from the operating system.
    #[instrument]
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
            seed: None,
        }
    }

    /// Creates a generator with a fixed seed, for reproducible grids.
    #[instrument]
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            seed: Some(seed),
        }
    }

    /// The fixed seed, if one was given.
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }
}

impl Default for RandomGridGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl GridGenerator for RandomGridGenerator {
    #[instrument(skip(self), fields(seed = ?self.seed))]
    fn generate(&mut self, layout: &GridLayout) -> Grid {
        let size = *layout.size();
        let mut cells: Vec<Cell> = (0..size * size)
            .map(|_| Cell::Paint(PALETTE[self.rng.random_range(0..PALETTE.len())]))
            .collect();

        let goal = layout.goal();
        cells[goal.y * size + goal.x] = Cell::Goal;

        let mut placed = 0;
        let mut attempts = 0u64;
        while placed < *layout.obstacle_count() {
            attempts += 1;
            let pos = Position::new(
                self.rng.random_range(0..size),
                self.rng.random_range(0..size),
            );
            if pos == layout.start() || pos == goal {
                continue;
            }
            let index = pos.y * size + pos.x;
            if cells[index] == Cell::Obstacle {
                continue;
            }
            cells[index] = Cell::Obstacle;
            placed += 1;
        }

        debug!(size, obstacles = placed, attempts, "Grid generated");
        Grid::from_cells(size, cells)
    }
}

/// Always hands out the same grid. Useful for scripted sessions and tests.
#[derive(Debug, Clone)]
pub struct FixedGridGenerator {
    grid: Grid,
}

impl FixedGridGenerator {
    /// Creates a generator that always yields `grid`.
    pub fn new(grid: Grid) -> Self {
        Self { grid }
    }
}

impl GridGenerator for FixedGridGenerator {
    fn generate(&mut self, _layout: &GridLayout) -> Grid {
        self.grid.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_seed_same_grid() {
        let layout = GridLayout::default();
        let a = RandomGridGenerator::from_seed(42).generate(&layout);
        let b = RandomGridGenerator::from_seed(42).generate(&layout);
        assert_eq!(a, b);
    }

    #[test]
    fn test_fully_blocked_layout_terminates() {
        let layout = GridLayout::new(3, 7).expect("7 obstacles fit on 3x3");
        let grid = RandomGridGenerator::from_seed(1).generate(&layout);
        assert_eq!(grid.obstacle_count(), 7);
        assert!(grid.get(Position::ORIGIN).and_then(Cell::color).is_some());
    }
}
