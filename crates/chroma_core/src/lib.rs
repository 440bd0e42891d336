//! Chroma Shift core - grid generation and move validation.
//!
//! A player token starts in the top-left corner of a square grid of painted
//! cells and must reach the goal in the bottom-right corner. A move is only
//! accepted onto a cell painted in the player's current color (or onto the
//! goal, which matches every color). Cycling through the palette is how the
//! player changes color.
//!
//! # Architecture
//!
//! - **Generator**: paints a fresh [`Grid`] for each session
//! - **Game**: the [`ChromaGame`] state machine (`Idle`, `Playing`, `Won`)
//! - **View**: a borrowed [`GameView`] handed to renderers
//!
//! # Example
//!
//! ```
//! use chroma_core::{ChromaGame, Direction, GridLayout, PlayerAction, RandomGridGenerator};
//!
//! # fn example() -> Result<(), chroma_core::LayoutError> {
//! let layout = GridLayout::new(10, 20)?;
//! let mut game = ChromaGame::new(layout, RandomGridGenerator::from_seed(7));
//! game.start();
//! game.apply(PlayerAction::CycleColor);
//! game.apply(PlayerAction::Move(Direction::Right));
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod best_times;
mod error;
mod game;
mod generator;
mod grid;
mod types;
mod view;

pub use action::{ActionOutcome, PlayerAction};
pub use best_times::{BestTimes, DEFAULT_BEST_TIMES_CAPACITY};
pub use error::LayoutError;
pub use game::{ChromaGame, DEFAULT_TICK, GamePhase, PlayerState, Session};
pub use generator::{FixedGridGenerator, GridGenerator, RandomGridGenerator};
pub use grid::{DEFAULT_GRID_SIZE, DEFAULT_OBSTACLE_COUNT, Grid, GridLayout, MAX_GRID_SIZE};
pub use types::{Cell, Color, Direction, PALETTE, Position};
pub use view::GameView;
