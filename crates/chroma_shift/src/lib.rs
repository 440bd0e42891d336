//! Chroma Shift - terminal front end and session runtime.
//!
//! Wraps the pure rules in `chroma_core` with everything needed to play:
//!
//! - **Config**: TOML settings with command-line overrides
//! - **Session**: the event loop, the cancellable tick timer, and the
//!   render-sink seam
//! - **TUI**: crossterm input subscription and ratatui drawing

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod logging;
mod session;
mod tui;

// Crate-level exports - Configuration
pub use config::{ConfigError, DEFAULT_CONFIG_PATH, GameSettings};

// Crate-level exports - Logging
pub use logging::init_file_logging;

// Crate-level exports - Session runtime
pub use session::{Command, Flow, RenderSink, SessionController, SessionEvent, TickTimer};

// Crate-level exports - Terminal UI
pub use tui::{InputSubscription, command_for, run_tui};
