//! Session runtime.
//!
//! The [`SessionController`] owns the game and a single event channel.
//! Keyboard input and the [`TickTimer`] both feed that channel, so every
//! state change happens on one task, one event at a time.

mod controller;
mod events;
mod sink;
mod timer;

pub use controller::{Flow, SessionController};
pub use events::{Command, SessionEvent};
pub use sink::RenderSink;
pub use timer::TickTimer;
