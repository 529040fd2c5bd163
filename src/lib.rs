//! Elmodoro - A Pomodoro timer with persisted progress
//!
//! The timer core is a pure state machine plus a string codec for its state.
//! The host around it ticks the clock, persists each new state to a file and
//! rings a bell whenever a phase completes.

pub mod api;
pub mod config;
pub mod services;
pub mod state;
pub mod tasks;
pub mod timer;
pub mod utils;

// Re-export commonly used types
pub use api::create_router;
pub use config::Config;
pub use state::{AppState, Phase, TimerSettings, TimerState};
pub use timer::{apply, decode, encode, DecodeError, Effect, Input};
pub use utils::signals::shutdown_signal;
