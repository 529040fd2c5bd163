//! State management module
//!
//! The timer's data model and the host-side slot that holds the current value.

pub mod app_state;
pub mod phase;
pub mod settings;
pub mod timer_state;

// Re-export main types
pub use app_state::{AppState, ServerInfo};
pub use phase::Phase;
pub use settings::TimerSettings;
pub use timer_state::TimerState;
