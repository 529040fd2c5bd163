//! Timer core
//!
//! The engine (pure transitions) and the codec (persisted string form). Neither
//! performs I/O; the host in [`crate::state::AppState`] carries out effects.

pub mod codec;
pub mod engine;

pub use codec::{decode, encode, restore, try_encode, DecodeError};
pub use engine::{apply, Effect, Input};
