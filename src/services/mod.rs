//! Host services that carry out timer effects
//!
//! Persistence of the encoded timer and playback of the notification bell.
//! Both are best-effort: failures are logged here and never reach the timer core.

pub mod sound;
pub mod storage;

// Re-export main types
pub use sound::SoundPlayer;
pub use storage::{Storage, STORAGE_KEY};
