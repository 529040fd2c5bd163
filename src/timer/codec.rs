//! Conversion between timer state and its persisted string form

use thiserror::Error;
use tracing::{debug, error, warn};

use crate::state::{TimerSettings, TimerState};

/// Why a persisted string could not be turned back into a timer state
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("malformed timer payload: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("timer payload violates state invariants: {0}")]
    InvariantViolation(String),
}

/// Serialize a state for storage.
///
/// `TimerState` holds only integers, booleans and a unit enum, none of which
/// serde_json can fail on. Hosts writing to storage should still prefer
/// [`try_encode`] so an error can never look like the empty sentinel.
pub fn encode(state: &TimerState) -> String {
    try_encode(state).unwrap_or_else(|e| {
        error!("Failed to encode timer state {:?}: {}", state, e);
        String::new()
    })
}

/// Serialize a state, reporting serializer errors instead of hiding them
pub fn try_encode(state: &TimerState) -> Result<String, serde_json::Error> {
    serde_json::to_string(state)
}

/// Parse a stored string.
///
/// An empty (or whitespace-only) string is the "nothing saved yet" sentinel
/// and decodes to `Ok(None)`.
pub fn decode(raw: &str) -> Result<Option<TimerState>, DecodeError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(None);
    }

    let state: TimerState = serde_json::from_str(raw)?;
    state.check_invariants().map_err(DecodeError::InvariantViolation)?;
    Ok(Some(state))
}

/// Startup state from whatever the storage slot held.
///
/// A missing value, the empty sentinel and undecodable payloads all fall back
/// to [`TimerState::initial`].
pub fn restore(raw: Option<&str>, settings: &TimerSettings) -> TimerState {
    match decode(raw.unwrap_or_default()) {
        Ok(Some(state)) => {
            debug!("Restored timer state: {:?}", state);
            state
        }
        Ok(None) => {
            debug!("No saved timer state, starting fresh");
            TimerState::initial(settings)
        }
        Err(e) => {
            warn!("Discarding saved timer state: {}", e);
            TimerState::initial(settings)
        }
    }
}
