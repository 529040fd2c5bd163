//! Timer state structure and its invariants

use serde::{Deserialize, Serialize};

use super::{Phase, TimerSettings};

/// Full state of the Pomodoro timer.
///
/// Only the engine produces new values; everything else treats a `TimerState`
/// as an immutable snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct TimerState {
    pub phase: Phase,
    pub remaining_seconds: u64,
    /// Length of the current phase instance, fixed when the phase starts
    pub total_seconds: u64,
    pub running: bool,
    pub completed_work_count: u64,
}

impl TimerState {
    /// Paused Idle state with a full work duration on the clock
    pub fn initial(settings: &TimerSettings) -> Self {
        Self::fresh(Phase::Idle, 0, settings)
    }

    /// A paused, untouched instance of `phase`
    pub fn fresh(phase: Phase, completed_work_count: u64, settings: &TimerSettings) -> Self {
        let total_seconds = phase.default_seconds(settings).max(1);
        Self {
            phase,
            remaining_seconds: total_seconds,
            total_seconds,
            running: false,
            completed_work_count,
        }
    }

    /// Fraction of the current phase already elapsed, in `[0, 1]`
    pub fn progress(&self) -> f64 {
        if self.total_seconds == 0 {
            return 0.0;
        }
        1.0 - self.remaining_seconds as f64 / self.total_seconds as f64
    }

    /// Check the structural invariants, returning the first one broken
    pub fn check_invariants(&self) -> Result<(), String> {
        if self.total_seconds == 0 {
            return Err("total seconds must be positive".to_string());
        }
        if self.remaining_seconds > self.total_seconds {
            return Err(format!(
                "remaining seconds {} exceed total seconds {}",
                self.remaining_seconds, self.total_seconds
            ));
        }
        if self.running && self.remaining_seconds == 0 {
            return Err("timer cannot run with no time remaining".to_string());
        }
        Ok(())
    }

    pub fn is_valid(&self) -> bool {
        self.check_invariants().is_ok()
    }

    /// Remaining time as `MM:SS`
    pub fn formatted_remaining(&self) -> String {
        format!("{:02}:{:02}", self.remaining_seconds / 60, self.remaining_seconds % 60)
    }
}
