//! Timer phases and the order they follow each other in

use serde::{Deserialize, Serialize};

use super::TimerSettings;

/// Mutually exclusive modes of the timer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Phase {
    Work,
    ShortBreak,
    LongBreak,
    /// Nothing has been started yet
    Idle,
}

impl Phase {
    /// Configured length of a fresh instance of this phase
    pub fn default_seconds(self, settings: &TimerSettings) -> u64 {
        match self {
            Phase::Work | Phase::Idle => settings.work_seconds,
            Phase::ShortBreak => settings.short_break_seconds,
            Phase::LongBreak => settings.long_break_seconds,
        }
    }

    /// Phase that follows once this one completes.
    ///
    /// `completed_work_count` is the count *before* the completion is recorded,
    /// so every `cycle_length`-th finished work phase is followed by a long break.
    pub fn next(self, completed_work_count: u64, settings: &TimerSettings) -> Phase {
        match self {
            Phase::Work => {
                let cycle_length = settings.cycle_length.max(1);
                if completed_work_count % cycle_length == cycle_length - 1 {
                    Phase::LongBreak
                } else {
                    Phase::ShortBreak
                }
            }
            Phase::ShortBreak | Phase::LongBreak | Phase::Idle => Phase::Work,
        }
    }

    pub fn is_break(self) -> bool {
        matches!(self, Phase::ShortBreak | Phase::LongBreak)
    }

    pub fn label(self) -> &'static str {
        match self {
            Phase::Work => "work",
            Phase::ShortBreak => "short break",
            Phase::LongBreak => "long break",
            Phase::Idle => "idle",
        }
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
