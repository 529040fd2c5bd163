//! Pure transition function of the Pomodoro timer
//!
//! The engine knows nothing about wall-clock time, storage or audio. The host
//! hands it elapsed-second deltas and user commands, and gets back the next
//! state plus at most one effect request to carry out.

use tracing::debug;

use crate::state::{Phase, TimerSettings, TimerState};

/// Everything that can drive the timer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    /// Whole seconds elapsed since the previous tick
    Tick(u64),
    Start,
    Pause,
    Reset,
    /// Complete the current phase immediately
    Skip,
}

impl Input {
    pub fn name(&self) -> &'static str {
        match self {
            Input::Tick(_) => "tick",
            Input::Start => "start",
            Input::Pause => "pause",
            Input::Reset => "reset",
            Input::Skip => "skip",
        }
    }
}

/// Side-effect request for the host
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// Store this snapshot
    Persist(TimerState),
    /// A phase completed; ring the bell. The returned state must still be persisted.
    PlaySound,
}

/// Apply one input to `state`.
///
/// Returns `None` as the effect when the input left the state untouched.
pub fn apply(state: &TimerState, input: Input, settings: &TimerSettings) -> (TimerState, Option<Effect>) {
    let current = *state;

    let next = match input {
        Input::Tick(elapsed) => {
            if !current.running || elapsed == 0 {
                return (current, None);
            }
            // Surplus time past the boundary is dropped; one boundary per call.
            let remaining_seconds = current.remaining_seconds.saturating_sub(elapsed);
            if remaining_seconds == 0 {
                return complete(&current, settings);
            }
            TimerState { remaining_seconds, ..current }
        }
        Input::Start => {
            if current.running || current.remaining_seconds == 0 {
                return (current, None);
            }
            match current.phase {
                Phase::Idle => TimerState {
                    running: true,
                    ..TimerState::fresh(Phase::Work, current.completed_work_count, settings)
                },
                _ => TimerState { running: true, ..current },
            }
        }
        Input::Pause => TimerState { running: false, ..current },
        Input::Reset => TimerState {
            remaining_seconds: current.total_seconds,
            running: false,
            ..current
        },
        Input::Skip => return complete(&current, settings),
    };

    if next == current {
        (current, None)
    } else {
        (next, Some(Effect::Persist(next)))
    }
}

fn complete(state: &TimerState, settings: &TimerSettings) -> (TimerState, Option<Effect>) {
    let next_phase = state.phase.next(state.completed_work_count, settings);
    let completed_work_count = if state.phase == Phase::Work {
        state.completed_work_count.saturating_add(1)
    } else {
        state.completed_work_count
    };

    debug!(
        "Phase {} complete, next phase {} (completed work phases: {})",
        state.phase, next_phase, completed_work_count
    );

    (
        TimerState::fresh(next_phase, completed_work_count, settings),
        Some(Effect::PlaySound),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings() -> TimerSettings {
        TimerSettings::default()
    }

    fn running_work(remaining_seconds: u64, completed_work_count: u64) -> TimerState {
        TimerState {
            phase: Phase::Work,
            remaining_seconds,
            total_seconds: 25 * 60,
            running: true,
            completed_work_count,
        }
    }

    #[test]
    fn tick_counts_down_and_persists() {
        let state = running_work(100, 0);
        let (next, effect) = apply(&state, Input::Tick(1), &settings());
        assert_eq!(next.remaining_seconds, 99);
        assert!(next.running);
        assert_eq!(effect, Some(Effect::Persist(next)));
    }

    #[test]
    fn tick_while_paused_changes_nothing() {
        let state = TimerState { running: false, ..running_work(100, 0) };
        assert_eq!(apply(&state, Input::Tick(30), &settings()), (state, None));
    }

    #[test]
    fn zero_tick_is_ignored() {
        let state = running_work(100, 0);
        assert_eq!(apply(&state, Input::Tick(0), &settings()), (state, None));
    }

    #[test]
    fn overshooting_tick_clamps_and_completes_once() {
        let state = running_work(5, 0);
        let (next, effect) = apply(&state, Input::Tick(20), &settings());
        assert_eq!(next.phase, Phase::ShortBreak);
        assert_eq!(next.remaining_seconds, 5 * 60);
        assert_eq!(next.total_seconds, 5 * 60);
        assert!(!next.running);
        assert_eq!(next.completed_work_count, 1);
        assert_eq!(effect, Some(Effect::PlaySound));
    }

    #[test]
    fn huge_tick_crosses_a_single_boundary() {
        let state = running_work(5, 0);
        let (next, _) = apply(&state, Input::Tick(10 * 60 * 60), &settings());
        assert_eq!(next.phase, Phase::ShortBreak);
        assert_eq!(next.remaining_seconds, next.total_seconds);
    }

    #[test]
    fn fourth_work_phase_selects_long_break() {
        let (next, effect) = apply(&running_work(1, 3), Input::Tick(1), &settings());
        assert_eq!(next.phase, Phase::LongBreak);
        assert_eq!(next.completed_work_count, 4);
        assert_eq!(next.total_seconds, 15 * 60);
        assert_eq!(effect, Some(Effect::PlaySound));

        let (next, _) = apply(&running_work(1, 2), Input::Skip, &settings());
        assert_eq!(next.phase, Phase::ShortBreak);
        assert_eq!(next.completed_work_count, 3);
    }

    #[test]
    fn work_count_saturates_instead_of_overflowing() {
        let (next, effect) = apply(&running_work(10, u64::MAX), Input::Skip, &settings());
        assert_eq!(next.completed_work_count, u64::MAX);
        assert_eq!(next.phase, Phase::LongBreak);
        assert_eq!(effect, Some(Effect::PlaySound));
    }

    #[test]
    fn leaving_a_break_does_not_count_work() {
        let state = TimerState::fresh(Phase::LongBreak, 4, &settings());
        let (next, effect) = apply(&state, Input::Skip, &settings());
        assert_eq!(next.phase, Phase::Work);
        assert_eq!(next.completed_work_count, 4);
        assert_eq!(effect, Some(Effect::PlaySound));
    }

    #[test]
    fn start_from_idle_begins_work() {
        let state = TimerState::initial(&settings());
        let (next, effect) = apply(&state, Input::Start, &settings());
        assert_eq!(next.phase, Phase::Work);
        assert!(next.running);
        assert_eq!(next.remaining_seconds, 25 * 60);
        assert_eq!(effect, Some(Effect::Persist(next)));
    }

    #[test]
    fn start_with_nothing_remaining_is_a_no_op() {
        let state = TimerState { remaining_seconds: 0, running: false, ..running_work(0, 0) };
        let (next, effect) = apply(&state, Input::Start, &settings());
        assert!(!next.running);
        assert_eq!(next, state);
        assert_eq!(effect, None);
    }

    #[test]
    fn start_while_running_is_a_no_op() {
        let state = running_work(10, 0);
        assert_eq!(apply(&state, Input::Start, &settings()), (state, None));
    }

    #[test]
    fn pause_is_idempotent() {
        let state = running_work(10, 0);
        let (paused, effect) = apply(&state, Input::Pause, &settings());
        assert!(!paused.running);
        assert_eq!(effect, Some(Effect::Persist(paused)));

        let (again, effect) = apply(&paused, Input::Pause, &settings());
        assert_eq!(again, paused);
        assert_eq!(effect, None);
    }

    #[test]
    fn reset_restores_full_phase_and_pauses() {
        let state = running_work(10, 2);
        let (reset, effect) = apply(&state, Input::Reset, &settings());
        assert_eq!(reset.remaining_seconds, reset.total_seconds);
        assert!(!reset.running);
        assert_eq!(reset.phase, Phase::Work);
        assert_eq!(reset.completed_work_count, 2);
        assert_eq!(effect, Some(Effect::Persist(reset)));

        assert_eq!(apply(&reset, Input::Reset, &settings()), (reset, None));
    }

    #[test]
    fn skip_from_idle_goes_to_work() {
        let state = TimerState::initial(&settings());
        let (next, effect) = apply(&state, Input::Skip, &settings());
        assert_eq!(next.phase, Phase::Work);
        assert!(!next.running);
        assert_eq!(next.completed_work_count, 0);
        assert_eq!(effect, Some(Effect::PlaySound));
    }

    #[test]
    fn skip_on_paused_phase_still_completes() {
        let state = TimerState { running: false, ..running_work(600, 0) };
        let (next, effect) = apply(&state, Input::Skip, &settings());
        assert_eq!(next.phase, Phase::ShortBreak);
        assert_eq!(effect, Some(Effect::PlaySound));
    }
}
