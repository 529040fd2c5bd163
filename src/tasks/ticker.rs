//! Clock task that feeds elapsed time into the timer

use std::{sync::Arc, time::Duration};
use tokio::{
    sync::watch,
    time::{interval, Instant, MissedTickBehavior},
};
use tracing::{debug, info};

use crate::{
    state::{AppState, TimerState},
    timer::Input,
};

const TICK_PERIOD: Duration = Duration::from_secs(1);

/// Background task that ticks the timer once a second while it is running
pub async fn ticker_task(state: Arc<AppState>) {
    info!("Starting ticker task");

    let mut updates = state.subscribe();

    loop {
        let running = updates.borrow_and_update().running;
        if running {
            countdown(&state, &mut updates).await;
            continue;
        }

        // Paused, wait for someone to start the timer
        if updates.changed().await.is_err() {
            info!("Timer channel closed, stopping ticker task");
            return;
        }
    }
}

/// Tick until the timer stops running
async fn countdown(state: &AppState, updates: &mut watch::Receiver<TimerState>) {
    debug!("Countdown started");

    let mut interval = interval(TICK_PERIOD);
    interval.set_missed_tick_behavior(MissedTickBehavior::Skip);
    // The first tick completes immediately
    interval.tick().await;

    let mut last = Instant::now();
    let mut carry = Duration::ZERO;

    loop {
        tokio::select! {
            _ = interval.tick() => {
                let now = Instant::now();
                let seconds = take_whole_seconds(&mut carry, now - last);
                last = now;
                if seconds == 0 {
                    continue;
                }

                // A late wake-up arrives as one large tick
                if seconds > 1 {
                    debug!("Clock resumed late, delivering {}s at once", seconds);
                }

                let next = state.dispatch(Input::Tick(seconds)).await;

                // Our own update is marked seen here, so `changed` only wakes for commands
                let latest = *updates.borrow_and_update();
                if !latest.running {
                    debug!("Countdown stopped at {}", latest.formatted_remaining());
                    return;
                }
                if latest != next {
                    last = Instant::now();
                    carry = Duration::ZERO;
                }
            }

            changed = updates.changed() => {
                if changed.is_err() {
                    return;
                }
                if !updates.borrow_and_update().running {
                    debug!("Countdown paused");
                    return;
                }
                // Still running: a pause and restart coalesced, count from the restart
                last = Instant::now();
                carry = Duration::ZERO;
            }
        }
    }
}

/// Add `elapsed` to `carry` and take out the whole seconds
fn take_whole_seconds(carry: &mut Duration, elapsed: Duration) -> u64 {
    *carry += elapsed;
    let seconds = carry.as_secs();
    *carry -= Duration::from_secs(seconds);
    seconds
}
