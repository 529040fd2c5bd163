//! Host-side application state: the single timer slot and its effect executors

use std::{sync::Mutex as StdMutex, time::Instant};
use chrono::{DateTime, Utc};
use tokio::sync::{watch, Mutex};
use tracing::{debug, error, info};

use super::{TimerSettings, TimerState};
use crate::{
    services::{SoundPlayer, Storage},
    timer::{apply, restore, try_encode, Effect, Input},
};

/// Server metadata reported by the status endpoint
#[derive(Debug, Clone)]
pub struct ServerInfo {
    pub host: String,
    pub port: u16,
    /// Viewport flags from the command line; reported only, the timer ignores them
    pub viewport_width: u32,
    pub viewport_height: u32,
}

/// Main application state owning the current timer value
#[derive(Debug)]
pub struct AppState {
    /// The one place the current timer lives. Held across effect execution so
    /// persisted snapshots keep the order of transitions.
    timer: Mutex<TimerState>,
    pub settings: TimerSettings,
    storage: Storage,
    sound: SoundPlayer,
    /// Server metadata
    pub server: ServerInfo,
    pub start_time: Instant,
    /// Last action tracking
    pub last_action: StdMutex<Option<String>>,
    pub last_action_time: StdMutex<Option<DateTime<Utc>>>,
    /// Channel for timer updates
    pub timer_update_tx: watch::Sender<TimerState>,
    /// Keep the receiver alive to prevent channel closure
    pub _timer_update_rx: watch::Receiver<TimerState>,
}

impl AppState {
    /// Create an AppState around an already restored timer
    pub fn new(
        server: ServerInfo,
        settings: TimerSettings,
        initial: TimerState,
        storage: Storage,
        sound: SoundPlayer,
    ) -> Self {
        let (timer_update_tx, timer_update_rx) = watch::channel(initial);

        Self {
            timer: Mutex::new(initial),
            settings,
            storage,
            sound,
            server,
            start_time: Instant::now(),
            last_action: StdMutex::new(None),
            last_action_time: StdMutex::new(None),
            timer_update_tx,
            _timer_update_rx: timer_update_rx,
        }
    }

    /// Create an AppState from whatever the storage slot holds
    pub async fn load(
        server: ServerInfo,
        settings: TimerSettings,
        storage: Storage,
        sound: SoundPlayer,
    ) -> Self {
        let raw = storage.load().await;
        let initial = restore(raw.as_deref(), &settings);
        info!(
            "Timer restored: phase={}, remaining={}, running={}, completed work phases={}",
            initial.phase,
            initial.formatted_remaining(),
            initial.running,
            initial.completed_work_count
        );
        Self::new(server, settings, initial, storage, sound)
    }

    /// Run one input through the engine and carry out the resulting effect
    pub async fn dispatch(&self, input: Input) -> TimerState {
        let mut timer = self.timer.lock().await;

        let (next, effect) = apply(&timer, input, &self.settings);
        *timer = next;

        match effect {
            Some(Effect::Persist(snapshot)) => {
                self.persist(&snapshot).await;
            }
            Some(Effect::PlaySound) => {
                info!("Phase complete, {} is up next", next.phase);
                self.persist(&next).await;
                self.sound.play();
            }
            None => {
                debug!("{} left the timer unchanged", input.name());
            }
        }

        // Broadcast under the lock so watchers see updates in transition order
        if effect.is_some() {
            self.timer_update_tx.send_replace(next);
        }
        drop(timer);

        next
    }

    /// Save a snapshot; on an encoding error the previous value stays in place
    async fn persist(&self, snapshot: &TimerState) {
        match try_encode(snapshot) {
            Ok(raw) => self.storage.save(&raw).await,
            Err(e) => error!("Failed to encode timer, keeping previous save: {}", e),
        }
    }

    /// Dispatch a user command and record it as the last action
    pub async fn command(&self, input: Input) -> TimerState {
        info!("Timer command: {}", input.name());

        if let Ok(mut last_action) = self.last_action.lock() {
            *last_action = Some(input.name().to_string());
        }
        if let Ok(mut last_time) = self.last_action_time.lock() {
            *last_time = Some(Utc::now());
        }

        self.dispatch(input).await
    }

    /// Get current timer state
    pub async fn get_timer_state(&self) -> TimerState {
        *self.timer.lock().await
    }

    /// Watch every state change
    pub fn subscribe(&self) -> watch::Receiver<TimerState> {
        self.timer_update_tx.subscribe()
    }

    /// Calculate server uptime as a formatted string
    pub fn get_uptime(&self) -> String {
        let duration = self.start_time.elapsed();
        let hours = duration.as_secs() / 3600;
        let minutes = (duration.as_secs() % 3600) / 60;
        let seconds = duration.as_secs() % 60;

        if hours > 0 {
            format!("{}h {}m {}s", hours, minutes, seconds)
        } else if minutes > 0 {
            format!("{}m {}s", minutes, seconds)
        } else {
            format!("{}s", seconds)
        }
    }

    /// Get last action information
    pub fn get_last_action(&self) -> (Option<String>, Option<DateTime<Utc>>) {
        let last_action = self.last_action.lock().ok().and_then(|a| a.clone());
        let last_action_time = self.last_action_time.lock().ok().and_then(|t| *t);
        (last_action, last_action_time)
    }
}
