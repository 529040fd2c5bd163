//! API response structures

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::state::{Phase, TimerState};

/// Timer as shown to clients
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimerView {
    pub phase: Phase,
    pub phase_label: String,
    pub remaining_seconds: u64,
    pub total_seconds: u64,
    /// Remaining time as `MM:SS`
    pub remaining: String,
    pub progress: f64,
    pub running: bool,
    pub completed_work_count: u64,
}

impl From<TimerState> for TimerView {
    fn from(state: TimerState) -> Self {
        Self {
            phase: state.phase,
            phase_label: state.phase.label().to_string(),
            remaining_seconds: state.remaining_seconds,
            total_seconds: state.total_seconds,
            remaining: state.formatted_remaining(),
            progress: state.progress(),
            running: state.running,
            completed_work_count: state.completed_work_count,
        }
    }
}

/// API response structure for timer command endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse {
    pub status: String,
    pub message: String,
    pub timestamp: DateTime<Utc>,
    pub timer: TimerView,
}

impl ApiResponse {
    /// Create a new API response
    pub fn new(message: String, timer: TimerState) -> Self {
        Self {
            status: if timer.running { "running" } else { "paused" }.to_string(),
            message,
            timestamp: Utc::now(),
            timer: timer.into(),
        }
    }
}

/// Viewport size passed in on the command line
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

/// Status response with timer and server information
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusResponse {
    pub timer: TimerView,
    pub cycle_length: u64,
    pub uptime: String,
    pub port: u16,
    pub host: String,
    pub viewport: Viewport,
    pub last_action: Option<String>,
    pub last_action_time: Option<DateTime<Utc>>,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub version: String,
}

impl HealthResponse {
    /// Create a new health response
    pub fn ok() -> Self {
        Self {
            status: "ok".to_string(),
            timestamp: Utc::now(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}
