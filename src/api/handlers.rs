//! HTTP endpoint handlers

use std::sync::Arc;
use axum::{extract::State, response::Json};
use tracing::info;

use crate::{state::AppState, timer::Input};
use super::responses::{ApiResponse, HealthResponse, StatusResponse, Viewport};

async fn run_command(state: &AppState, input: Input) -> Json<ApiResponse> {
    let before = state.get_timer_state().await;
    let after = state.command(input).await;

    let message = if before == after {
        format!("{} ignored, timer unchanged", input.name())
    } else if before.phase != after.phase {
        format!("{} complete, {} ready", before.phase, after.phase)
    } else {
        format!("{} applied", input.name())
    };
    info!("{}", message);

    Json(ApiResponse::new(message, after))
}

/// Handle POST /start - Start or resume the countdown
pub async fn start_handler(State(state): State<Arc<AppState>>) -> Json<ApiResponse> {
    run_command(&state, Input::Start).await
}

/// Handle POST /pause - Pause the countdown
pub async fn pause_handler(State(state): State<Arc<AppState>>) -> Json<ApiResponse> {
    run_command(&state, Input::Pause).await
}

/// Handle POST /reset - Restart the current phase from its full duration
pub async fn reset_handler(State(state): State<Arc<AppState>>) -> Json<ApiResponse> {
    run_command(&state, Input::Reset).await
}

/// Handle POST /skip - Complete the current phase now
pub async fn skip_handler(State(state): State<Arc<AppState>>) -> Json<ApiResponse> {
    run_command(&state, Input::Skip).await
}

/// Handle GET /status - Return current timer and server status
pub async fn status_handler(State(state): State<Arc<AppState>>) -> Json<StatusResponse> {
    let timer = state.get_timer_state().await;
    let (last_action, last_action_time) = state.get_last_action();

    Json(StatusResponse {
        timer: timer.into(),
        cycle_length: state.settings.cycle_length,
        uptime: state.get_uptime(),
        port: state.server.port,
        host: state.server.host.clone(),
        viewport: Viewport {
            width: state.server.viewport_width,
            height: state.server.viewport_height,
        },
        last_action,
        last_action_time,
    })
}

/// Handle GET /health - Health check endpoint
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::ok())
}
