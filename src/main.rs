//! Elmodoro - A Pomodoro timer with persisted progress
//!
//! This is the main entry point for the elmodoro server.

use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;

use elmodoro::{
    api::create_router,
    config::Config,
    state::AppState,
    tasks::ticker_task,
    utils::shutdown_signal,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::parse();

    // Initialize tracing with appropriate log level
    tracing_subscriber::fmt()
        .with_env_filter(format!("elmodoro={},tower_http=info", config.log_level()))
        .init();

    info!("Starting elmodoro v{}", env!("CARGO_PKG_VERSION"));
    info!(
        "Configuration: host={}, port={}, work={}min, short break={}min, long break={}min, cycle={}",
        config.host, config.port, config.work, config.short_break, config.long_break, config.cycle
    );

    let storage = config.storage();
    info!("Timer storage: {}", storage.path().display());

    // Restore the saved timer, or start fresh
    let state = Arc::new(
        AppState::load(
            config.server_info(),
            config.timer_settings(),
            storage,
            config.sound_player(),
        )
        .await,
    );

    // Start the ticker background task
    let ticker_state = Arc::clone(&state);
    tokio::spawn(async move {
        ticker_task(ticker_state).await;
    });

    // Create HTTP router with all endpoints
    let app = create_router(state);

    // Bind to the specified address
    let addr = config.address();
    let listener = TcpListener::bind(&addr).await?;

    info!("Server running on http://{}", addr);
    info!("Endpoints:");
    info!("  POST /start  - Start or resume the countdown");
    info!("  POST /pause  - Pause the countdown");
    info!("  POST /reset  - Restart the current phase");
    info!("  POST /skip   - Complete the current phase now");
    info!("  GET  /status - Current timer and server status");
    info!("  GET  /health - Health check");

    // Setup graceful shutdown
    let server = axum::serve(listener, app);

    tokio::select! {
        result = server => {
            if let Err(e) = result {
                tracing::error!("Server error: {}", e);
            }
        }
        _ = shutdown_signal() => {
            info!("Shutdown signal received");
        }
    }

    info!("Server shutdown complete");
    Ok(())
}
