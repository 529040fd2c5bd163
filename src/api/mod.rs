//! HTTP API module
//!
//! This module contains all HTTP endpoint handlers and response structures.

pub mod handlers;
pub mod responses;

use std::sync::Arc;
use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::state::AppState;
use handlers::*;

/// Create the HTTP router with all endpoints
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/start", post(start_handler))
        .route("/pause", post(pause_handler))
        .route("/reset", post(reset_handler))
        .route("/skip", post(skip_handler))
        .route("/status", get(status_handler))
        .route("/health", get(health_handler))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::{to_bytes, Body},
        http::{Method, Request, StatusCode},
    };
    use serde_json::Value;
    use tower::ServiceExt;

    use crate::state::app_state::tests::test_state;

    async fn call(router: &Router, method: Method, uri: &str) -> (StatusCode, Value) {
        let request = Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .unwrap();
        let response = router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&body).unwrap())
    }

    #[tokio::test]
    async fn start_then_pause_round_trip() {
        let (state, dir) = test_state("api-start").await;
        let router = create_router(Arc::new(state));

        let (status, body) = call(&router, Method::POST, "/start").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "running");
        assert_eq!(body["timer"]["phase"], "work");
        assert_eq!(body["timer"]["remaining"], "25:00");

        let (_, body) = call(&router, Method::POST, "/pause").await;
        assert_eq!(body["status"], "paused");
        assert_eq!(body["timer"]["running"], false);

        let (_, body) = call(&router, Method::POST, "/pause").await;
        assert_eq!(body["message"], "pause ignored, timer unchanged");

        let _ = std::fs::remove_dir_all(dir);
    }

    #[tokio::test]
    async fn skip_advances_phase() {
        let (state, dir) = test_state("api-skip").await;
        let router = create_router(Arc::new(state));

        call(&router, Method::POST, "/start").await;
        let (_, body) = call(&router, Method::POST, "/skip").await;
        assert_eq!(body["timer"]["phase"], "shortBreak");
        assert_eq!(body["timer"]["completed_work_count"], 1);
        assert_eq!(body["message"], "work complete, short break ready");

        let (_, body) = call(&router, Method::GET, "/status").await;
        assert_eq!(body["timer"]["phase"], "shortBreak");
        assert_eq!(body["last_action"], "skip");
        assert_eq!(body["cycle_length"], 4);
        assert_eq!(body["viewport"]["width"], 360);

        let _ = std::fs::remove_dir_all(dir);
    }

    #[tokio::test]
    async fn health_reports_ok() {
        let (state, _) = test_state("api-health").await;
        let router = create_router(Arc::new(state));

        let (status, body) = call(&router, Method::GET, "/health").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
    }
}
