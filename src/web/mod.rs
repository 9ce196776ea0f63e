// HTTP API — Axum server exposing the detection pipeline.
//
// Two routes: GET /health for liveness probes and POST /check-plagiarism for
// detection. CORS is wide open (any origin, GET/POST/OPTIONS) so browser
// frontends can call the API directly; preflight OPTIONS requests are
// answered by the CORS layer.

use std::sync::Arc;

use anyhow::Result;
use axum::http::{header, Method, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::config::Config;

pub mod handlers;

/// Shared application state threaded through all Axum handlers.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
}

/// Start the web server and block until it exits.
pub async fn run_server(config: Config) -> Result<()> {
    let addr = format!("{}:{}", config.bind, config.port);
    let state = AppState {
        config: Arc::new(config),
    };

    let app = build_router(state);

    info!("Carbon API listening on http://{addr}");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

/// Build the router. Public so tests can drive it without binding a socket.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route(
            "/check-plagiarism",
            post(handlers::check::check_plagiarism),
        )
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
                .allow_headers([header::CONTENT_TYPE]),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Liveness probe.
async fn health() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(serde_json::json!({
            "status": "healthy",
            "message": "Plagiarism Detection API is running"
        })),
    )
}

/// JSON error response in the failure shape of the detection contract.
pub fn api_error(status: StatusCode, message: &str) -> Response {
    (
        status,
        Json(serde_json::json!({ "success": false, "error": message })),
    )
        .into_response()
}
