//! Backend for a minimal polling application: create polls, cast votes,
//! view live tallies. Polls persist in MongoDB; the single-page client in
//! `static/` is served by the same process.

use std::time::Instant;

use axum::{response::Json, routing::get, Router};
use once_cell::sync::Lazy;
use serde_json::json;

pub mod config;
pub mod controllers;
pub mod db;
pub mod models;
pub mod routes;
pub mod state;
pub mod utils;

use state::AppState;

static START_TIME: Lazy<Instant> = Lazy::new(Instant::now);

/// Assembles the API router. Static file serving and CORS are layered on
/// in `main`; tests drive this router directly.
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/api/health", get(health))
        .nest("/api/polls", routes::poll_routes::poll_routes())
        .with_state(state)
}

async fn health() -> Json<serde_json::Value> {
    let seconds = START_TIME.elapsed().as_secs();
    let minutes = seconds / 60;
    let hours = minutes / 60;

    let uptime = if hours > 0 {
        format!("{}h {}m {}s", hours, minutes % 60, seconds % 60)
    } else if minutes > 0 {
        format!("{}m {}s", minutes, seconds % 60)
    } else {
        format!("{}s", seconds)
    };

    Json(json!({
        "status": "ok",
        "uptime": uptime
    }))
}
