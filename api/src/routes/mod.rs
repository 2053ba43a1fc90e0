//! HTTP route entry point.
//!
//! Route groups:
//! - `/healthz` → store reachability probe (public)
//! - `/v1/assignments` → assignment CRUD and submission admission
//!   (Basic authentication via [`crate::auth::require_auth`])

use axum::{Router, http::StatusCode, routing::get};

use crate::state::AppState;

pub mod assignments;
pub mod gates;
pub mod health;

/// Builds the application router with all middleware applied.
pub fn routes(app_state: AppState) -> Router {
    Router::new()
        .route("/healthz", get(health::get::healthz))
        .nest(
            "/v1/assignments",
            assignments::assignment_routes(app_state.clone()),
        )
        .fallback(|| async { StatusCode::NOT_FOUND })
        .with_state(app_state)
}
