//! Assignment routes.
//!
//! Route group mounted at `/v1/assignments`:
//! - `GET    /`                              → List assignments
//! - `POST   /`                              → Create an assignment
//! - `GET    /{assignment_id}`               → Get assignment details
//! - `PUT    /{assignment_id}`               → Edit assignment (owner only)
//! - `DELETE /{assignment_id}`               → Delete assignment (owner only)
//! - `POST   /{assignment_id}/submission`    → Submit a solution URL
//!
//! Request-shape gates run first, then Basic authentication; handlers see an
//! [`crate::auth::AuthenticatedUser`] extension.

use axum::{
    Router,
    middleware::{from_fn, from_fn_with_state},
    routing::{get, post},
};

use crate::auth::require_auth;
use crate::routes::gates::request_gates;
use crate::state::AppState;

use delete::delete_assignment;
use get::{get_assignment, list_assignments};
use post::create_assignment;
use put::update_assignment;
use submissions::post::submit_assignment;

pub mod common;
pub mod delete;
pub mod get;
pub mod post;
pub mod put;
pub mod submissions;

pub fn assignment_routes(app_state: AppState) -> Router<AppState> {
    Router::new()
        .route("/", get(list_assignments).post(create_assignment))
        .route(
            "/{assignment_id}",
            get(get_assignment)
                .put(update_assignment)
                .delete(delete_assignment),
        )
        .route("/{assignment_id}/submission", post(submit_assignment))
        .route_layer(from_fn_with_state(app_state, require_auth))
        .route_layer(from_fn(request_gates))
}
