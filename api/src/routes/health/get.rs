use axum::{
    extract::{RawQuery, State},
    http::{HeaderMap, StatusCode, header::CACHE_CONTROL, header::CONTENT_LENGTH},
    response::{IntoResponse, Response},
};

use crate::state::AppState;

/// GET /healthz
///
/// Store reachability probe. Rejects any query parameters or body with 400,
/// answers 200 with no body when the database responds to a ping and 503
/// when it does not. Responses are marked uncacheable.
pub async fn healthz(
    State(state): State<AppState>,
    RawQuery(query): RawQuery,
    headers: HeaderMap,
) -> Response {
    let has_body = headers
        .get(CONTENT_LENGTH)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.parse::<u64>().ok())
        .is_some_and(|len| len > 0);

    if query.as_deref().is_some_and(|q| !q.is_empty()) || has_body {
        return StatusCode::BAD_REQUEST.into_response();
    }

    match state.db().ping().await {
        Ok(()) => (StatusCode::OK, [(CACHE_CONTROL, "no-cache")]).into_response(),
        Err(e) => {
            tracing::error!(error = %e, "health check could not reach the database");
            (StatusCode::SERVICE_UNAVAILABLE, [(CACHE_CONTROL, "no-cache")]).into_response()
        }
    }
}
