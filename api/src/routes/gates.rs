//! Request-shape gates that run before authentication.
//!
//! Mirrors the admission pipeline's first two gates: mutating requests must
//! declare a JSON media type, and no request may carry query parameters.
//! Reads and deletes must not carry a body either. Failing a gate
//! short-circuits the rest of the pipeline.

use axum::{
    Json,
    body::Body,
    http::{
        Method, Request, StatusCode,
        header::{CONTENT_LENGTH, CONTENT_TYPE},
    },
    middleware::Next,
    response::Response,
};

use crate::response::{ApiResponse, Empty};

pub async fn request_gates(
    req: Request<Body>,
    next: Next,
) -> Result<Response, (StatusCode, Json<ApiResponse<Empty>>)> {
    let method = req.method().clone();

    if method == Method::POST || method == Method::PUT {
        let is_json = req
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .is_some_and(|v| v.contains("application/json"));
        if !is_json {
            return Err((
                StatusCode::UNSUPPORTED_MEDIA_TYPE,
                Json(ApiResponse::error("Content-Type must be application/json")),
            ));
        }
    }

    if req.uri().query().is_some_and(|q| !q.is_empty()) {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(ApiResponse::error("Unexpected query parameters")),
        ));
    }

    if (method == Method::GET || method == Method::DELETE) && has_body(&req) {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(ApiResponse::error(
                "Unexpected query parameters or body content",
            )),
        ));
    }

    Ok(next.run(req).await)
}

fn has_body(req: &Request<Body>) -> bool {
    req.headers()
        .get(CONTENT_LENGTH)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.parse::<u64>().ok())
        .is_some_and(|len| len > 0)
}
