//! Basic-auth credential verification.
//!
//! Every authenticated endpoint runs the [`require_auth`] middleware, which
//! decodes the `Authorization: Basic` header, resolves the user by e-mail and
//! compares the supplied password against the stored argon2 hash. The
//! distinct failure reasons are kept for logging, but every rejection maps to
//! the same generic 401 body so a caller cannot probe which accounts exist.

use axum::{
    Json,
    body::Body,
    extract::State,
    http::{Request, StatusCode, header::AUTHORIZATION},
    middleware::Next,
    response::Response,
};
use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64;
use db::models::user;
use sea_orm::{DatabaseConnection, DbErr};
use thiserror::Error;
use validator::ValidateEmail;

use crate::response::{ApiResponse, Empty};
use crate::state::AppState;

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("no credential supplied")]
    MissingCredential,
    #[error("credential is not a decodable basic-auth pair")]
    MalformedCredential,
    #[error("username is not a valid e-mail address")]
    InvalidUsername,
    #[error("no user with that e-mail")]
    UserNotFound,
    #[error("password mismatch")]
    PasswordMismatch,
    #[error("database error: {0}")]
    Db(#[from] DbErr),
}

/// A verified user, available to handlers via request extensions.
///
/// Carries the raw password supplied with the request because the upstream
/// contract exposes it to callers that re-verify; it must never be logged or
/// persisted, so `Debug` redacts it and nothing serializes it.
#[derive(Clone)]
pub struct AuthenticatedUser {
    pub user: user::Model,
    password: String,
}

impl AuthenticatedUser {
    pub fn raw_password(&self) -> &str {
        &self.password
    }
}

impl std::fmt::Debug for AuthenticatedUser {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthenticatedUser")
            .field("user", &self.user.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Verifies an `Authorization` header value against the user store.
pub async fn verify_basic(
    header: Option<&axum::http::HeaderValue>,
    db: &DatabaseConnection,
) -> Result<AuthenticatedUser, AuthError> {
    let header = header.ok_or(AuthError::MissingCredential)?;
    let header = header.to_str().map_err(|_| AuthError::MalformedCredential)?;
    let encoded = header
        .strip_prefix("Basic ")
        .ok_or(AuthError::MalformedCredential)?;

    let decoded = BASE64
        .decode(encoded.trim())
        .map_err(|_| AuthError::MalformedCredential)?;
    let decoded = String::from_utf8(decoded).map_err(|_| AuthError::MalformedCredential)?;

    let (username, password) = decoded
        .split_once(':')
        .ok_or(AuthError::MalformedCredential)?;
    let username = username.trim();
    if username.is_empty() || password.is_empty() {
        return Err(AuthError::MalformedCredential);
    }

    if !username.validate_email() {
        return Err(AuthError::InvalidUsername);
    }

    let user = user::Model::find_by_email(db, username)
        .await?
        .ok_or(AuthError::UserNotFound)?;

    if !user.verify_password(password) {
        return Err(AuthError::PasswordMismatch);
    }

    Ok(AuthenticatedUser {
        user,
        password: password.to_owned(),
    })
}

/// Middleware that authenticates the request and inserts the
/// [`AuthenticatedUser`] into request extensions.
pub async fn require_auth(
    State(state): State<AppState>,
    mut req: Request<Body>,
    next: Next,
) -> Result<Response, (StatusCode, Json<ApiResponse<Empty>>)> {
    let auth_header = req.headers().get(AUTHORIZATION).cloned();
    match verify_basic(auth_header.as_ref(), state.db()).await {
        Ok(user) => {
            req.extensions_mut().insert(user);
            Ok(next.run(req).await)
        }
        Err(AuthError::Db(e)) => {
            tracing::error!(error = %e, "credential lookup failed");
            Err((
                StatusCode::SERVICE_UNAVAILABLE,
                Json(ApiResponse::error("Service temporarily unavailable")),
            ))
        }
        Err(e) => {
            tracing::info!(error = %e, "authentication rejected");
            Err((
                StatusCode::UNAUTHORIZED,
                Json(ApiResponse::error("Authentication failed")),
            ))
        }
    }
}
