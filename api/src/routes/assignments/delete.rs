use axum::{
    Json,
    extract::{Extension, Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use sea_orm::EntityTrait;
use uuid::Uuid;

use db::models::assignment::Entity as AssignmentEntity;

use crate::auth::AuthenticatedUser;
use crate::response::{ApiResponse, Empty};
use crate::state::AppState;

/// DELETE /v1/assignments/{assignment_id}
///
/// Owner-only delete. Submissions referencing the assignment are removed by
/// the store's cascade.
///
/// ### Responses
/// - `204 No Content` on success
/// - `400 Bad Request` on a malformed id
/// - `403 Forbidden` when the requester does not own the assignment
/// - `404 Not Found` for an unknown id
/// - `503 Service Unavailable` when the store is unreachable
pub async fn delete_assignment(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthenticatedUser>,
    Path(assignment_id): Path<String>,
) -> Response {
    let Ok(assignment_id) = Uuid::parse_str(&assignment_id) else {
        return (
            StatusCode::BAD_REQUEST,
            Json(ApiResponse::<Empty>::error("Invalid assignment ID format")),
        )
            .into_response();
    };

    let existing = match AssignmentEntity::find_by_id(assignment_id).one(state.db()).await {
        Ok(Some(existing)) => existing,
        Ok(None) => {
            tracing::info!(%assignment_id, "assignment not found");
            return (
                StatusCode::NOT_FOUND,
                Json(ApiResponse::<Empty>::error("Assignment not found")),
            )
                .into_response();
        }
        Err(e) => {
            tracing::error!(error = %e, %assignment_id, "failed to fetch assignment");
            return (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(ApiResponse::<Empty>::error("Service temporarily unavailable")),
            )
                .into_response();
        }
    };

    if existing.user_id != auth.user.id {
        tracing::info!(%assignment_id, requester = %auth.user.id, "delete denied: not the owner");
        return (
            StatusCode::FORBIDDEN,
            Json(ApiResponse::<Empty>::error("Permission denied")),
        )
            .into_response();
    }

    match AssignmentEntity::delete_by_id(assignment_id).exec(state.db()).await {
        Ok(_) => {
            tracing::info!(%assignment_id, "assignment deleted");
            StatusCode::NO_CONTENT.into_response()
        }
        Err(e) => {
            tracing::error!(error = %e, %assignment_id, "failed to delete assignment");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(ApiResponse::<Empty>::error("Service temporarily unavailable")),
            )
                .into_response()
        }
    }
}
