use axum::{
    Json,
    extract::{Extension, Path, State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::Utc;
use sea_orm::{ActiveModelTrait, EntityTrait, IntoActiveModel, Set};
use uuid::Uuid;

use db::models::assignment::Entity as AssignmentEntity;

use crate::auth::AuthenticatedUser;
use crate::response::{ApiResponse, Empty};
use crate::routes::assignments::common::{AssignmentRequest, validate_assignment};
use crate::state::AppState;

/// PUT /v1/assignments/{assignment_id}
///
/// Full-field update, owner only. Validation is identical to create; the
/// body is checked before the id so a malformed payload is reported even for
/// a nonexistent assignment.
///
/// ### Responses
/// - `204 No Content` on success
/// - `400 Bad Request` on invalid body or malformed id
/// - `403 Forbidden` when the requester does not own the assignment
/// - `404 Not Found` for an unknown id
/// - `503 Service Unavailable` when the store is unreachable
pub async fn update_assignment(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthenticatedUser>,
    Path(assignment_id): Path<String>,
    payload: Result<Json<AssignmentRequest>, JsonRejection>,
) -> Response {
    let Json(req) = match payload {
        Ok(payload) => payload,
        Err(rejection) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(ApiResponse::<Empty>::error(rejection.body_text())),
            )
                .into_response();
        }
    };

    let validated = match validate_assignment(req) {
        Ok(validated) => validated,
        Err(message) => {
            tracing::info!(%message, "rejected assignment payload");
            return (
                StatusCode::BAD_REQUEST,
                Json(ApiResponse::<Empty>::error(message)),
            )
                .into_response();
        }
    };

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
        tracing::info!(%assignment_id, requester = %auth.user.id, "update denied: not the owner");
        return (
            StatusCode::FORBIDDEN,
            Json(ApiResponse::<Empty>::error("Permission denied")),
        )
            .into_response();
    }

    let mut model = existing.into_active_model();
    model.name = Set(validated.name);
    model.points = Set(validated.points);
    model.num_of_attempts = Set(validated.num_of_attempts);
    model.deadline = Set(validated.deadline);
    model.updated_at = Set(Utc::now());

    match model.update(state.db()).await {
        Ok(_) => {
            tracing::info!(%assignment_id, "assignment updated");
            StatusCode::NO_CONTENT.into_response()
        }
        Err(e) => {
            tracing::error!(error = %e, %assignment_id, "failed to update assignment");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(ApiResponse::<Empty>::error("Service temporarily unavailable")),
            )
                .into_response()
        }
    }
}
