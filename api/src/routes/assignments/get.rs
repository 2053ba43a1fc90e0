use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use sea_orm::{EntityTrait, QueryOrder};
use uuid::Uuid;

use db::models::assignment::{Column as AssignmentColumn, Entity as AssignmentEntity};

use crate::response::ApiResponse;
use crate::routes::assignments::common::{AssignmentDetailResponse, AssignmentResponse};
use crate::state::AppState;

/// GET /v1/assignments
///
/// Lists every assignment, newest first. Authentication is required but
/// reads are not restricted to owners.
pub async fn list_assignments(State(state): State<AppState>) -> Response {
    match AssignmentEntity::find()
        .order_by_desc(AssignmentColumn::CreatedAt)
        .all(state.db())
        .await
    {
        Ok(assignments) => {
            let body: Vec<AssignmentResponse> =
                assignments.into_iter().map(Into::into).collect();
            (
                StatusCode::OK,
                Json(ApiResponse::success(body, "Assignments retrieved successfully")),
            )
                .into_response()
        }
        Err(e) => {
            tracing::error!(error = %e, "failed to list assignments");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(ApiResponse::<Vec<AssignmentResponse>>::error(
                    "Service temporarily unavailable",
                )),
            )
                .into_response()
        }
    }
}

/// GET /v1/assignments/{assignment_id}
///
/// Fetches one assignment, including its owner id. Malformed ids are a 400,
/// unknown ids a 404.
pub async fn get_assignment(
    State(state): State<AppState>,
    Path(assignment_id): Path<String>,
) -> Response {
    let Ok(assignment_id) = Uuid::parse_str(&assignment_id) else {
        return (
            StatusCode::BAD_REQUEST,
            Json(ApiResponse::<AssignmentDetailResponse>::error(
                "Invalid assignment ID format",
            )),
        )
            .into_response();
    };

    match AssignmentEntity::find_by_id(assignment_id).one(state.db()).await {
        Ok(Some(assignment)) => (
            StatusCode::OK,
            Json(ApiResponse::success(
                AssignmentDetailResponse::from(assignment),
                "Assignment retrieved successfully",
            )),
        )
            .into_response(),
        Ok(None) => {
            tracing::info!(%assignment_id, "assignment not found");
            (
                StatusCode::NOT_FOUND,
                Json(ApiResponse::<AssignmentDetailResponse>::error(
                    "Assignment not found",
                )),
            )
                .into_response()
        }
        Err(e) => {
            tracing::error!(error = %e, %assignment_id, "failed to fetch assignment");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(ApiResponse::<AssignmentDetailResponse>::error(
                    "Service temporarily unavailable",
                )),
            )
                .into_response()
        }
    }
}
