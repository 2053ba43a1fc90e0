use axum::{
    Json,
    extract::{Extension, State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::Utc;
use sea_orm::{ActiveModelTrait, Set};
use uuid::Uuid;

use db::models::assignment;

use crate::auth::AuthenticatedUser;
use crate::response::ApiResponse;
use crate::routes::assignments::common::{AssignmentRequest, AssignmentResponse, validate_assignment};
use crate::state::AppState;

/// POST /v1/assignments
///
/// Creates an assignment owned by the authenticated user. The body must
/// contain exactly `{name, points, num_of_attempts, deadline}` with
/// `1 <= points <= 10`, `num_of_attempts >= 1` and a strictly future
/// RFC 3339 deadline.
///
/// ### Responses
/// - `201 Created` with the created assignment
/// - `400 Bad Request` on unknown fields or invalid values
/// - `503 Service Unavailable` when the store is unreachable
pub async fn create_assignment(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthenticatedUser>,
    payload: Result<Json<AssignmentRequest>, JsonRejection>,
) -> Response {
    let Json(req) = match payload {
        Ok(payload) => payload,
        Err(rejection) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(ApiResponse::<AssignmentResponse>::error(rejection.body_text())),
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
                Json(ApiResponse::<AssignmentResponse>::error(message)),
            )
                .into_response();
        }
    };

    let now = Utc::now();
    let model = assignment::ActiveModel {
        id: Set(Uuid::new_v4()),
        name: Set(validated.name),
        points: Set(validated.points),
        num_of_attempts: Set(validated.num_of_attempts),
        deadline: Set(validated.deadline),
        user_id: Set(auth.user.id),
        created_at: Set(now),
        updated_at: Set(now),
    };

    match model.insert(state.db()).await {
        Ok(created) => {
            tracing::info!(assignment_id = %created.id, owner = %created.user_id, "assignment created");
            (
                StatusCode::CREATED,
                Json(ApiResponse::success(
                    AssignmentResponse::from(created),
                    "Assignment created successfully",
                )),
            )
                .into_response()
        }
        Err(e) => {
            tracing::error!(error = %e, "failed to insert assignment");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(ApiResponse::<AssignmentResponse>::error(
                    "Service temporarily unavailable",
                )),
            )
                .into_response()
        }
    }
}
