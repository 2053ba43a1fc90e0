//! Submission admission.
//!
//! The handler is an ordered, fail-fast pipeline. Together with the
//! middleware that ran before it (JSON media type, no query parameters,
//! Basic authentication) the gates are:
//!
//! 1. payload must be exactly `{submission_url}` with an http(s) URL
//! 2. the assignment id must be a UUID and resolve to a stored assignment
//! 3. the deadline must not have passed
//! 4. the attempt count must be below the assignment's limit, checked and
//!    committed in one transaction
//!
//! After the commit the submission event is published best-effort; a publish
//! failure is logged and the client still receives the 201.

use axum::{
    Json,
    extract::{Extension, Path, State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::Utc;
use sea_orm::EntityTrait;
use serde::{Deserialize, Serialize};
use url::Url;
use uuid::Uuid;

use db::models::assignment::Entity as AssignmentEntity;
use db::models::submission::{AdmissionOutcome, Model as SubmissionModel};

use crate::auth::AuthenticatedUser;
use crate::response::ApiResponse;
use crate::services::publisher::SubmissionEvent;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SubmissionRequest {
    pub submission_url: String,
}

#[derive(Debug, Serialize, Default)]
pub struct SubmissionResponse {
    pub id: String,
    pub assignment_id: String,
    pub submitter_email: String,
    pub submission_url: String,
    pub submitted_at: String,
}

impl From<SubmissionModel> for SubmissionResponse {
    fn from(s: SubmissionModel) -> Self {
        Self {
            id: s.id.to_string(),
            assignment_id: s.assignment_id.to_string(),
            submitter_email: s.submitter_email,
            submission_url: s.submission_url,
            submitted_at: s.submitted_at.to_rfc3339(),
        }
    }
}

fn bad_request(message: impl Into<String>) -> Response {
    (
        StatusCode::BAD_REQUEST,
        Json(ApiResponse::<SubmissionResponse>::error(message)),
    )
        .into_response()
}

fn service_unavailable() -> Response {
    (
        StatusCode::SERVICE_UNAVAILABLE,
        Json(ApiResponse::<SubmissionResponse>::error(
            "Service temporarily unavailable",
        )),
    )
        .into_response()
}

/// POST /v1/assignments/{assignment_id}/submission
///
/// ### Responses
/// - `201 Created` with the persisted submission
/// - `400 Bad Request` for a bad payload or id, a passed deadline, or an
///   exhausted attempt limit
/// - `404 Not Found` for an unknown assignment
/// - `503 Service Unavailable` when the store is unreachable
pub async fn submit_assignment(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthenticatedUser>,
    Path(assignment_id): Path<String>,
    payload: Result<Json<SubmissionRequest>, JsonRejection>,
) -> Response {
    let Json(req) = match payload {
        Ok(payload) => payload,
        Err(rejection) => return bad_request(rejection.body_text()),
    };

    let url_ok = Url::parse(&req.submission_url)
        .map(|u| matches!(u.scheme(), "http" | "https"))
        .unwrap_or(false);
    if !url_ok {
        tracing::info!("rejected submission: invalid URL");
        return bad_request("submission_url must be a valid http or https URL");
    }

    let Ok(assignment_id) = Uuid::parse_str(&assignment_id) else {
        return bad_request("Invalid assignment ID format");
    };

    let assignment = match AssignmentEntity::find_by_id(assignment_id).one(state.db()).await {
        Ok(Some(assignment)) => assignment,
        Ok(None) => {
            tracing::info!(%assignment_id, "submission rejected: assignment not found");
            return (
                StatusCode::NOT_FOUND,
                Json(ApiResponse::<SubmissionResponse>::error("Assignment not found")),
            )
                .into_response();
        }
        Err(e) => {
            tracing::error!(error = %e, %assignment_id, "failed to fetch assignment");
            return service_unavailable();
        }
    };

    if Utc::now() >= assignment.deadline {
        tracing::info!(%assignment_id, deadline = %assignment.deadline, "submission rejected: deadline passed");
        return bad_request("Submission deadline has passed");
    }

    match SubmissionModel::admit(state.db(), &assignment, &auth.user.email, &req.submission_url)
        .await
    {
        Ok(AdmissionOutcome::AttemptsExceeded) => {
            tracing::info!(%assignment_id, limit = assignment.num_of_attempts, "submission rejected: attempts exceeded");
            bad_request("Exceeded maximum number of attempts")
        }
        Ok(AdmissionOutcome::Accepted(submission)) => {
            tracing::info!(%assignment_id, submission_id = %submission.id, "submission accepted");

            let event = SubmissionEvent::new(&submission.submission_url, &submission.submitter_email);
            if let Err(e) = state.publisher().publish(&event).await {
                tracing::error!(error = %e, submission_id = %submission.id, "failed to publish submission event");
            }

            (
                StatusCode::CREATED,
                Json(ApiResponse::success(
                    SubmissionResponse::from(submission),
                    "Submission accepted",
                )),
            )
                .into_response()
        }
        Err(e) => {
            tracing::error!(error = %e, %assignment_id, "failed to persist submission");
            service_unavailable()
        }
    }
}
