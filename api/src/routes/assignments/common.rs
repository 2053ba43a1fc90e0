use chrono::{DateTime, Utc};
use db::models::assignment::Model as AssignmentModel;
use serde::{Deserialize, Serialize};

/// Request body shared by create and update. Unknown fields are rejected at
/// deserialization time; value constraints live in [`validate_assignment`].
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AssignmentRequest {
    pub name: String,
    pub points: i32,
    pub num_of_attempts: i32,
    pub deadline: String,
}

/// An [`AssignmentRequest`] whose fields passed validation.
pub struct ValidatedAssignment {
    pub name: String,
    pub points: i32,
    pub num_of_attempts: i32,
    pub deadline: DateTime<Utc>,
}

/// Checks the schema-level invariants and parses the deadline.
///
/// The error string describes the first violation found and is safe to echo
/// back to the client.
pub fn validate_assignment(req: AssignmentRequest) -> Result<ValidatedAssignment, String> {
    if req.name.trim().is_empty() {
        return Err("name is required and must be a non-empty string".into());
    }
    if !(1..=10).contains(&req.points) {
        return Err("points must be between 1 and 10".into());
    }
    if req.num_of_attempts < 1 {
        return Err("num_of_attempts must be a positive integer".into());
    }
    let deadline = DateTime::parse_from_rfc3339(&req.deadline)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|_| "deadline must be an RFC 3339 date-time".to_string())?;
    if deadline <= Utc::now() {
        return Err("deadline must be in the future".into());
    }

    Ok(ValidatedAssignment {
        name: req.name,
        points: req.points,
        num_of_attempts: req.num_of_attempts,
        deadline,
    })
}

/// List projection: the owner id is omitted, matching the list endpoint's
/// narrower attribute set.
#[derive(Debug, Serialize, Default)]
pub struct AssignmentResponse {
    pub id: String,
    pub name: String,
    pub points: i32,
    pub num_of_attempts: i32,
    pub deadline: String,
    pub created_at: String,
    pub updated_at: String,
}

impl From<AssignmentModel> for AssignmentResponse {
    fn from(a: AssignmentModel) -> Self {
        Self {
            id: a.id.to_string(),
            name: a.name,
            points: a.points,
            num_of_attempts: a.num_of_attempts,
            deadline: a.deadline.to_rfc3339(),
            created_at: a.created_at.to_rfc3339(),
            updated_at: a.updated_at.to_rfc3339(),
        }
    }
}

/// Detail projection returned by GET-by-id, including the owner.
#[derive(Debug, Serialize, Default)]
pub struct AssignmentDetailResponse {
    pub id: String,
    pub name: String,
    pub points: i32,
    pub num_of_attempts: i32,
    pub deadline: String,
    pub user_id: String,
    pub created_at: String,
    pub updated_at: String,
}

impl From<AssignmentModel> for AssignmentDetailResponse {
    fn from(a: AssignmentModel) -> Self {
        Self {
            id: a.id.to_string(),
            name: a.name,
            points: a.points,
            num_of_attempts: a.num_of_attempts,
            deadline: a.deadline.to_rfc3339(),
            user_id: a.user_id.to_string(),
            created_at: a.created_at.to_rfc3339(),
            updated_at: a.updated_at.to_rfc3339(),
        }
    }
}
