use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use sea_orm::{DatabaseConnection, Set, TransactionTrait};
use serde::Serialize;

use super::assignment;

/// One accepted submission attempt. Append-only: no update or delete path
/// exists, and rows disappear only when their assignment is deleted
/// (cascade).
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize)]
#[sea_orm(table_name = "submissions")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub assignment_id: Uuid,
    /// Denormalized from the authenticated user at admission time.
    pub submitter_email: String,
    pub submission_url: String,
    pub submitted_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::assignment::Entity",
        from = "Column::AssignmentId",
        to = "super::assignment::Column::Id"
    )]
    Assignment,
}

impl Related<super::assignment::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Assignment.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// Result of the attempt-limit admission check.
#[derive(Debug)]
pub enum AdmissionOutcome {
    Accepted(Model),
    AttemptsExceeded,
}

impl Model {
    pub async fn count_for_assignment<C: ConnectionTrait>(
        conn: &C,
        assignment_id: Uuid,
    ) -> Result<u64, DbErr> {
        Entity::find()
            .filter(Column::AssignmentId.eq(assignment_id))
            .count(conn)
            .await
    }

    /// Counts existing attempts and inserts the new submission in one
    /// transaction, so two concurrent submissions cannot both slip under the
    /// attempt limit.
    pub async fn admit(
        db: &DatabaseConnection,
        assignment: &assignment::Model,
        submitter_email: &str,
        submission_url: &str,
    ) -> Result<AdmissionOutcome, DbErr> {
        let txn = db.begin().await?;

        let attempts = Self::count_for_assignment(&txn, assignment.id).await?;
        if attempts >= assignment.num_of_attempts as u64 {
            txn.rollback().await?;
            return Ok(AdmissionOutcome::AttemptsExceeded);
        }

        let submission = ActiveModel {
            id: Set(Uuid::new_v4()),
            assignment_id: Set(assignment.id),
            submitter_email: Set(submitter_email.to_owned()),
            submission_url: Set(submission_url.to_owned()),
            submitted_at: Set(Utc::now()),
        }
        .insert(&txn)
        .await?;

        txn.commit().await?;
        Ok(AdmissionOutcome::Accepted(submission))
    }
}
