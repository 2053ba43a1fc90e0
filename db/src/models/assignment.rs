use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use serde::Serialize;

/// A gradeable assignment owned by the user who created it.
///
/// `points` is bounded to 1..=10 and `num_of_attempts` is at least 1; both
/// are enforced at the request boundary before an ActiveModel is built.
/// `deadline` is an absolute UTC instant — the submission path compares it
/// with strict `<`.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize)]
#[sea_orm(table_name = "assignments")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub name: String,
    pub points: i32,
    /// Maximum number of submissions accepted for this assignment.
    pub num_of_attempts: i32,
    pub deadline: DateTime<Utc>,
    /// Owning user. Immutable after creation; only the owner may update or
    /// delete the assignment.
    pub user_id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
        to = "super::user::Column::Id"
    )]
    User,

    #[sea_orm(has_many = "super::submission::Entity")]
    Submission,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl Related<super::submission::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Submission.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
