use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
};
use chrono::{DateTime, Utc};
use rand::rngs::OsRng;
use sea_orm::entity::prelude::*;
use sea_orm::{ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, Set};

/// Account record for a registered user.
///
/// Users are created by the startup seeder only; the request path reads them
/// to verify credentials and never mutates them.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    /// Unique login identity. Doubles as the Basic-auth username.
    #[sea_orm(unique)]
    pub email: String,
    /// Argon2 PHC string. Compared, never returned to clients.
    pub password_hash: String,
    pub account_created: DateTime<Utc>,
    pub account_updated: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::assignment::Entity")]
    Assignment,
}

impl Related<super::assignment::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Assignment.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    /// Hashes a plaintext password into an argon2 PHC string.
    pub fn hash_password(password: &str) -> Result<String, DbErr> {
        let salt = SaltString::generate(&mut OsRng);
        Argon2::default()
            .hash_password(password.as_bytes(), &salt)
            .map(|h| h.to_string())
            .map_err(|e| DbErr::Custom(format!("password hashing failed: {}", e)))
    }

    /// Compares a plaintext password against the stored hash.
    ///
    /// An unparseable stored hash counts as a mismatch rather than an error,
    /// so a corrupted row can never authenticate.
    pub fn verify_password(&self, password: &str) -> bool {
        match PasswordHash::new(&self.password_hash) {
            Ok(parsed) => Argon2::default()
                .verify_password(password.as_bytes(), &parsed)
                .is_ok(),
            Err(_) => false,
        }
    }

    pub async fn find_by_email(
        db: &DatabaseConnection,
        email: &str,
    ) -> Result<Option<Model>, DbErr> {
        Entity::find()
            .filter(Column::Email.eq(email))
            .one(db)
            .await
    }

    /// Inserts a new user with a freshly hashed password.
    pub async fn create(
        db: &DatabaseConnection,
        first_name: &str,
        last_name: &str,
        email: &str,
        password: &str,
    ) -> Result<Model, DbErr> {
        let now = Utc::now();
        let user = ActiveModel {
            id: Set(Uuid::new_v4()),
            first_name: Set(first_name.to_owned()),
            last_name: Set(last_name.to_owned()),
            email: Set(email.to_owned()),
            password_hash: Set(Self::hash_password(password)?),
            account_created: Set(now),
            account_updated: Set(now),
        };
        user.insert(db).await
    }
}
