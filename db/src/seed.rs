use sea_orm::{DatabaseConnection, DbErr};
use std::path::Path;
use thiserror::Error;

use crate::models::user;

#[derive(Debug, Error)]
pub enum SeedError {
    #[error("failed to read seed file: {0}")]
    Io(#[from] std::io::Error),
    #[error("database error: {0}")]
    Db(#[from] DbErr),
}

/// Loads user accounts from a CSV file with the columns
/// `first_name,last_name,email,password`.
///
/// Rows whose e-mail already exists are skipped, so re-running the seeder on
/// every startup is safe. Passwords are hashed before insertion; malformed
/// rows are logged and skipped. Returns the number of users inserted.
pub async fn seed_users_from_csv(
    db: &DatabaseConnection,
    path: impl AsRef<Path>,
) -> Result<usize, SeedError> {
    let path = path.as_ref();
    let contents = std::fs::read_to_string(path)?;

    let mut inserted = 0;
    for (line_no, line) in contents.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with("first_name,") {
            continue;
        }

        let fields: Vec<&str> = line.split(',').map(str::trim).collect();
        let [first_name, last_name, email, password] = fields[..] else {
            tracing::warn!(line = line_no + 1, "skipping malformed seed row");
            continue;
        };
        if email.is_empty() || password.is_empty() {
            tracing::warn!(line = line_no + 1, "skipping seed row with empty email or password");
            continue;
        }

        if user::Model::find_by_email(db, email).await?.is_some() {
            continue;
        }

        user::Model::create(db, first_name, last_name, email, password).await?;
        inserted += 1;
    }

    tracing::info!(inserted, path = %path.display(), "user seeding complete");
    Ok(inserted)
}
