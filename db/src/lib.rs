pub mod models;
pub mod seed;
pub mod test_utils;

use common::config::Config;
use sea_orm::{Database, DatabaseConnection};
use std::path::Path;

/// Opens the SQLite database named by `DATABASE_PATH`.
///
/// Accepts either a full DSN or a bare file path. SQLite will not create
/// intermediate directories, so the parent directory is created first.
pub async fn connect() -> DatabaseConnection {
    let path_or_url = Config::get().database_path.clone();
    let url = if path_or_url.starts_with("sqlite:") {
        path_or_url
    } else {
        if let Some(parent) = Path::new(&path_or_url).parent() {
            let _ = std::fs::create_dir_all(parent);
        }
        format!("sqlite://{path_or_url}?mode=rwc")
    };

    Database::connect(&url)
        .await
        .expect("Failed to connect to database")
}
