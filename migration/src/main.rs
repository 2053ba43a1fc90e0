use migration::Migrator;
use sea_orm_migration::MigratorTrait;
use std::{env, fs, path::Path};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    let db_path = env::var("DATABASE_PATH").expect("DATABASE_PATH must be set");
    let args: Vec<String> = env::args().collect();

    match args.get(1).map(|s| s.as_str()) {
        Some("clean") => {
            remove_db_file(&db_path);
        }
        Some("fresh") => {
            remove_db_file(&db_path);
            migrate(&db_path).await;
        }
        _ => {
            migrate(&db_path).await;
        }
    }
}

async fn migrate(db_path: &str) {
    if let Some(parent) = Path::new(db_path).parent() {
        fs::create_dir_all(parent).expect("Failed to create DB directory");
    }
    let url = format!("sqlite://{}?mode=rwc", db_path);
    let db = sea_orm::Database::connect(&url)
        .await
        .expect("DB connection failed");

    Migrator::up(&db, None).await.expect("Migration failed");
    println!("Migrations applied: {}", db_path);
}

fn remove_db_file(path: &str) {
    let db_path = Path::new(path);
    if db_path.exists() {
        fs::remove_file(db_path).expect("Failed to delete DB file");
        println!("Deleted DB: {}", db_path.display());
    } else {
        println!("DB file does not exist: {}", db_path.display());
    }
}
