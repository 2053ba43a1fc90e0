use once_cell::sync::OnceCell;
use serde::Deserialize;
use std::{env, fs};

/// Runtime configuration loaded once from the environment.
///
/// Values come from a `.env` file (if present) plus the process environment.
/// `DATABASE_PATH` is the only required variable; everything else has a
/// development default.
#[derive(Debug, Deserialize)]
pub struct Config {
    pub project_name: String,
    pub log_level: String,
    pub log_file: String,
    pub log_to_stdout: bool,
    pub database_path: String,
    pub host: String,
    pub port: u16,
    /// Endpoint of the downstream submission pipeline. When unset, submission
    /// events are dropped with a log line instead of being published.
    pub topic_url: Option<String>,
    /// CSV file the user seeder reads at startup.
    pub users_csv: String,
}

static CONFIG: OnceCell<Config> = OnceCell::new();

impl Config {
    pub fn init(env_path: &str) -> &'static Self {
        dotenvy::from_filename(env_path).ok();

        CONFIG.get_or_init(|| {
            let project_name =
                env::var("PROJECT_NAME").unwrap_or_else(|_| "assignment-api".into());
            let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "api=info".into());
            let log_file = env::var("LOG_FILE").unwrap_or_else(|_| "api.log".into());
            let log_to_stdout =
                env::var("LOG_TO_STDOUT").unwrap_or_else(|_| "false".into()) == "true";
            let database_path = env::var("DATABASE_PATH").expect("DATABASE_PATH must be set");
            let host = env::var("HOST").unwrap_or_else(|_| "127.0.0.1".into());
            let port = env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(3000);
            let topic_url = env::var("TOPIC_URL").ok().filter(|v| !v.is_empty());
            let users_csv = env::var("USERS_CSV").unwrap_or_else(|_| "opt/users.csv".into());

            if let Some(parent) = std::path::Path::new(&database_path).parent() {
                fs::create_dir_all(parent).expect("Failed to create database directory");
            }

            Config {
                project_name,
                log_level,
                log_file,
                log_to_stdout,
                database_path,
                host,
                port,
                topic_url,
                users_csv,
            }
        })
    }

    pub fn get() -> &'static Self {
        CONFIG.get().expect("Config not initialized")
    }
}
