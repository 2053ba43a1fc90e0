use api::routes::routes;
use api::services::publisher::EventPublisher;
use api::state::AppState;
use common::{config::Config, logger};
use migration::Migrator;
use sea_orm_migration::MigratorTrait;
use std::net::SocketAddr;

#[tokio::main]
async fn main() {
    let config = Config::init(".env");
    let _log_guard = logger::init_logging(&config.log_file, &config.log_level, config.log_to_stdout);

    let db = db::connect().await;
    Migrator::up(&db, None).await.expect("Failed to run migrations");

    if let Err(e) = db::seed::seed_users_from_csv(&db, &config.users_csv).await {
        tracing::warn!(error = %e, path = %config.users_csv, "user seeding failed");
    }

    let publisher = EventPublisher::new(config.topic_url.clone());
    let app = routes(AppState::new(db, publisher));

    let addr: SocketAddr = format!("{}:{}", config.host, config.port)
        .parse()
        .expect("Invalid address");

    tracing::info!(project = %config.project_name, %addr, "starting server");

    axum::serve(
        tokio::net::TcpListener::bind(&addr)
            .await
            .expect("Failed to bind"),
        app,
    )
    .await
    .expect("Server crashed");
}
