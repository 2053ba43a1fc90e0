//! Application state shared across route handlers.
//!
//! Every collaborator the request path needs (database handle, event
//! publisher) is injected here and passed into the router, so handlers never
//! reach for process-wide singletons.

use sea_orm::DatabaseConnection;

use crate::services::publisher::EventPublisher;

#[derive(Clone)]
pub struct AppState {
    db: DatabaseConnection,
    publisher: EventPublisher,
}

impl AppState {
    pub fn new(db: DatabaseConnection, publisher: EventPublisher) -> Self {
        Self { db, publisher }
    }

    pub fn db(&self) -> &DatabaseConnection {
        &self.db
    }

    /// Cloned connection for contexts that need ownership.
    pub fn db_clone(&self) -> DatabaseConnection {
        self.db.clone()
    }

    pub fn publisher(&self) -> &EventPublisher {
        &self.publisher
    }
}
