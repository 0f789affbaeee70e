use std::time::Duration;

use sea_orm::DatabaseConnection;

/// Application state shared by every worker.
///
/// Built once at startup and handed to actix as `web::Data<AppState>`; the
/// pooled connection is the only shared resource.
#[derive(Debug, Clone)]
pub struct AppState {
    db: DatabaseConnection,
    query_timeout: Duration,
}

impl AppState {
    pub fn new(db: DatabaseConnection, query_timeout: Duration) -> Self {
        Self { db, query_timeout }
    }

    pub fn db(&self) -> &DatabaseConnection {
        &self.db
    }

    /// Deadline applied to each store call made by a handler
    pub fn query_timeout(&self) -> Duration {
        self.query_timeout
    }
}
