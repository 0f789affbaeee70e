use crate::config::db::DbSettings;
use crate::error::AppError;
use crate::infra::db::bootstrap_db;
use crate::state::app_state::AppState;

/// Builder for creating AppState instances (used in both tests and main)
pub struct StateBuilder {
    db_settings: DbSettings,
}

impl StateBuilder {
    pub fn new() -> Self {
        Self {
            db_settings: DbSettings::default(),
        }
    }

    pub fn with_db(mut self, settings: DbSettings) -> Self {
        self.db_settings = settings;
        self
    }

    /// Single entrypoint: open the store, create the schema, wrap in state.
    pub async fn build(self) -> Result<AppState, AppError> {
        let conn = bootstrap_db(&self.db_settings).await?;
        Ok(AppState::new(conn, self.db_settings.query_timeout()))
    }
}

impl Default for StateBuilder {
    fn default() -> Self {
        Self::new()
    }
}

pub fn build_state() -> StateBuilder {
    StateBuilder::new()
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;

    #[tokio::test]
    async fn build_carries_query_timeout() {
        let state = build_state()
            .with_db(DbSettings::memory().with_query_timeout(Duration::from_millis(1234)))
            .build()
            .await
            .unwrap();
        assert_eq!(state.query_timeout(), Duration::from_millis(1234));
    }
}
