use std::time::Duration;

use sleeper::config::db::DbSettings;
use sleeper::infra::state::build_state;
use sleeper::{AppError, AppState};
use tempfile::TempDir;

/// AppState backed by a throwaway SQLite file; the file goes away with `dir`.
pub struct TestState {
    pub state: AppState,
    pub dir: TempDir,
}

pub async fn build_test_state() -> Result<TestState, AppError> {
    build_test_state_with(|settings| settings).await
}

pub async fn build_test_state_with<F>(tweak: F) -> Result<TestState, AppError>
where
    F: FnOnce(DbSettings) -> DbSettings,
{
    let dir = tempfile::tempdir().map_err(|e| AppError::internal(format!("tempdir: {e}")))?;
    let settings = tweak(
        DbSettings::file(dir.path().join("sleeper_test.db"))
            .with_query_timeout(Duration::from_secs(5)),
    );
    let state = build_state().with_db(settings).build().await?;
    Ok(TestState { state, dir })
}
