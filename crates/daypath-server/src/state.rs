use crate::error::AppError;
use daypath_core::config::Config;
use daypath_core::db::open_db;
use daypath_core::seed::ensure_content_seeded;
use rusqlite::Connection;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Shared application state passed to all route handlers.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    seeded: Arc<AtomicBool>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            config: Arc::new(config),
            seeded: Arc::new(AtomicBool::new(false)),
        }
    }

    pub fn is_seeded(&self) -> bool {
        self.seeded.load(Ordering::Acquire)
    }

    /// Run `f` against a fresh connection on the blocking pool. Content is
    /// seeded before the first call that succeeds.
    pub async fn with_conn<T, F>(&self, f: F) -> Result<T, AppError>
    where
        F: FnOnce(&Connection, &Config) -> daypath_core::Result<T> + Send + 'static,
        T: Send + 'static,
    {
        let config = Arc::clone(&self.config);
        let seeded = Arc::clone(&self.seeded);
        let result = tokio::task::spawn_blocking(move || {
            let conn = open_db(&config.db_path)?;
            if !seeded.load(Ordering::Acquire) {
                ensure_content_seeded(&conn)?;
                seeded.store(true, Ordering::Release);
            }
            f(&conn, &config)
        })
        .await
        .map_err(|e| AppError(anyhow::anyhow!("task join error: {e}")))??;
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn first_call_seeds_content() {
        let dir = TempDir::new().unwrap();
        let state = AppState::new(Config::default().with_db_path(dir.path().join("t.db")));
        assert!(!state.is_seeded());
        let lessons: i64 = state
            .with_conn(|conn, _| {
                Ok(conn.query_row("SELECT COUNT(*) FROM lessons", [], |r| r.get(0))?)
            })
            .await
            .unwrap();
        assert_eq!(lessons, 84);
        assert!(state.is_seeded());
    }
}
