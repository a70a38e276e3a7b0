//! SQLite connection bootstrap.
//!
//! Every connection handed out here has `foreign_keys=ON` and the schema
//! fully migrated. Nothing reads application tables before that.

pub mod migrations;

use crate::error::Result;
use rusqlite::Connection;
use std::path::Path;
use std::time::Duration;

/// Open (or create) the database file at `path`.
pub fn open_db(path: impl AsRef<Path>) -> Result<Connection> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    let mut conn = Connection::open(path)?;
    bootstrap(&mut conn)?;
    Ok(conn)
}

pub fn open_db_in_memory() -> Result<Connection> {
    let mut conn = Connection::open_in_memory()?;
    bootstrap(&mut conn)?;
    Ok(conn)
}

fn bootstrap(conn: &mut Connection) -> Result<()> {
    conn.execute_batch("PRAGMA foreign_keys = ON;")?;
    conn.busy_timeout(Duration::from_secs(5))?;
    migrations::apply_migrations(conn)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CoreError;
    use tempfile::TempDir;

    #[test]
    fn fresh_db_is_at_latest_version() {
        let conn = open_db_in_memory().unwrap();
        assert_eq!(
            migrations::current_user_version(&conn).unwrap(),
            migrations::latest_version()
        );
        let fk: i64 = conn
            .query_row("PRAGMA foreign_keys;", [], |r| r.get(0))
            .unwrap();
        assert_eq!(fk, 1);
    }

    #[test]
    fn reopening_a_file_is_a_noop() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested/app.db");
        drop(open_db(&path).unwrap());
        let conn = open_db(&path).unwrap();
        let tables: i64 = conn
            .query_row(
                "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = 'lessons'",
                [],
                |r| r.get(0),
            )
            .unwrap();
        assert_eq!(tables, 1);
    }

    #[test]
    fn newer_schema_is_rejected() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("future.db");
        {
            let conn = Connection::open(&path).unwrap();
            conn.execute_batch("PRAGMA user_version = 99;").unwrap();
        }
        let err = open_db(&path).unwrap_err();
        assert!(matches!(
            err,
            CoreError::UnsupportedSchemaVersion { db_version: 99, .. }
        ));
    }
}
