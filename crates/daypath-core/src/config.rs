use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DEFAULT_CONFIG_FILE: &str = "daypath.yaml";

// ---------------------------------------------------------------------------
// Config
// ---------------------------------------------------------------------------

/// Runtime settings, loaded from `daypath.yaml` when present.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_db_path")]
    pub db_path: PathBuf,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default = "default_session_ttl_days")]
    pub session_ttl_days: i64,
    #[serde(default = "default_min_password_len")]
    pub min_password_len: usize,
    /// PBKDF2-SHA256 iterations for new password hashes.
    #[serde(default = "default_password_hash_rounds")]
    pub password_hash_rounds: u32,
}

fn default_db_path() -> PathBuf {
    PathBuf::from("daypath.db")
}

fn default_port() -> u16 {
    3141
}

fn default_session_ttl_days() -> i64 {
    7
}

fn default_min_password_len() -> usize {
    6
}

fn default_password_hash_rounds() -> u32 {
    100_000
}

impl Default for Config {
    fn default() -> Self {
        Self {
            db_path: default_db_path(),
            port: default_port(),
            session_ttl_days: default_session_ttl_days(),
            min_password_len: default_min_password_len(),
            password_hash_rounds: default_password_hash_rounds(),
        }
    }
}

impl Config {
    /// Load from `path`. A missing file yields the defaults.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let data = std::fs::read_to_string(path)?;
        let cfg: Config = serde_yaml::from_str(&data)?;
        Ok(cfg)
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let data = serde_yaml::to_string(self)?;
        std::fs::write(path, data)?;
        Ok(())
    }

    pub fn with_db_path(mut self, db_path: impl Into<PathBuf>) -> Self {
        self.db_path = db_path.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn missing_file_gives_defaults() {
        let dir = TempDir::new().unwrap();
        let cfg = Config::load(&dir.path().join("nope.yaml")).unwrap();
        assert_eq!(cfg, Config::default());
        assert_eq!(cfg.session_ttl_days, 7);
        assert_eq!(cfg.min_password_len, 6);
    }

    #[test]
    fn partial_file_fills_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(DEFAULT_CONFIG_FILE);
        std::fs::write(&path, "port: 8080\ndb_path: /tmp/x.db\n").unwrap();
        let cfg = Config::load(&path).unwrap();
        assert_eq!(cfg.port, 8080);
        assert_eq!(cfg.db_path, PathBuf::from("/tmp/x.db"));
        assert_eq!(cfg.password_hash_rounds, 100_000);
    }

    #[test]
    fn save_then_load() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(DEFAULT_CONFIG_FILE);
        let cfg = Config {
            port: 9000,
            ..Config::default()
        };
        cfg.save(&path).unwrap();
        assert_eq!(Config::load(&path).unwrap(), cfg);
    }
}
