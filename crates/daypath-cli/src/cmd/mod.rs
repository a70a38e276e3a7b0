pub mod content_check;
pub mod seed;
pub mod serve;

use anyhow::{Context, Result};
use daypath_core::config::{Config, DEFAULT_CONFIG_FILE};
use std::path::Path;

/// Config from `path` (or `./daypath.yaml`), with `--db` applied on top.
pub fn load_config(path: Option<&Path>, db: Option<&Path>) -> Result<Config> {
    let path = path.unwrap_or(Path::new(DEFAULT_CONFIG_FILE));
    let config = Config::load(path).with_context(|| format!("loading {}", path.display()))?;
    Ok(match db {
        Some(db) => config.with_db_path(db),
        None => config,
    })
}
