use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    /// User-facing validation message, rendered verbatim.
    #[error("{0}")]
    InvalidInput(String),

    #[error("Email is already registered.")]
    EmailTaken,

    #[error("Content check failed. {0}")]
    ContentCheckFailed(String),

    #[error("database schema version {db_version} is newer than supported {latest_supported}")]
    UnsupportedSchemaVersion {
        db_version: u32,
        latest_supported: u32,
    },

    #[error("password hashing failed: {0}")]
    PasswordHash(String),

    #[error(transparent)]
    Db(#[from] rusqlite::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl CoreError {
    pub fn invalid(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }
}

pub type Result<T> = std::result::Result<T, CoreError>;
