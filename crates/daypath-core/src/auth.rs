//! Accounts and login sessions.
//!
//! Passwords are stored as PBKDF2-SHA256 PHC strings. Session cookies carry
//! a random token; only its SHA-256 digest is stored.

use crate::config::Config;
use crate::error::{CoreError, Result};
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use chrono::{DateTime, Duration, Utc};
use pbkdf2::password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString};
use pbkdf2::{Params, Pbkdf2};
use rand::RngCore;
use rusqlite::{params, Connection, OptionalExtension};
use sha2::{Digest, Sha256};

const TOKEN_BYTES: usize = 32;
const SALT_BYTES: usize = 16;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: i64,
    pub email: String,
}

pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

// ---------------------------------------------------------------------------
// Users
// ---------------------------------------------------------------------------

pub fn create_user(conn: &Connection, cfg: &Config, email: &str, password: &str) -> Result<User> {
    let email = normalize_email(email);
    if email.is_empty() || password.is_empty() {
        return Err(CoreError::invalid("Email and password are required."));
    }
    if password.chars().count() < cfg.min_password_len {
        return Err(CoreError::invalid(format!(
            "Password must be at least {} characters.",
            cfg.min_password_len
        )));
    }

    let exists: Option<i64> = conn
        .query_row("SELECT id FROM users WHERE email = ?1", [&email], |r| r.get(0))
        .optional()?;
    if exists.is_some() {
        return Err(CoreError::EmailTaken);
    }

    let hash = hash_password(password, cfg.password_hash_rounds)?;
    conn.execute(
        "INSERT INTO users (email, password_hash, created_at) VALUES (?1, ?2, ?3)",
        params![email, hash, Utc::now()],
    )?;
    let id = conn.last_insert_rowid();
    tracing::info!(user_id = id, "registered user");
    Ok(User { id, email })
}

/// Check credentials. Unknown e-mail and wrong password are indistinguishable.
/// `Ok(None)` for an unknown e-mail or a wrong password.
pub fn verify_user(conn: &Connection, email: &str, password: &str) -> Result<Option<User>> {
    let email = normalize_email(email);
    if email.is_empty() || password.is_empty() {
        return Err(CoreError::invalid("Email and password are required."));
    }
    let row: Option<(i64, String)> = conn
        .query_row(
            "SELECT id, password_hash FROM users WHERE email = ?1",
            [&email],
            |r| Ok((r.get(0)?, r.get(1)?)),
        )
        .optional()?;
    let Some((id, stored)) = row else {
        return Ok(None);
    };
    if verify_password(password, &stored) {
        Ok(Some(User { id, email }))
    } else {
        Ok(None)
    }
}

fn hash_password(password: &str, rounds: u32) -> Result<String> {
    let mut salt_bytes = [0u8; SALT_BYTES];
    rand::thread_rng().fill_bytes(&mut salt_bytes);
    let salt =
        SaltString::encode_b64(&salt_bytes).map_err(|e| CoreError::PasswordHash(e.to_string()))?;
    let params = Params {
        rounds,
        output_length: 32,
    };
    let hash = Pbkdf2
        .hash_password_customized(password.as_bytes(), None, None, params, &salt)
        .map_err(|e| CoreError::PasswordHash(e.to_string()))?;
    Ok(hash.to_string())
}

fn verify_password(password: &str, stored: &str) -> bool {
    match PasswordHash::new(stored) {
        Ok(parsed) => Pbkdf2.verify_password(password.as_bytes(), &parsed).is_ok(),
        Err(e) => {
            tracing::warn!("unreadable password hash: {e}");
            false
        }
    }
}

// ---------------------------------------------------------------------------
// Sessions
// ---------------------------------------------------------------------------

/// A freshly issued session. `token` goes into the cookie.
#[derive(Debug, Clone)]
pub struct NewSession {
    pub token: String,
    pub expires_at: DateTime<Utc>,
}

fn token_digest(token: &str) -> String {
    URL_SAFE_NO_PAD.encode(Sha256::digest(token.as_bytes()))
}

pub fn create_session(
    conn: &Connection,
    cfg: &Config,
    user_id: i64,
    now: DateTime<Utc>,
) -> Result<NewSession> {
    let mut bytes = [0u8; TOKEN_BYTES];
    rand::thread_rng().fill_bytes(&mut bytes);
    let token = URL_SAFE_NO_PAD.encode(bytes);
    let expires_at = now + Duration::days(cfg.session_ttl_days);
    conn.execute(
        "INSERT INTO sessions (id, user_id, expires_at, created_at) VALUES (?1, ?2, ?3, ?4)",
        params![token_digest(&token), user_id, expires_at, now],
    )?;
    Ok(NewSession { token, expires_at })
}

/// User owning a live session. Expired sessions are removed.
pub fn session_user(conn: &Connection, token: &str, now: DateTime<Utc>) -> Result<Option<User>> {
    if token.is_empty() {
        return Ok(None);
    }
    let digest = token_digest(token);
    let row: Option<(i64, String, DateTime<Utc>)> = conn
        .query_row(
            "SELECT u.id, u.email, s.expires_at
             FROM sessions s JOIN users u ON u.id = s.user_id
             WHERE s.id = ?1",
            [&digest],
            |r| Ok((r.get(0)?, r.get(1)?, r.get(2)?)),
        )
        .optional()?;
    match row {
        Some((id, email, expires_at)) if expires_at > now => Ok(Some(User { id, email })),
        Some(_) => {
            conn.execute("DELETE FROM sessions WHERE id = ?1", [&digest])?;
            tracing::debug!("dropped expired session");
            Ok(None)
        }
        None => Ok(None),
    }
}

pub fn delete_session(conn: &Connection, token: &str) -> Result<()> {
    conn.execute("DELETE FROM sessions WHERE id = ?1", [token_digest(token)])?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::open_db_in_memory;

    fn cfg() -> Config {
        Config {
            password_hash_rounds: 1_000,
            ..Config::default()
        }
    }

    #[test]
    fn register_then_login() {
        let conn = open_db_in_memory().unwrap();
        let user = create_user(&conn, &cfg(), "  Ada@Example.COM ", "secret1").unwrap();
        assert_eq!(user.email, "ada@example.com");

        let found = verify_user(&conn, "ada@example.com", "secret1").unwrap();
        assert_eq!(found, Some(user));
        assert_eq!(verify_user(&conn, "ada@example.com", "wrong!!").unwrap(), None);
        assert_eq!(verify_user(&conn, "bob@example.com", "secret1").unwrap(), None);

        let err = verify_user(&conn, "  ", "secret1").unwrap_err();
        assert_eq!(err.to_string(), "Email and password are required.");
        assert!(matches!(
            verify_user(&conn, "ada@example.com", "").unwrap_err(),
            CoreError::InvalidInput(_)
        ));
    }

    #[test]
    fn registration_rules() {
        let conn = open_db_in_memory().unwrap();
        let err = create_user(&conn, &cfg(), "", "secret1").unwrap_err();
        assert_eq!(err.to_string(), "Email and password are required.");
        let err = create_user(&conn, &cfg(), "a@b.c", "abc").unwrap_err();
        assert_eq!(err.to_string(), "Password must be at least 6 characters.");

        create_user(&conn, &cfg(), "a@b.c", "secret1").unwrap();
        let err = create_user(&conn, &cfg(), "A@B.C", "secret2").unwrap_err();
        assert!(matches!(err, CoreError::EmailTaken));
    }

    #[test]
    fn stored_hash_is_phc() {
        let hash = hash_password("secret1", 1_000).unwrap();
        assert!(hash.starts_with("$pbkdf2-sha256$"));
        assert!(verify_password("secret1", &hash));
        assert!(!verify_password("secret1", "not-a-hash"));
    }

    #[test]
    fn session_lifecycle() {
        let conn = open_db_in_memory().unwrap();
        let user = create_user(&conn, &cfg(), "a@b.c", "secret1").unwrap();
        let now = Utc::now();
        let session = create_session(&conn, &cfg(), user.id, now).unwrap();

        let stored: String = conn
            .query_row("SELECT id FROM sessions", [], |r| r.get(0))
            .unwrap();
        assert_ne!(stored, session.token);

        assert_eq!(
            session_user(&conn, &session.token, now).unwrap(),
            Some(user.clone())
        );
        delete_session(&conn, &session.token).unwrap();
        assert_eq!(session_user(&conn, &session.token, now).unwrap(), None);
    }

    #[test]
    fn expired_session_is_removed() {
        let conn = open_db_in_memory().unwrap();
        let user = create_user(&conn, &cfg(), "a@b.c", "secret1").unwrap();
        let now = Utc::now();
        let session = create_session(&conn, &cfg(), user.id, now).unwrap();

        let later = now + Duration::days(8);
        assert_eq!(session_user(&conn, &session.token, later).unwrap(), None);
        let left: i64 = conn
            .query_row("SELECT COUNT(*) FROM sessions", [], |r| r.get(0))
            .unwrap();
        assert_eq!(left, 0);
    }
}
