pub mod auth;
pub mod checkpoints;
pub mod config;
pub mod content;
pub mod db;
pub mod error;
pub mod lessons;
pub mod library;
pub mod patterns;
pub mod progress;
pub mod seed;
pub mod skill_checks;
pub mod visual;

pub use error::{CoreError, Result};
