#![allow(dead_code)]

use thiserror::Error;

/// Application-level error type.
///
/// Config and content-bank errors are fatal at startup, before any posting
/// is processed. Persistence errors are per-posting: the runner reports them
/// and moves on to the next posting.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Content bank error: {0}")]
    ContentBank(String),

    #[error("Persistence error: {0}")]
    Persistence(String),

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}
