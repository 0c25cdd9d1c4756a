//! quotidian - A small HTTP service for your daily quota of inspiration
//!
//! Generates short inspirational quotes with a local llama.cpp model and
//! keeps them in SQLite.

pub mod api;
pub mod config;
pub mod llm;
pub mod quotes;
pub mod storage;

use thiserror::Error;

/// Main error type for quotidian
#[derive(Error, Debug)]
pub enum QuotidianError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Could not connect to completion backend: {0}")]
    BackendUnreachable(String),

    #[error("Completion backend returned status {status}")]
    BackendStatus { status: u16 },

    #[error("Database connection failed: {0}")]
    DatabaseUnavailable(String),

    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, QuotidianError>;

/// Application version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name
pub const APP_NAME: &str = "quotidian";
