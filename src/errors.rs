//! Unified application error type.
//! All modules (store, core, cli, export) return AppError so that the
//! shell has a single place to render failures.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Store-related
    // ---------------------------
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error("Invalid transaction status: {0}")]
    InvalidStatus(String),

    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    // ---------------------------
    // Session / permission errors
    // ---------------------------
    /// Fixed message shown for any failed login.
    #[error("Username atau password salah.")]
    InvalidCredentials,

    #[error("Not logged in. Run `repairdesk login <username> <password>` first")]
    NotLoggedIn,

    #[error("Permission denied: {0}")]
    PermissionDenied(String),

    // ---------------------------
    // Logic errors
    // ---------------------------
    #[error("Unknown damage reference: {0}")]
    UnknownDamageReference(String),

    #[error("Not found: {0}")]
    NotFound(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Export error: {0}")]
    Export(String),

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

pub type AppResult<T> = Result<T, AppError>;
