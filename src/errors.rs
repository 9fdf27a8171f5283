//! Unified application error type.
//! All modules (store, core, db, cli, export) return AppError to keep the error
//! handling consistent and easy to manage.

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
    // State database
    // ---------------------------
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    // ---------------------------
    // Serialization
    // ---------------------------
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid date format: {0} (expected YYYY-MM-DD)")]
    InvalidDate(String),

    #[error("Invalid floor: {0}")]
    InvalidFloor(String),

    #[error("Invalid value '{value}' for {field} (allowed: {allowed})")]
    InvalidFilter {
        field: &'static str,
        value: String,
        allowed: String,
    },

    #[error("Invalid record: {0}")]
    InvalidRecord(String),

    // ---------------------------
    // Session errors
    // ---------------------------
    #[error("Not logged in. Run `hospitrack login` first")]
    NotAuthenticated,

    #[error("Wrong password. Please try again")]
    InvalidCredentials,

    // ---------------------------
    // Lookup errors
    // ---------------------------
    #[error("No asset or patient with id {0}")]
    NotFound(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export error: {0}")]
    Export(String),
}

pub type AppResult<T> = Result<T, AppError>;
