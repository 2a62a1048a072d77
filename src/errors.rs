//! Unified application error type.
//! All modules (db, core, source, cli) return AppError so the sync run
//! surfaces one consistent error to the caller.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // Sync pipeline
    // ---------------------------
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Extraction failed: {0}")]
    Extraction(String),

    #[error("Transformation failed: {0}")]
    Transformation(String),

    #[error("Load failed (rolled back): {0}")]
    Load(String),

    // ---------------------------
    // IO / storage
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    // ---------------------------
    // Serialization
    // ---------------------------
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid date: {0}")]
    InvalidDate(String),

    #[error("Invalid range: {0}")]
    InvalidRange(String),

    #[error("Invalid week count {0}: must be at least 1")]
    InvalidWeeks(i64),

    // ---------------------------
    // Config file
    // ---------------------------
    #[error("Config file error: {0}")]
    Config(String),

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export error: {0}")]
    Export(String),
}

pub type AppResult<T> = Result<T, AppError>;
