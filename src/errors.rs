//! Unified application error type.
//! Everything around the extraction core (store, config, cli, backup, export)
//! returns AppError. The extractor and the sort key never fail: missing
//! signals degrade to empty fields or to the late-sort sentinel.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO / serialization
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("ZIP error: {0}")]
    Zip(#[from] zip::result::ZipError),

    // ---------------------------
    // Collection errors
    // ---------------------------
    #[error("No event at position {index} (collection has {len} events)")]
    InvalidIndex { index: usize, len: usize },

    #[error("Invalid field name: {0}")]
    InvalidField(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to load configuration")]
    ConfigLoad,

    #[error("Failed to save configuration")]
    ConfigSave,

    // ---------------------------
    // Import / backup / export
    // ---------------------------
    #[error("Import error: {0}")]
    Import(String),

    #[error("Backup error: {0}")]
    Backup(String),

    #[error("Export error: {0}")]
    Export(String),

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

pub type AppResult<T> = Result<T, AppError>;
