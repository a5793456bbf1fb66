//! Unified application error type.
//! All modules (source, core, cli, export) return AppError so callers see one
//! consistent error surface. Input validation failures are a separate value
//! type (`ValidationFailure`) that the caller can re-prompt on.

use std::fmt;
use std::io;
use thiserror::Error;

/// Input field a validation failure refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationField {
    Worker,
    Service,
    Earnings,
}

impl ValidationField {
    pub fn as_str(&self) -> &'static str {
        match self {
            ValidationField::Worker => "worker",
            ValidationField::Service => "service",
            ValidationField::Earnings => "earnings",
        }
    }
}

impl fmt::Display for ValidationField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Rejected user input: which field and what to tell the user.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("{field}: {message}")]
pub struct ValidationFailure {
    pub field: ValidationField,
    pub message: String,
}

impl ValidationFailure {
    pub fn new(field: ValidationField, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

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

    // ---------------------------
    // Ledger source
    // ---------------------------
    #[error("Ledger source unavailable: {0}")]
    SourceUnavailable(String),

    #[error("Unsupported ledger source format: {0}")]
    UnsupportedSource(String),

    // ---------------------------
    // Parsing / input
    // ---------------------------
    #[error("Invalid input ({0})")]
    Validation(#[from] ValidationFailure),

    #[error("Unknown worker: {0}")]
    UnknownWorker(String),

    #[error("Unknown column: {0}")]
    UnknownColumn(String),

    // ---------------------------
    // Identity
    // ---------------------------
    #[error("Authentication required: pass --user and --password")]
    AuthRequired,

    #[error("Invalid credentials for user '{0}'")]
    AuthFailed(String),

    #[error("Access denied: {0}")]
    AccessDenied(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to load configuration")]
    ConfigLoad,

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export error: {0}")]
    Export(String),
}

impl AppError {
    /// Only a failed source load is worth retrying as-is.
    pub fn is_retryable(&self) -> bool {
        matches!(self, AppError::SourceUnavailable(_))
    }
}

pub type AppResult<T> = Result<T, AppError>;
