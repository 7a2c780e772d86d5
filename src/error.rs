//! Error types for todo
//!
//! Exit codes:
//! - 0: Success
//! - 2: User error (bad index, index out of range, bad config)
//! - 4: Operation failed (I/O, malformed task file)

use thiserror::Error;

/// Exit codes for the todo CLI
pub mod exit_codes {
    pub const USER_ERROR: i32 = 2;
    pub const OPERATION_FAILED: i32 = 4;
}

/// Main error type for todo operations
#[derive(Error, Debug)]
pub enum Error {
    // User errors (exit code 2)
    #[error("Unsupported index value: {0}")]
    InvalidIndex(String),

    #[error("No todo at position {position} (list has {count})")]
    OutOfRange { position: usize, count: usize },

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    // Operation failures (exit code 4)
    #[error("Malformed task file at line {line}: {reason}")]
    Parse { line: u64, reason: String },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("Could not determine a home directory for the task file")]
    DataDirUnavailable,
}

impl Error {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::InvalidIndex(_) | Error::OutOfRange { .. } | Error::InvalidConfig(_) => {
                exit_codes::USER_ERROR
            }

            Error::Parse { .. }
            | Error::Csv(_)
            | Error::Io(_)
            | Error::Json(_)
            | Error::TomlParse(_)
            | Error::DataDirUnavailable => exit_codes::OPERATION_FAILED,
        }
    }

    /// Machine-readable error class for JSON output
    pub fn kind(&self) -> &'static str {
        match self.exit_code() {
            exit_codes::USER_ERROR => "user_error",
            _ => "operation_failed",
        }
    }

    /// Structured details for JSON error output
    pub fn details(&self) -> Option<serde_json::Value> {
        match self {
            Error::OutOfRange { position, count } => Some(serde_json::json!({
                "position": position,
                "count": count,
            })),
            Error::Parse { line, .. } => Some(serde_json::json!({ "line": line })),
            _ => None,
        }
    }
}

/// Result type alias for todo operations
pub type Result<T> = std::result::Result<T, Error>;

/// Wrapper for displaying errors in JSON format
#[derive(serde::Serialize)]
pub struct JsonError {
    pub message: String,
    pub code: i32,
    pub kind: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl From<&Error> for JsonError {
    fn from(err: &Error) -> Self {
        JsonError {
            message: err.to_string(),
            code: err.exit_code(),
            kind: err.kind(),
            details: err.details(),
        }
    }
}
