//! Error types for file-facing operations.
//!
//! Graph construction, coloring and validation never fail; only loading
//! and saving data can.

use std::path::PathBuf;

use thiserror::Error;

/// Errors from reading or writing schedule data.
#[derive(Debug, Error)]
pub enum ScheduleError {
    /// File could not be read or written
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Malformed CSV input
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Malformed JSON input
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Malformed TOML configuration
    #[error("Config error: {0}")]
    Config(#[from] toml::de::Error),

    /// File extension not recognized
    #[error("Unsupported file format: {}", .0.display())]
    UnsupportedFormat(PathBuf),

    /// A required CSV header is absent
    #[error("Missing column '{0}'")]
    MissingColumn(String),
}

impl ScheduleError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// Result type alias for file-facing operations.
pub type Result<T> = std::result::Result<T, ScheduleError>;
