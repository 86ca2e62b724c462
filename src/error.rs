//! Unified error types for folio.
//!
//! Library errors carry enough context to be actionable from a log line;
//! the binary wraps them in `anyhow` for display.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for folio operations.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum FolioError {
    /// IO errors with path context
    #[error("IO error at {path:?}: {message}")]
    Io {
        path: Option<PathBuf>,
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Preference file errors
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// Terminal setup and restore errors
    #[error("Terminal error: {0}")]
    Terminal(String),

    /// Report generation errors
    #[error("Report generation failed: {0}")]
    Report(String),
}

/// Convenient Result type for folio operations
pub type Result<T> = std::result::Result<T, FolioError>;

impl FolioError {
    /// Create an IO error with path context
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        let message = format!("{source}");
        Self::Io {
            path: Some(path),
            message,
            source,
        }
    }

    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Create a terminal error
    pub fn terminal(message: impl Into<String>) -> Self {
        Self::Terminal(message.into())
    }
}

impl From<std::io::Error> for FolioError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            path: None,
            message: format!("{err}"),
            source: err,
        }
    }
}

impl From<serde_json::Error> for FolioError {
    fn from(err: serde_json::Error) -> Self {
        Self::Report(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn io_error_mentions_path() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err = FolioError::io("/path/to/preferences.json", io_err);
        assert!(err.to_string().contains("/path/to/preferences.json"));
    }

    #[test]
    fn config_error_display() {
        let err = FolioError::config("unknown theme 'sepia'");
        assert!(err.to_string().contains("unknown theme"));
    }

    #[test]
    fn json_error_converts_to_report() {
        let parse_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: FolioError = parse_err.into();
        assert!(matches!(err, FolioError::Report(_)));
    }
}
