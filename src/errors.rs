//! Shared error types for the application.
//!
//! Trimming itself never fails. These errors come from the edges: reading
//! configuration and input, writing output, parsing user-supplied platform
//! tags.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for frametrim operations
#[derive(Debug, Error)]
pub enum Error {
    /// File system related errors
    #[error("File system error: {message}")]
    FileSystem {
        message: String,
        path: Option<PathBuf>,
        #[source]
        source: Option<std::io::Error>,
    },

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Platform tag without trimming rules
    #[error("Unknown platform '{0}' (expected one of: native, c, csharp, cocoa, swift, objc)")]
    UnknownPlatform(String),

    /// JSON errors
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// TOML errors
    #[error(transparent)]
    Toml(#[from] toml::de::Error),
}

impl Error {
    /// Wrap an I/O error with the path it happened on
    pub fn io_at(source: std::io::Error, path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        Self::FileSystem {
            message: format!("{}: {}", path.display(), source),
            path: Some(path),
            source: Some(source),
        }
    }

    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Configuration(message.into())
    }
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_at_mentions_path() {
        let err = Error::io_at(
            std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
            "/tmp/frames.txt",
        );

        assert!(err.to_string().contains("/tmp/frames.txt"));
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_unknown_platform_lists_known_tags() {
        let message = Error::UnknownPlatform("go".into()).to_string();
        assert!(message.contains("'go'"));
        assert!(message.contains("csharp"));
    }

    #[test]
    fn test_json_errors_convert_transparently() {
        let source = serde_json::from_str::<u32>("not json").unwrap_err();
        let expected = source.to_string();

        let err: Error = source.into();
        assert!(matches!(err, Error::Json(_)));
        assert_eq!(err.to_string(), expected);
    }
}
