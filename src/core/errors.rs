//! Shared error types for the application

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for gradecalc operations
#[derive(Debug, Error)]
pub enum Error {
    /// A grade outside the 1..=6 scale reached a typed boundary
    #[error("Invalid grade {0}: grades must be between 1 and 6")]
    InvalidGrade(u8),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// File system related errors
    #[error("File system error at {}: {source}", path.display())]
    FileSystem {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    /// Create a file system error with path context
    pub fn file_system(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::FileSystem {
            path: path.into(),
            source,
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration(message.into())
    }
}

/// Result type alias using our error type
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_grade_message_names_the_value() {
        let err = Error::InvalidGrade(7);
        assert_eq!(
            err.to_string(),
            "Invalid grade 7: grades must be between 1 and 6"
        );
    }

    #[test]
    fn file_system_error_keeps_source() {
        use std::error::Error as _;

        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err = Error::file_system("/tmp/.gradecalc.toml", io);
        assert!(err.to_string().contains("/tmp/.gradecalc.toml"));
        assert!(err.source().is_some());
    }
}
