//! Error types for the portlaunch-core library.

use thiserror::Error;

/// Result type alias for portlaunch operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while finding a port or launching the web UI.
#[derive(Error, Debug)]
pub enum Error {
    /// Every candidate in the scanned range already had a listener.
    #[error("No available port in {start}-{end} ({attempts} attempts)")]
    NoAvailablePort { start: u16, end: u16, attempts: u32 },

    /// The external process could not be started.
    #[error("Failed to start {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Returns true if this error signals an exhausted port range.
    pub fn is_exhausted(&self) -> bool {
        matches!(self, Error::NoAvailablePort { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_available_port_message() {
        let err = Error::NoAvailablePort {
            start: 8080,
            end: 8084,
            attempts: 5,
        };
        assert!(err.is_exhausted());
        assert_eq!(
            err.to_string(),
            "No available port in 8080-8084 (5 attempts)"
        );
    }

    #[test]
    fn test_spawn_keeps_source() {
        use std::error::Error as _;

        let err = Error::Spawn {
            program: "streamlit".to_string(),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
        };
        assert!(!err.is_exhausted());
        assert!(err.to_string().starts_with("Failed to start streamlit"));
        assert!(err.source().is_some());
    }
}
