//! Error types for ytmfetch
//!
//! Errors in this module are the *fatal* kind: a broken configuration, a
//! manifest that cannot be loaded, or a failure to run an external tool.
//! Per-entry problems found while walking a manifest are never raised as
//! errors; they are recorded as [`JobOutcome`](crate::types::JobOutcome)s
//! and logged, so one bad entry cannot stop the batch.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for ytmfetch operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for ytmfetch
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration error with context about which setting is invalid
    #[error("configuration error: {message}")]
    Config {
        /// Human-readable error message describing the configuration issue
        message: String,
        /// The configuration key that caused the error (e.g., "base_dir")
        key: Option<String>,
    },

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The songs manifest does not exist
    #[error("songs file not found: {}", path.display())]
    ManifestNotFound {
        /// Path that was looked up
        path: PathBuf,
    },

    /// The songs manifest exists but cannot be used
    #[error("invalid songs file {}: {reason}", path.display())]
    InvalidManifest {
        /// Path of the offending manifest (empty when parsed from memory)
        path: PathBuf,
        /// Why the manifest was rejected
        reason: String,
    },

    /// External tool execution failed (yt-dlp, ffmpeg)
    #[error("external tool error: {0}")]
    ExternalTool(String),

    /// Operation not supported (missing binary, etc.)
    #[error("not supported: {0}")]
    NotSupported(String),
}

impl Error {
    /// Shorthand for a [`Error::Config`] tied to a configuration key
    pub fn config(key: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
            key: Some(key.into()),
        }
    }

    /// Process exit code for this error.
    ///
    /// Follows sysexits.h where a category fits:
    /// - 65 (`EX_DATAERR`): manifest could not be parsed
    /// - 66 (`EX_NOINPUT`): manifest file missing
    /// - 74 (`EX_IOERR`): I/O failure
    /// - 78 (`EX_CONFIG`): invalid configuration
    /// - 1: anything else
    pub fn exit_code(&self) -> u8 {
        match self {
            Error::InvalidManifest { .. } | Error::Serialization(_) => 65,
            Error::ManifestNotFound { .. } => 66,
            Error::Io(_) => 74,
            Error::Config { .. } => 78,
            Error::ExternalTool(_) | Error::NotSupported(_) => 1,
        }
    }
}
