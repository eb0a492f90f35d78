//! Error types for the proxy.
//!
//! Errors are categorized by subsystem; connection-scoped errors stay
//! contained to their connection, session-scoped errors trigger upstream
//! reconnection, and configuration errors fail fast at startup.

use std::io;

use thiserror::Error;

use crate::discovery::DiscoveryError;
use crate::protocol::CodecError;
use crate::session::SessionError;

/// Top-level error type.
#[derive(Debug, Error)]
pub enum ProxyError {
    /// Configuration errors (file parsing, validation).
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Frame codec errors.
    #[error("codec error: {0}")]
    Codec(#[from] CodecError),

    /// Discovery errors.
    #[error("discovery error: {0}")]
    Discovery(#[from] DiscoveryError),

    /// Upstream session errors.
    #[error("session error: {0}")]
    Session(#[from] SessionError),

    /// I/O errors not covered by other categories.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl ProxyError {
    /// Whether the operation may be retried.
    #[must_use]
    pub fn is_recoverable(&self) -> bool {
        match self {
            Self::Config(_) => false,
            Self::Codec(e) => !e.is_malformed(),
            Self::Discovery(e) => e.is_recoverable(),
            Self::Session(e) => e.is_recoverable(),
            Self::Io(e) => matches!(
                e.kind(),
                io::ErrorKind::TimedOut
                    | io::ErrorKind::Interrupted
                    | io::ErrorKind::WouldBlock
                    | io::ErrorKind::ConnectionReset
            ),
        }
    }
}

/// Configuration-related errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// File not found or inaccessible.
    #[error("configuration file not found: {path}")]
    FileNotFound { path: String },

    /// JSON parsing error.
    #[error("failed to parse configuration: {0}")]
    ParseError(String),

    /// Validation error (invalid values, missing required fields).
    #[error("configuration validation failed: {0}")]
    ValidationError(String),

    /// Environment variable error.
    #[error("environment variable error: {name}: {reason}")]
    EnvError { name: String, reason: String },

    /// I/O error while reading the config file.
    #[error("I/O error reading configuration: {0}")]
    IoError(#[from] io::Error),
}

impl ConfigError {
    /// Config errors require user intervention; nothing to retry.
    #[must_use]
    pub const fn is_recoverable(&self) -> bool {
        false
    }
}

/// Type alias for Result with [`ProxyError`].
pub type Result<T> = std::result::Result<T, ProxyError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_errors_are_fatal() {
        let err = ConfigError::ValidationError("bad".into());
        assert!(!err.is_recoverable());
        let err: ProxyError = err.into();
        assert!(!err.is_recoverable());
    }

    #[test]
    fn test_session_errors_are_recoverable() {
        let err: ProxyError = SessionError::Disconnected.into();
        assert!(err.is_recoverable());
    }

    #[test]
    fn test_malformed_frames_are_fatal_for_their_connection() {
        let err: ProxyError = CodecError::InvalidLength { length: 99_999 }.into();
        assert!(!err.is_recoverable());
    }
}
