//! Discovery error types.

use std::io;

use thiserror::Error;

/// Errors raised by the discovery client and responder.
#[derive(Debug, Error)]
pub enum DiscoveryError {
    /// Gateway host name or address did not resolve.
    #[error("failed to resolve gateway address {host}: {reason}")]
    ResolveFailed { host: String, reason: String },

    /// Sending the probe datagram failed.
    #[error("failed to send discovery probe: {0}")]
    WriteFailed(io::Error),

    /// No reply datagram arrived, or receiving it failed.
    #[error("failed to read discovery reply: {reason}")]
    ReadFailed { reason: String },

    /// The reply datagram did not decode as a gateway announcement.
    #[error("failed to decode discovery reply: {reason}")]
    DecodeFailed { reason: String },

    /// Binding the responder socket failed.
    #[error("failed to bind discovery responder: {0}")]
    BindFailed(io::Error),
}

impl DiscoveryError {
    /// Discovery failures are recoverable; session creation retries them
    /// after the reconnect backoff.
    #[must_use]
    pub const fn is_recoverable(&self) -> bool {
        !matches!(self, Self::BindFailed(_))
    }
}
