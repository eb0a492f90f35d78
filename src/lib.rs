//! comfo-proxy: transparent proxy for a ComfoConnect LAN C ventilation
//! gateway.
//!
//! The gateway accepts a single registered client at a time. This crate sits
//! between any number of apps and the gateway: it impersonates the gateway
//! on the local network so apps discover the proxy, keeps one persistent
//! authenticated session with the real gateway, and forwards messages in
//! both directions while rewriting source and destination identifiers.
//! Session-establishment handshakes from apps are answered locally and
//! never reach the gateway.
//!
//! # Architecture
//!
//! ```text
//! App ──UDP discovery──▶ DiscoveryResponder
//! App ◀──TCP 56747───▶ AppConn ◀──▶ Router ◀──▶ UpstreamSession ◀──▶ Gateway
//!                                     │
//!                                 MetricsSink (Prometheus)
//! ```
//!
//! # Modules
//!
//! - [`config`]: Configuration types and loading
//! - [`discovery`]: UDP gateway impersonation and gateway lookup
//! - [`error`]: Error types
//! - [`proto`]: Vendored protobuf bindings (wire contract)
//! - [`protocol`]: Frame codec, message model, operation registry, PDO decoding
//! - [`proxy`]: App listener, connection handlers, router
//! - [`session`]: Upstream session state machine and keep-alive
//! - [`telemetry`]: Metrics sink interface and Prometheus implementation

#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]

pub mod config;
pub mod discovery;
pub mod error;
pub mod proto;
pub mod protocol;
pub mod proxy;
pub mod session;
pub mod telemetry;

// Re-export commonly used types at the crate root
pub use config::{load_config, load_config_with_env, Config};
pub use discovery::{discover_gateway, DiscoveryError, DiscoveryResponder};
pub use error::{ConfigError, ProxyError};
pub use protocol::{encode_message, read_message, write_message, CodecError, Message, Payload, Uuid};
pub use proxy::{AppListener, Router, RouterEvent, RouterHandle};
pub use session::{SessionConfig, SessionError, SessionState, UpstreamSession};
pub use telemetry::{MetricsSink, NoopSink, PrometheusSink, RecordingSink};

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
