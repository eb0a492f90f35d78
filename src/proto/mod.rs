//! Vendored protobuf bindings for the ComfoConnect LAN C wire protocol.
//!
//! The schemas are fixed by the gateway firmware and form the compatibility
//! contract of the proxy. The bindings are generated with `prost-build` from
//! `zehnder.proto` and checked in so that building the crate does not require
//! `protoc`. Regenerate with `prost-build` if the upstream definitions ever
//! change — do not edit `zehnder.rs` by hand.

#[allow(clippy::doc_markdown, clippy::large_enum_variant)]
mod zehnder;

pub use zehnder::*;

/// Operation type tag of the envelope, re-exported for convenience.
pub use zehnder::gateway_operation::{GatewayResult, OperationType};
