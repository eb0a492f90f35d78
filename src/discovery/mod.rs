//! UDP discovery: gateway impersonation and gateway lookup.
//!
//! The responder answers broadcast probes on the protocol port so that apps
//! find the proxy; the client sends the same probe to the real gateway to
//! learn its identifier before a session is established. The two sides share
//! only the probe/reply constants.

pub mod client;
pub mod error;
pub mod responder;

pub use client::{discover, discover_gateway};
pub use error::DiscoveryError;
pub use responder::{encode_search_gateway_response, DiscoveryResponder};

/// Well-known UDP/TCP port of the gateway protocol.
pub const DISCOVERY_PORT: u16 = 56747;

/// Wake-up probe sent by apps (and by the discovery client).
pub const PROBE: [u8; 2] = [0x0a, 0x00];

/// Wrapper header bytes preceding the encoded `SearchGatewayResponse`,
/// matching observed gateway firmware output.
pub const RESPONSE_HEADER: [u8; 2] = [0x12, 0x24];

/// Length of [`RESPONSE_HEADER`].
pub const RESPONSE_HEADER_LEN: usize = 2;

/// Protocol version announced in discovery replies.
pub const SEARCH_GATEWAY_VERSION: u32 = 1;
