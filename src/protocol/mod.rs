//! Protocol engine: framing, message model, operation registry, telemetry
//! decoding.
//!
//! Layering (leaves first): [`codec`] reads and writes one framed message at
//! a time; [`payload`] and [`registry`] form the static operation registry
//! (type → schema, request → confirm); [`rpdo`] maps telemetry ids to typed
//! numeric values.

pub mod codec;
pub mod message;
pub mod payload;
pub mod registry;
pub mod rpdo;

pub use codec::{encode_message, read_message, write_message, CodecError};
pub use message::{Message, Uuid, UUID_LEN, UUID_VENDOR_PREFIX};
pub use payload::Payload;
