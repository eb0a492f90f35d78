//! Message model for the framed gateway protocol.
//!
//! A [`Message`] is one protocol unit: a source and destination identifier,
//! the operation envelope (type tag, reference counter, optional result) and
//! a typed payload. Messages are immutable once parsed except for the
//! deliberate src/dst rewriting performed by the router.

use std::fmt;
use std::str::FromStr;

use crate::proto::{GatewayOperation, GatewayResult, OperationType};

use super::payload::Payload;

/// Length of a network identifier in bytes.
pub const UUID_LEN: usize = 16;

/// Fixed vendor prefix of the proxy's synthetic identity. The remaining six
/// bytes are a MAC-like suffix supplied at startup.
pub const UUID_VENDOR_PREFIX: [u8; 10] = [
    0x00, 0x00, 0x00, 0x00, 0x00, 0x25, 0x10, 0x10, 0x80, 0x01,
];

/// A 16-byte opaque network identifier used as src/dst in every message.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Uuid([u8; UUID_LEN]);

impl Uuid {
    /// Wrap raw identifier bytes.
    #[must_use]
    pub const fn from_bytes(bytes: [u8; UUID_LEN]) -> Self {
        Self(bytes)
    }

    /// Build the proxy's synthetic identity from the fixed vendor prefix and
    /// a six-byte MAC-like suffix.
    #[must_use]
    pub fn from_suffix(suffix: [u8; 6]) -> Self {
        let mut bytes = [0u8; UUID_LEN];
        bytes[..10].copy_from_slice(&UUID_VENDOR_PREFIX);
        bytes[10..].copy_from_slice(&suffix);
        Self(bytes)
    }

    /// Interpret a wire-level byte slice as an identifier.
    ///
    /// Returns `None` unless the slice is exactly 16 bytes.
    #[must_use]
    pub fn from_slice(bytes: &[u8]) -> Option<Self> {
        let bytes: [u8; UUID_LEN] = bytes.try_into().ok()?;
        Some(Self(bytes))
    }

    /// Raw identifier bytes.
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; UUID_LEN] {
        &self.0
    }
}

/// Error returned when parsing an identifier from text fails.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid identifier '{input}': expected 12 or 32 hex digits")]
pub struct ParseUuidError {
    input: String,
}

impl FromStr for Uuid {
    type Err = ParseUuidError;

    /// Parse either a full 16-byte identifier (32 hex digits) or a 6-byte
    /// MAC-like suffix (12 hex digits, `:` and `-` separators allowed) that
    /// is appended to the vendor prefix.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s.chars().filter(|c| *c != ':' && *c != '-').collect();
        let err = || ParseUuidError { input: s.to_string() };
        let bytes = hex::decode(&normalized).map_err(|_| err())?;
        match bytes.len() {
            6 => {
                let suffix: [u8; 6] = bytes.try_into().expect("length checked");
                Ok(Self::from_suffix(suffix))
            }
            UUID_LEN => Ok(Self(bytes.try_into().expect("length checked"))),
            _ => Err(err()),
        }
    }
}

impl fmt::Display for Uuid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&hex::encode(self.0))
    }
}

impl fmt::Debug for Uuid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Uuid({})", hex::encode(self.0))
    }
}

/// One framed protocol unit.
#[derive(Debug, Clone, PartialEq)]
pub struct Message {
    /// Source identifier.
    pub src: Uuid,
    /// Destination identifier.
    pub dst: Uuid,
    /// Operation envelope: type tag, reference, optional result.
    pub operation: GatewayOperation,
    /// Payload selected by the operation type.
    pub payload: Payload,
}

impl Message {
    /// Build a message with the given operation type and reference.
    #[must_use]
    pub fn new(
        src: Uuid,
        dst: Uuid,
        op_type: OperationType,
        reference: Option<u32>,
        payload: Payload,
    ) -> Self {
        Self {
            src,
            dst,
            operation: GatewayOperation {
                r#type: Some(op_type as i32),
                reference,
                result: None,
            },
            payload,
        }
    }

    /// The operation type, or `None` when the wire value is not part of the
    /// closed enumeration.
    #[must_use]
    pub fn op_type(&self) -> Option<OperationType> {
        self.operation
            .r#type
            .and_then(|raw| OperationType::try_from(raw).ok())
    }

    /// Stable name of the operation type, used as a metric label.
    #[must_use]
    pub fn type_name(&self) -> &'static str {
        self.op_type().map_or("Unknown", |t| t.as_str_name())
    }

    /// The reference counter value carried by the envelope.
    #[must_use]
    pub fn reference(&self) -> Option<u32> {
        self.operation.reference
    }

    /// The result carried by the envelope, if any.
    #[must_use]
    pub fn result(&self) -> Option<GatewayResult> {
        self.operation
            .result
            .and_then(|raw| GatewayResult::try_from(raw).ok())
    }

    /// Build the reply to this message: src/dst swapped, reference echoed.
    #[must_use]
    pub fn reply(
        &self,
        op_type: OperationType,
        result: Option<GatewayResult>,
        payload: Payload,
    ) -> Self {
        Self {
            src: self.dst,
            dst: self.src,
            operation: GatewayOperation {
                r#type: Some(op_type as i32),
                reference: self.operation.reference,
                result: result.map(|r| r as i32),
            },
            payload,
        }
    }

    /// Build an unsolicited server-originated message toward the sender of
    /// this message. Carries no reference and no result.
    #[must_use]
    pub fn unsolicited(&self, op_type: OperationType, payload: Payload) -> Self {
        Self {
            src: self.dst,
            dst: self.src,
            operation: GatewayOperation {
                r#type: Some(op_type as i32),
                reference: None,
                result: None,
            },
            payload,
        }
    }
}

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "src={}; dst={}; type={}; ref={}",
            self.src,
            self.dst,
            self.type_name(),
            self.reference().map_or_else(|| "-".into(), |r| r.to_string()),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::proto;

    #[test]
    fn test_uuid_from_suffix_has_vendor_prefix() {
        let uuid = Uuid::from_suffix([0xb8, 0x27, 0xeb, 0xf9, 0xf9, 0x12]);
        assert_eq!(&uuid.as_bytes()[..10], &UUID_VENDOR_PREFIX);
        assert_eq!(&uuid.as_bytes()[10..], &[0xb8, 0x27, 0xeb, 0xf9, 0xf9, 0x12]);
    }

    #[test]
    fn test_uuid_parse_full_and_suffix() {
        let full: Uuid = "00000000002510108001b827ebf9f912".parse().unwrap();
        let suffix: Uuid = "b8:27:eb:f9:f9:12".parse().unwrap();
        assert_eq!(full, suffix);

        assert!("not-hex".parse::<Uuid>().is_err());
        assert!("b827eb".parse::<Uuid>().is_err());
    }

    #[test]
    fn test_uuid_display_roundtrip() {
        let uuid = Uuid::from_suffix([1, 2, 3, 4, 5, 6]);
        let parsed: Uuid = uuid.to_string().parse().unwrap();
        assert_eq!(uuid, parsed);
    }

    #[test]
    fn test_reply_swaps_src_dst_and_echoes_reference() {
        let app = Uuid::from_suffix([1; 6]);
        let proxy = Uuid::from_suffix([2; 6]);
        let request = Message::new(
            app,
            proxy,
            OperationType::RegisterAppRequestType,
            Some(7),
            Payload::RegisterAppRequest(proto::RegisterAppRequest::default()),
        );

        let reply = request.reply(
            OperationType::RegisterAppConfirmType,
            Some(GatewayResult::Ok),
            Payload::RegisterAppConfirm(proto::RegisterAppConfirm::default()),
        );

        assert_eq!(reply.src, proxy);
        assert_eq!(reply.dst, app);
        assert_eq!(reply.reference(), Some(7));
        assert_eq!(reply.result(), Some(GatewayResult::Ok));
    }

    #[test]
    fn test_unsolicited_carries_no_reference() {
        let app = Uuid::from_suffix([1; 6]);
        let proxy = Uuid::from_suffix([2; 6]);
        let request = Message::new(
            app,
            proxy,
            OperationType::StartSessionRequestType,
            Some(8),
            Payload::StartSessionRequest(proto::StartSessionRequest::default()),
        );

        let notification = request.unsolicited(
            OperationType::CnNodeNotificationType,
            Payload::CnNodeNotification(proto::CnNodeNotification::default()),
        );
        assert_eq!(notification.reference(), None);
        assert_eq!(notification.result(), None);
        assert_eq!(notification.dst, app);
    }

    #[test]
    fn test_unknown_operation_type() {
        let msg = Message {
            src: Uuid::from_suffix([0; 6]),
            dst: Uuid::from_suffix([0; 6]),
            operation: GatewayOperation {
                r#type: Some(9999),
                reference: None,
                result: None,
            },
            payload: Payload::Opaque(Vec::new()),
        };
        assert_eq!(msg.op_type(), None);
        assert_eq!(msg.type_name(), "Unknown");
    }
}
