//! Frame codec: one wire message to/from a byte stream.
//!
//! # Wire format (all multi-byte integers big-endian)
//!
//! ```text
//! +0  u32  total_length        of everything following, excluding itself
//! +4  u8[16] src uuid
//! +20 u8[16] dst uuid
//! +36 u16  operation_length
//! +38 u8[operation_length]     operation envelope (GatewayOperation)
//! +…  u8[payload_length]       payload; payload_length = total_length - 34 - operation_length
//! ```
//!
//! The length word and the operation length are bounded by 1024; larger
//! values are protocol errors, not resource limits. Reads loop until the
//! requested byte count is accumulated; end-of-stream surfaces as
//! [`CodecError::PeerClosed`].

use prost::Message as _;
use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt};

use crate::proto::{GatewayOperation, OperationType};

use super::message::{Message, Uuid, UUID_LEN};
use super::payload::Payload;

/// Upper bound for the frame length word and the operation length.
pub const MAX_FRAME_LEN: u32 = 1024;

/// Bytes covered by the length word besides envelope and payload:
/// src (16) + dst (16) + operation length word (2).
pub const FRAME_OVERHEAD: u32 = 34;

/// Errors raised by the frame codec.
#[derive(Debug, thiserror::Error)]
pub enum CodecError {
    /// Frame length word out of bounds, or shorter than its own fields.
    #[error("malformed frame: invalid length {length}")]
    InvalidLength { length: u32 },

    /// Operation length word out of bounds.
    #[error("malformed frame: invalid operation length {length}")]
    InvalidOperationLength { length: u16 },

    /// The operation envelope did not parse. The consumed bytes are not
    /// recoverable; the connection must be reset.
    #[error("malformed frame: operation envelope: {0}")]
    Envelope(prost::DecodeError),

    /// The payload did not parse as the schema selected by the operation
    /// type.
    #[error("malformed frame: {type_name} payload: {source}")]
    Payload {
        type_name: &'static str,
        source: prost::DecodeError,
    },

    /// The peer closed the connection (zero-byte read without error).
    #[error("peer closed the connection")]
    PeerClosed,

    /// Underlying transport error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl CodecError {
    /// Whether this error means the frame itself was malformed, as opposed
    /// to a transport-level failure.
    #[must_use]
    pub fn is_malformed(&self) -> bool {
        matches!(
            self,
            Self::InvalidLength { .. }
                | Self::InvalidOperationLength { .. }
                | Self::Envelope(_)
                | Self::Payload { .. }
        )
    }
}

/// Read exactly `buf.len()` bytes, mapping end-of-stream to `PeerClosed`.
async fn read_exact<R>(reader: &mut R, buf: &mut [u8]) -> Result<(), CodecError>
where
    R: AsyncRead + Unpin,
{
    match reader.read_exact(buf).await {
        Ok(_) => Ok(()),
        Err(e) if e.kind() == std::io::ErrorKind::UnexpectedEof => Err(CodecError::PeerClosed),
        Err(e) => Err(CodecError::Io(e)),
    }
}

/// Read a single framed message from the stream.
///
/// # Errors
///
/// Returns a malformed-frame error when the length words are out of bounds
/// or the envelope/payload bytes do not parse, `PeerClosed` on end of
/// stream, and `Io` for transport failures. After a malformed-frame error
/// the stream position is undefined and the connection must be closed.
pub async fn read_message<R>(reader: &mut R) -> Result<Message, CodecError>
where
    R: AsyncRead + Unpin,
{
    let mut word = [0u8; 4];
    read_exact(reader, &mut word).await?;
    let length = u32::from_be_bytes(word);
    if length > MAX_FRAME_LEN || length < FRAME_OVERHEAD {
        return Err(CodecError::InvalidLength { length });
    }

    let mut src = [0u8; UUID_LEN];
    read_exact(reader, &mut src).await?;
    let mut dst = [0u8; UUID_LEN];
    read_exact(reader, &mut dst).await?;

    let mut word = [0u8; 2];
    read_exact(reader, &mut word).await?;
    let operation_length = u16::from_be_bytes(word);
    if operation_length < 1 || u32::from(operation_length) > MAX_FRAME_LEN {
        return Err(CodecError::InvalidOperationLength {
            length: operation_length,
        });
    }
    let Some(payload_length) = length.checked_sub(FRAME_OVERHEAD + u32::from(operation_length))
    else {
        return Err(CodecError::InvalidOperationLength {
            length: operation_length,
        });
    };

    let mut operation_bytes = vec![0u8; operation_length as usize];
    read_exact(reader, &mut operation_bytes).await?;
    let operation =
        GatewayOperation::decode(operation_bytes.as_slice()).map_err(CodecError::Envelope)?;

    let mut payload_bytes = vec![0u8; payload_length as usize];
    if payload_length > 0 {
        read_exact(reader, &mut payload_bytes).await?;
    }

    // Unknown operation types keep the payload opaque; the router drops them.
    let payload = match operation.r#type.and_then(|raw| OperationType::try_from(raw).ok()) {
        Some(op_type) => Payload::decode(op_type, &payload_bytes).map_err(|source| {
            CodecError::Payload {
                type_name: op_type.as_str_name(),
                source,
            }
        })?,
        None => Payload::Opaque(payload_bytes),
    };

    Ok(Message {
        src: Uuid::from_bytes(src),
        dst: Uuid::from_bytes(dst),
        operation,
        payload,
    })
}

/// Serialize a message into one length-prefixed frame.
#[must_use]
pub fn encode_message(message: &Message) -> Vec<u8> {
    let operation_bytes = message.operation.encode_to_vec();
    let payload_bytes = message.payload.encode_to_vec();

    let total = FRAME_OVERHEAD as usize + operation_bytes.len() + payload_bytes.len();
    let mut frame = Vec::with_capacity(4 + total);
    frame.extend_from_slice(&u32::try_from(total).expect("frame fits in u32").to_be_bytes());
    frame.extend_from_slice(message.src.as_bytes());
    frame.extend_from_slice(message.dst.as_bytes());
    frame.extend_from_slice(
        &u16::try_from(operation_bytes.len())
            .expect("envelope fits in u16")
            .to_be_bytes(),
    );
    frame.extend_from_slice(&operation_bytes);
    frame.extend_from_slice(&payload_bytes);
    frame
}

/// Write one full frame to the stream.
///
/// The caller guarantees frame atomicity by funnelling all writes for a
/// connection through a single writer task.
///
/// # Errors
///
/// Returns `Io` when the transport write fails.
pub async fn write_message<W>(writer: &mut W, message: &Message) -> Result<(), CodecError>
where
    W: AsyncWrite + Unpin,
{
    writer.write_all(&encode_message(message)).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::proto;

    fn sample_message() -> Message {
        Message::new(
            Uuid::from_suffix([1, 2, 3, 4, 5, 6]),
            Uuid::from_suffix([9, 9, 9, 9, 9, 9]),
            OperationType::RegisterAppRequestType,
            Some(7),
            Payload::RegisterAppRequest(proto::RegisterAppRequest {
                uuid: Some(vec![0x42; 16]),
                pin: Some(0),
                devicename: Some("test".into()),
            }),
        )
    }

    #[tokio::test]
    async fn test_roundtrip() {
        let message = sample_message();
        let frame = encode_message(&message);
        let decoded = read_message(&mut frame.as_slice()).await.unwrap();
        assert_eq!(decoded, message);
    }

    #[test]
    fn test_length_word_is_self_consistent() {
        let frame = encode_message(&sample_message());
        let length = u32::from_be_bytes(frame[..4].try_into().unwrap());
        assert_eq!(length as usize, frame.len() - 4);
    }

    #[tokio::test]
    async fn test_empty_payload_roundtrip() {
        let message = Message::new(
            Uuid::from_suffix([0; 6]),
            Uuid::from_suffix([1; 6]),
            OperationType::CnTimeRequestType,
            Some(3),
            Payload::CnTimeRequest(proto::CnTimeRequest::default()),
        );
        let frame = encode_message(&message);
        let decoded = read_message(&mut frame.as_slice()).await.unwrap();
        assert_eq!(decoded, message);
    }

    #[tokio::test]
    async fn test_rejects_oversized_length() {
        let mut frame = encode_message(&sample_message());
        frame[..4].copy_from_slice(&99_999u32.to_be_bytes());
        let err = read_message(&mut frame.as_slice()).await.unwrap_err();
        assert!(matches!(err, CodecError::InvalidLength { length: 99_999 }));
        assert!(err.is_malformed());
    }

    #[tokio::test]
    async fn test_rejects_zero_operation_length() {
        let mut frame = encode_message(&sample_message());
        frame[36..38].copy_from_slice(&0u16.to_be_bytes());
        let err = read_message(&mut frame.as_slice()).await.unwrap_err();
        assert!(matches!(
            err,
            CodecError::InvalidOperationLength { length: 0 }
        ));
    }

    #[tokio::test]
    async fn test_rejects_operation_longer_than_frame() {
        let mut frame = encode_message(&sample_message());
        // Envelope length larger than what the frame length word allows.
        frame[36..38].copy_from_slice(&1000u16.to_be_bytes());
        let err = read_message(&mut frame.as_slice()).await.unwrap_err();
        assert!(matches!(err, CodecError::InvalidOperationLength { .. }));
    }

    #[tokio::test]
    async fn test_truncated_stream_is_peer_closed() {
        let frame = encode_message(&sample_message());
        let err = read_message(&mut &frame[..10]).await.unwrap_err();
        assert!(matches!(err, CodecError::PeerClosed));
    }

    #[tokio::test]
    async fn test_unknown_operation_type_keeps_payload_opaque() {
        let mut message = sample_message();
        message.operation.r#type = Some(9999);
        message.payload = Payload::Opaque(vec![0xDE, 0xAD]);
        let frame = encode_message(&message);
        let decoded = read_message(&mut frame.as_slice()).await.unwrap();
        assert_eq!(decoded.payload, Payload::Opaque(vec![0xDE, 0xAD]));
        assert_eq!(decoded.op_type(), None);
    }

    #[tokio::test]
    async fn test_two_frames_back_to_back() {
        let first = sample_message();
        let second = Message::new(
            Uuid::from_suffix([1; 6]),
            Uuid::from_suffix([2; 6]),
            OperationType::CnRpdoNotificationType,
            None,
            Payload::CnRpdoNotification(proto::CnRpdoNotification {
                pdid: Some(128),
                data: Some(vec![0x00, 0x0A]),
            }),
        );
        let mut stream = encode_message(&first);
        stream.extend_from_slice(&encode_message(&second));

        let mut cursor = stream.as_slice();
        assert_eq!(read_message(&mut cursor).await.unwrap(), first);
        assert_eq!(read_message(&mut cursor).await.unwrap(), second);
    }
}
