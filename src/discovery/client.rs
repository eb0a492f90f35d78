//! Discovery client: obtain the gateway's identifier over UDP.

use std::time::Duration;

use prost::Message as _;
use tokio::net::{lookup_host, UdpSocket};
use tokio::time::timeout;
use tracing::debug;

use crate::proto::SearchGatewayResponse;
use crate::protocol::Uuid;

use super::error::DiscoveryError;
use super::{DISCOVERY_PORT, PROBE, RESPONSE_HEADER_LEN};

/// How long to wait for the single reply datagram.
const REPLY_TIMEOUT: Duration = Duration::from_secs(5);

/// Probe the gateway at `host:port` and return its identifier.
///
/// Sends the two-byte wake-up probe and reads one reply datagram
/// (≤1024 bytes). No retry is performed here; session creation retries
/// discovery after its reconnect backoff.
///
/// # Errors
///
/// `ResolveFailed`, `WriteFailed`, `ReadFailed` or `DecodeFailed`, per
/// failure stage.
pub async fn discover_gateway(host: &str, port: u16) -> Result<Uuid, DiscoveryError> {
    let target = format!("{host}:{port}");
    let addr = lookup_host(target.as_str())
        .await
        .map_err(|e| DiscoveryError::ResolveFailed {
            host: target.clone(),
            reason: e.to_string(),
        })?
        .next()
        .ok_or_else(|| DiscoveryError::ResolveFailed {
            host: target.clone(),
            reason: "no addresses".into(),
        })?;

    let socket = UdpSocket::bind("0.0.0.0:0")
        .await
        .map_err(DiscoveryError::WriteFailed)?;
    socket
        .connect(addr)
        .await
        .map_err(DiscoveryError::WriteFailed)?;
    socket
        .send(&PROBE)
        .await
        .map_err(DiscoveryError::WriteFailed)?;

    let mut buf = [0u8; 1024];
    let n = match timeout(REPLY_TIMEOUT, socket.recv(&mut buf)).await {
        Ok(Ok(n)) => n,
        Ok(Err(e)) => {
            return Err(DiscoveryError::ReadFailed {
                reason: e.to_string(),
            })
        }
        Err(_) => {
            return Err(DiscoveryError::ReadFailed {
                reason: format!("no reply within {REPLY_TIMEOUT:?}"),
            })
        }
    };

    if n < RESPONSE_HEADER_LEN {
        return Err(DiscoveryError::DecodeFailed {
            reason: format!("reply too short: {n} bytes"),
        });
    }

    // The first two bytes are the protobuf wrapper header of the firmware's
    // announcement; the remainder is the SearchGatewayResponse itself.
    let response = SearchGatewayResponse::decode(&buf[RESPONSE_HEADER_LEN..n]).map_err(|e| {
        DiscoveryError::DecodeFailed {
            reason: e.to_string(),
        }
    })?;

    let uuid = Uuid::from_slice(&response.uuid).ok_or_else(|| DiscoveryError::DecodeFailed {
        reason: format!("uuid field has {} bytes", response.uuid.len()),
    })?;

    debug!(gateway = %addr, uuid = %uuid, version = response.version, "discovered gateway");
    Ok(uuid)
}

/// Probe on the protocol's well-known port.
///
/// # Errors
///
/// See [`discover_gateway`].
pub async fn discover(host: &str) -> Result<Uuid, DiscoveryError> {
    discover_gateway(host, DISCOVERY_PORT).await
}
