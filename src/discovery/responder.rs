//! Discovery responder: impersonate the gateway on the local network.
//!
//! Binds UDP on the protocol port and answers every datagram with a
//! `SearchGatewayResponse` announcing the configured response IP and the
//! proxy's synthetic identifier, so apps discover the proxy instead of the
//! real gateway.

use std::net::SocketAddr;
use std::sync::Arc;

use prost::Message as _;
use tokio::net::UdpSocket;
use tokio::sync::broadcast;
use tracing::{debug, info, warn};

use crate::proto::SearchGatewayResponse;
use crate::protocol::Uuid;

use super::error::DiscoveryError;
use super::{RESPONSE_HEADER, SEARCH_GATEWAY_VERSION};

/// Build the announcement datagram: two wrapper-header bytes as emitted by
/// the gateway firmware, followed by the encoded response.
#[must_use]
pub fn encode_search_gateway_response(ipaddress: &str, uuid: Uuid) -> Vec<u8> {
    let response = SearchGatewayResponse {
        ipaddress: ipaddress.to_string(),
        uuid: uuid.as_bytes().to_vec(),
        version: SEARCH_GATEWAY_VERSION,
    };
    let mut datagram = RESPONSE_HEADER.to_vec();
    datagram.extend_from_slice(&response.encode_to_vec());
    datagram
}

/// UDP responder answering discovery probes with a gateway impersonation
/// reply.
pub struct DiscoveryResponder {
    socket: Arc<UdpSocket>,
    reply: Arc<Vec<u8>>,
}

impl DiscoveryResponder {
    /// Bind the responder socket.
    ///
    /// # Errors
    ///
    /// Returns `BindFailed` when the address cannot be bound.
    pub async fn bind(
        addr: SocketAddr,
        response_ip: &str,
        uuid: Uuid,
    ) -> Result<Self, DiscoveryError> {
        let socket = UdpSocket::bind(addr)
            .await
            .map_err(DiscoveryError::BindFailed)?;
        info!(listen = %addr, response_ip, uuid = %uuid, "discovery responder ready");
        Ok(Self {
            socket: Arc::new(socket),
            reply: Arc::new(encode_search_gateway_response(response_ip, uuid)),
        })
    }

    /// Local address of the bound socket.
    ///
    /// # Errors
    ///
    /// Returns the socket's I/O error.
    pub fn local_addr(&self) -> std::io::Result<SocketAddr> {
        self.socket.local_addr()
    }

    /// Answer probes until the shutdown signal fires.
    ///
    /// Probe contents are ignored; every datagram gets the impersonation
    /// reply. Each probe is answered from a short-lived task so that a slow
    /// send cannot delay the receive loop; there is no shared per-peer
    /// state.
    pub async fn run(self, mut shutdown: broadcast::Receiver<()>) {
        let mut buf = [0u8; 64];
        loop {
            tokio::select! {
                _ = shutdown.recv() => {
                    info!("discovery responder shutting down");
                    return;
                }
                received = self.socket.recv_from(&mut buf) => {
                    let peer = match received {
                        Ok((n, peer)) => {
                            debug!(%peer, bytes = n, "discovery probe");
                            peer
                        }
                        Err(e) => {
                            warn!(error = %e, "discovery receive error");
                            continue;
                        }
                    };

                    let socket = Arc::clone(&self.socket);
                    let reply = Arc::clone(&self.reply);
                    tokio::spawn(async move {
                        if let Err(e) = socket.send_to(&reply, peer).await {
                            warn!(%peer, error = %e, "failed to answer discovery probe");
                        }
                    });
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use prost::Message as _;

    #[test]
    fn test_reply_layout() {
        let uuid = Uuid::from_suffix([0xb8, 0x27, 0xeb, 0xf9, 0xf9, 0x12]);
        let datagram = encode_search_gateway_response("192.168.1.2", uuid);

        assert_eq!(&datagram[..2], &RESPONSE_HEADER);
        let decoded = SearchGatewayResponse::decode(&datagram[2..]).unwrap();
        assert_eq!(decoded.ipaddress, "192.168.1.2");
        assert_eq!(decoded.uuid, uuid.as_bytes().to_vec());
        assert_eq!(decoded.version, SEARCH_GATEWAY_VERSION);
    }
}
