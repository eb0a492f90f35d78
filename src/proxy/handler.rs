//! Per-app connection handler.
//!
//! One instance per accepted inbound TCP connection. The handler answers
//! session-establishment operations locally — the gateway must never see
//! them — and forwards everything else to the router. Outbound frames for
//! the app flow through a bounded channel drained by a single writer task,
//! which guarantees frame atomicity on the socket.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::{Duration, SystemTime};

use tokio::net::tcp::{OwnedReadHalf, OwnedWriteHalf};
use tokio::net::TcpStream;
use tokio::sync::{broadcast, mpsc};
use tracing::{debug, info, warn};

use crate::proto::{self, GatewayResult, OperationType};
use crate::protocol::{codec, registry, CodecError, Message, Payload};
use crate::telemetry::{names, MetricsSink};

use super::router::{RouterEvent, RouterHandle};

/// Bound of the per-app outbound queue. Overflow drops the copy for this
/// app only; other apps are unaffected.
pub const APP_QUEUE: usize = 100;

/// Gateway firmware version announced in locally-terminated VersionConfirm
/// replies.
pub const GATEWAY_VERSION: u32 = 0x0010_0C0A;

/// ComfoNet version announced in locally-terminated VersionConfirm replies.
pub const COMFONET_VERSION: u32 = 0x4000_1000;

/// Serial number announced in locally-terminated VersionConfirm replies.
pub const SERIAL_NUMBER: &str = "DEM0116371204";

/// Fixed identifier announced in GetRemoteAccessIdConfirm replies.
pub const REMOTE_ACCESS_ID: [u8; 16] = [
    0x37, 0x6d, 0xe9, 0xda, 0x7d, 0xd2, 0x43, 0xe6, 0xb8, 0xde, 0x5e, 0x47, 0xc7, 0x93, 0x59,
    0x5c,
];

/// Protocol epoch: 2000-01-01T00:00:00Z as a Unix timestamp.
const EPOCH_2000_UNIX: u64 = 946_684_800;

/// Seconds since the protocol epoch, as carried in CnTimeConfirm.
#[must_use]
pub fn seconds_since_2000() -> u32 {
    let unix = SystemTime::now()
        .duration_since(SystemTime::UNIX_EPOCH)
        .unwrap_or(Duration::ZERO)
        .as_secs();
    u32::try_from(unix.saturating_sub(EPOCH_2000_UNIX)).unwrap_or(u32::MAX)
}

/// Handle one app connection until EOF, error, or shutdown.
///
/// Registers the app in the router's table on its first message and
/// deregisters it on the way out.
pub async fn handle_connection(
    stream: TcpStream,
    peer: SocketAddr,
    router: RouterHandle,
    sink: Arc<dyn MetricsSink>,
    shutdown: broadcast::Sender<()>,
) {
    info!(%peer, "handling app connection");
    let (read_half, write_half) = stream.into_split();

    let (outbound_tx, outbound_rx) = mpsc::channel::<Message>(APP_QUEUE);
    let writer = tokio::spawn(write_loop(
        write_half,
        outbound_rx,
        peer,
        Arc::clone(&sink),
        shutdown.subscribe(),
    ));

    read_loop(
        read_half,
        peer,
        &router,
        &outbound_tx,
        &sink,
        shutdown.subscribe(),
    )
    .await;

    if router
        .events
        .send(RouterEvent::Deregister { peer })
        .await
        .is_err()
    {
        debug!(%peer, "router gone during deregistration");
    }

    // Dropping the last sender ends the writer once its queue is drained.
    drop(outbound_tx);
    let _ = writer.await;
    info!(%peer, "app connection closed");
}

/// Framing loop: reads messages, terminates session-establishment locally,
/// forwards the rest to the router.
async fn read_loop(
    mut read_half: OwnedReadHalf,
    peer: SocketAddr,
    router: &RouterHandle,
    outbound: &mpsc::Sender<Message>,
    sink: &Arc<dyn MetricsSink>,
    mut shutdown: broadcast::Receiver<()>,
) {
    let mut registered = false;

    loop {
        let message = tokio::select! {
            _ = shutdown.recv() => return,
            result = codec::read_message(&mut read_half) => match result {
                Ok(message) => message,
                Err(CodecError::PeerClosed) => {
                    debug!(%peer, "app closed the connection");
                    return;
                }
                Err(e) if e.is_malformed() => {
                    warn!(%peer, error = %e, "malformed frame, closing app connection");
                    return;
                }
                Err(e) => {
                    warn!(%peer, error = %e, "app receive failed");
                    return;
                }
            },
        };

        sink.counter_inc(
            names::LISTENER_MESSAGE_RECEIVER,
            &[("message_type", message.type_name())],
        );

        // The app is identified by the source id on its first message.
        if !registered {
            let event = RouterEvent::Register {
                peer,
                uuid: message.src,
                outbound: outbound.clone(),
            };
            if router.events.send(event).await.is_err() {
                return;
            }
            registered = true;
        }

        sink.counter_inc(
            names::LISTENER_MESSAGE_RECEIVED,
            &[("message_type", message.type_name())],
        );
        debug!(%peer, %message, "message from app");

        if !dispatch(message, peer, router, outbound).await {
            return;
        }
    }
}

/// Route one app message: answer locally or hand it to the router. Returns
/// false when a channel is gone and the handler should stop.
async fn dispatch(
    message: Message,
    peer: SocketAddr,
    router: &RouterHandle,
    outbound: &mpsc::Sender<Message>,
) -> bool {
    let Some(op_type) = message.op_type() else {
        // Not decodable into the closed enumeration; let the router count
        // and drop it.
        return router.to_gateway.send(message).await.is_ok();
    };

    match op_type {
        OperationType::RegisterAppRequestType => {
            info!(%peer, app = %message.src, "locally confirming app registration");
            send_reply(
                outbound,
                confirm(&message, Some(GatewayResult::Ok), Payload::RegisterAppConfirm(
                    proto::RegisterAppConfirm::default(),
                )),
            )
            .await
        }
        OperationType::StartSessionRequestType => {
            info!(%peer, "locally confirming session start");
            if !send_reply(
                outbound,
                confirm(&message, Some(GatewayResult::Ok), Payload::StartSessionConfirm(
                    proto::StartSessionConfirm::default(),
                )),
            )
            .await
            {
                return false;
            }
            // Announce the synthetic node layout of a single-unit setup.
            for (node_id, product_id, zone_id) in [(1, 1, 1), (48, 5, 255)] {
                let notification = message.unsolicited(
                    OperationType::CnNodeNotificationType,
                    Payload::CnNodeNotification(proto::CnNodeNotification {
                        node_id: Some(node_id),
                        product_id: Some(product_id),
                        zone_id: Some(zone_id),
                        mode: Some(
                            proto::cn_node_notification::NodeModeType::NodeNormal as i32,
                        ),
                    }),
                );
                if !send_reply(outbound, notification).await {
                    return false;
                }
            }
            true
        }
        OperationType::CloseSessionRequestType => {
            debug!(%peer, "locally confirming session close");
            send_reply(
                outbound,
                confirm(&message, None, Payload::CloseSessionConfirm(
                    proto::CloseSessionConfirm::default(),
                )),
            )
            .await
        }
        OperationType::CnTimeRequestType => {
            send_reply(
                outbound,
                confirm(
                    &message,
                    Some(GatewayResult::Ok),
                    Payload::CnTimeConfirm(proto::CnTimeConfirm {
                        current_time: Some(seconds_since_2000()),
                    }),
                ),
            )
            .await
        }
        OperationType::VersionRequestType => {
            send_reply(
                outbound,
                confirm(&message, Some(GatewayResult::Ok), Payload::VersionConfirm(
                    proto::VersionConfirm {
                        gateway_version: Some(GATEWAY_VERSION),
                        serial_number: Some(SERIAL_NUMBER.to_string()),
                        comfo_net_version: Some(COMFONET_VERSION),
                    },
                )),
            )
            .await
        }
        OperationType::GetRemoteAccessIdRequestType => {
            send_reply(
                outbound,
                confirm(
                    &message,
                    Some(GatewayResult::Ok),
                    Payload::GetRemoteAccessIdConfirm(proto::GetRemoteAccessIdConfirm {
                        uuid: Some(REMOTE_ACCESS_ID.to_vec()),
                    }),
                ),
            )
            .await
        }
        // Everything else, requests and the occasional app-originated
        // confirm or notification alike, goes through the router.
        _ => router.to_gateway.send(message).await.is_ok(),
    }
}

/// Build the locally-terminated reply for a request: confirm type from the
/// registry, src/dst swapped, reference echoed.
fn confirm(request: &Message, result: Option<GatewayResult>, payload: Payload) -> Message {
    let confirm_type = registry::confirm_type(request.op_type().expect("known request type"))
        .expect("locally terminated operations are requests");
    request.reply(confirm_type, result, payload)
}

async fn send_reply(outbound: &mpsc::Sender<Message>, reply: Message) -> bool {
    outbound.send(reply).await.is_ok()
}

/// Single writer of the app socket: drains the bounded outbound queue.
async fn write_loop(
    mut write_half: OwnedWriteHalf,
    mut outbound_rx: mpsc::Receiver<Message>,
    peer: SocketAddr,
    sink: Arc<dyn MetricsSink>,
    mut shutdown: broadcast::Receiver<()>,
) {
    loop {
        tokio::select! {
            _ = shutdown.recv() => return,
            message = outbound_rx.recv() => {
                let Some(message) = message else { return };
                sink.counter_inc(
                    names::LISTENER_MESSAGE_SENT,
                    &[("message_type", message.type_name())],
                );
                if let Err(e) = codec::write_message(&mut write_half, &message).await {
                    warn!(%peer, error = %e, "write to app failed");
                    return;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seconds_since_2000_is_in_plausible_range() {
        let seconds = seconds_since_2000();
        // Somewhere between 2020 and 2100.
        assert!(seconds > 630_000_000);
        assert!(seconds < 3_160_000_000);
    }

    #[test]
    fn test_version_constants() {
        assert_eq!(GATEWAY_VERSION, 1_051_658);
        assert_eq!(COMFONET_VERSION, 1_073_745_920);
        assert_eq!(REMOTE_ACCESS_ID.len(), 16);
    }
}
