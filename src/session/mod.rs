//! Upstream session: the single persistent connection to the real gateway.
//!
//! # Lifecycle
//!
//! ```text
//!   Disconnected ──connect──▶ Connecting ──registered──▶ Registered
//!                                                            │
//!                                                       start_session
//!                                                            ▼
//!                                                        Active ◀──┐
//!                                                     (keep-alive) │
//!                                                            │     │
//!                                                    socket_error  │
//!                                                            ▼     │
//!                                                        Closing ──▶ Disconnected
//! ```
//!
//! A supervisor task owns the connection: it performs discovery, the
//! Register + StartSession handshake, then acts as the connection's single
//! writer (draining the bounded outbound queue and emitting keep-alives)
//! while a spawned reader task pushes gateway messages onto the
//! `from_gateway` channel. Any socket error tears the connection down and
//! re-establishes it after a fixed backoff; app connections are unaffected.

use std::sync::Arc;
use std::time::Duration;

use thiserror::Error;
use tokio::net::tcp::{OwnedReadHalf, OwnedWriteHalf};
use tokio::net::TcpStream;
use tokio::sync::{broadcast, mpsc, watch};
use tokio::task::JoinHandle;
use tokio::time::{interval_at, timeout, Instant};
use tracing::{debug, info, warn};

use crate::discovery::{discover_gateway, DiscoveryError};
use crate::proto::{self, GatewayResult, OperationType};
use crate::protocol::{codec, CodecError, Message, Payload, Uuid};
use crate::telemetry::{names, MetricsSink};

/// Keep-alive period toward the gateway.
pub const KEEPALIVE_PERIOD: Duration = Duration::from_secs(5);

/// Fixed backoff between reconnect attempts; the gateway is on the LAN, so
/// no exponential growth.
pub const RECONNECT_BACKOFF: Duration = Duration::from_secs(5);

/// Upper bound of the reference counter; the next value wraps to 1.
pub const MAX_REFERENCE: u32 = 1024;

/// Bound of the outbound queue toward the gateway. Overflow surfaces as
/// [`SessionError::Busy`]; a stalled gateway link must not stall the router.
pub const OUTBOUND_QUEUE: usize = 50;

/// Deadline for discovery plus handshake of one connection attempt.
const ESTABLISH_TIMEOUT: Duration = Duration::from_secs(15);

/// Observable state of the upstream session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Disconnected,
    Connecting,
    Registered,
    /// Session established; carries the gateway identifier learned through
    /// discovery for this connection.
    Active(Uuid),
    Closing,
}

impl SessionState {
    /// The gateway identifier, when the session is active.
    #[must_use]
    pub fn gateway(&self) -> Option<Uuid> {
        match self {
            Self::Active(uuid) => Some(*uuid),
            _ => None,
        }
    }
}

/// Errors raised by the upstream session.
#[derive(Debug, Error)]
pub enum SessionError {
    /// Gateway discovery failed.
    #[error("discovery: {0}")]
    Discovery(#[from] DiscoveryError),

    /// TCP connect to the gateway failed.
    #[error("failed to connect to gateway {addr}: {reason}")]
    ConnectFailed { addr: String, reason: String },

    /// The gateway answered the handshake with a non-OK result.
    #[error("gateway rejected {operation}: {result}")]
    Rejected {
        operation: &'static str,
        result: &'static str,
    },

    /// The gateway answered the handshake with an unexpected message type.
    #[error("protocol error: expected {expected}, got {got}")]
    UnexpectedReply {
        expected: &'static str,
        got: String,
    },

    /// Discovery plus handshake did not finish within the deadline.
    #[error("session establishment timed out")]
    EstablishTimeout,

    /// The session is not active.
    #[error("session is disconnected")]
    Disconnected,

    /// The outbound queue is full.
    #[error("session outbound queue is full")]
    Busy,

    /// Framing or transport failure on the gateway connection.
    #[error(transparent)]
    Codec(#[from] CodecError),
}

impl SessionError {
    /// All session errors are recoverable through reconnection except a
    /// full queue, which the caller handles by dropping the message.
    #[must_use]
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, Self::Busy)
    }
}

/// Per-connection monotonically increasing reference counter, wrapping from
/// 1024 back to 1.
#[derive(Debug, Default)]
pub struct ReferenceCounter(u32);

impl ReferenceCounter {
    #[must_use]
    pub const fn new() -> Self {
        Self(0)
    }

    /// The next reference value: 1, 2, …, 1024, 1, 2, …
    pub fn next(&mut self) -> u32 {
        self.0 = if self.0 >= MAX_REFERENCE { 1 } else { self.0 + 1 };
        self.0
    }
}

/// Startup parameters of the upstream session.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Gateway host (IPv4 address in production setups).
    pub gateway_host: String,
    /// Protocol port, 56747 unless overridden for tests.
    pub port: u16,
    /// The proxy's identity toward the gateway.
    pub local_uuid: Uuid,
    /// PIN announced in the registration request.
    pub pin: u32,
    /// Device name announced in the registration request.
    pub device_name: String,
}

/// Cheap handle to the running session, held by the router.
#[derive(Debug, Clone)]
pub struct UpstreamSession {
    outbound: mpsc::Sender<Message>,
    state: watch::Receiver<SessionState>,
}

impl UpstreamSession {
    /// Current state of the session state machine.
    #[must_use]
    pub fn state(&self) -> SessionState {
        *self.state.borrow()
    }

    /// Watch receiver for state transitions, for tests and supervisors.
    #[must_use]
    pub fn watch_state(&self) -> watch::Receiver<SessionState> {
        self.state.clone()
    }

    /// Whether the session is established.
    #[must_use]
    pub fn is_active(&self) -> bool {
        matches!(self.state(), SessionState::Active(_))
    }

    /// Enqueue a message for the gateway without blocking.
    ///
    /// # Errors
    ///
    /// `Disconnected` when the session is not active, `Busy` when the
    /// outbound queue is full.
    pub fn try_forward(&self, message: Message) -> Result<(), SessionError> {
        if !self.is_active() {
            return Err(SessionError::Disconnected);
        }
        self.outbound.try_send(message).map_err(|e| match e {
            mpsc::error::TrySendError::Full(_) => SessionError::Busy,
            mpsc::error::TrySendError::Closed(_) => SessionError::Disconnected,
        })
    }

    /// Start the session supervisor.
    ///
    /// Gateway-originated messages are pushed onto `from_gateway`. The
    /// returned handle is valid across reconnects; the join handle finishes
    /// once the shutdown signal has been observed and the connection is
    /// closed.
    pub fn start(
        config: SessionConfig,
        from_gateway: mpsc::Sender<Message>,
        sink: Arc<dyn MetricsSink>,
        shutdown: broadcast::Sender<()>,
    ) -> (Self, JoinHandle<()>) {
        let (outbound_tx, outbound_rx) = mpsc::channel(OUTBOUND_QUEUE);
        let (state_tx, state_rx) = watch::channel(SessionState::Disconnected);

        let handle = tokio::spawn(supervise(
            config,
            outbound_rx,
            from_gateway,
            state_tx,
            sink,
            shutdown,
        ));

        (
            Self {
                outbound: outbound_tx,
                state: state_rx,
            },
            handle,
        )
    }
}

struct Established {
    reader: OwnedReadHalf,
    writer: OwnedWriteHalf,
    gateway_uuid: Uuid,
    reference: ReferenceCounter,
}

/// Discover the gateway, connect, and run the Register + StartSession
/// handshake.
async fn establish(
    config: &SessionConfig,
    state: &watch::Sender<SessionState>,
) -> Result<Established, SessionError> {
    let gateway_uuid = discover_gateway(&config.gateway_host, config.port).await?;

    let addr = format!("{}:{}", config.gateway_host, config.port);
    let mut stream =
        TcpStream::connect(&addr)
            .await
            .map_err(|e| SessionError::ConnectFailed {
                addr: addr.clone(),
                reason: e.to_string(),
            })?;
    debug!(gateway = %addr, uuid = %gateway_uuid, "connected, registering");

    let mut reference = ReferenceCounter::new();

    let register = Message::new(
        config.local_uuid,
        gateway_uuid,
        OperationType::RegisterAppRequestType,
        Some(reference.next()),
        Payload::RegisterAppRequest(proto::RegisterAppRequest {
            uuid: Some(config.local_uuid.as_bytes().to_vec()),
            pin: Some(config.pin),
            devicename: Some(config.device_name.clone()),
        }),
    );
    codec::write_message(&mut stream, &register).await?;
    expect_confirm(&mut stream, OperationType::RegisterAppConfirmType, "RegisterAppConfirm")
        .await?;
    let _ = state.send(SessionState::Registered);

    let start = Message::new(
        config.local_uuid,
        gateway_uuid,
        OperationType::StartSessionRequestType,
        Some(reference.next()),
        Payload::StartSessionRequest(proto::StartSessionRequest::default()),
    );
    codec::write_message(&mut stream, &start).await?;
    expect_confirm(&mut stream, OperationType::StartSessionConfirmType, "StartSessionConfirm")
        .await?;

    let (reader, writer) = stream.into_split();
    Ok(Established {
        reader,
        writer,
        gateway_uuid,
        reference,
    })
}

/// Await one handshake reply and validate its type and result.
async fn expect_confirm(
    stream: &mut TcpStream,
    expected: OperationType,
    operation: &'static str,
) -> Result<(), SessionError> {
    let reply = codec::read_message(stream).await?;
    if reply.op_type() != Some(expected) {
        return Err(SessionError::UnexpectedReply {
            expected: operation,
            got: reply.type_name().to_string(),
        });
    }
    match reply.result() {
        None | Some(GatewayResult::Ok) => Ok(()),
        Some(result) => Err(SessionError::Rejected {
            operation,
            result: result.as_str_name(),
        }),
    }
}

/// Why a connected session ended.
enum ExitReason {
    Shutdown,
    ConnectionLost,
}

#[allow(clippy::too_many_lines)]
async fn supervise(
    config: SessionConfig,
    mut outbound_rx: mpsc::Receiver<Message>,
    from_gateway: mpsc::Sender<Message>,
    state: watch::Sender<SessionState>,
    sink: Arc<dyn MetricsSink>,
    shutdown: broadcast::Sender<()>,
) {
    let mut shutdown_rx = shutdown.subscribe();
    loop {
        let _ = state.send(SessionState::Connecting);

        let established = tokio::select! {
            _ = shutdown_rx.recv() => {
                let _ = state.send(SessionState::Disconnected);
                return;
            }
            result = timeout(ESTABLISH_TIMEOUT, establish(&config, &state)) => {
                match result {
                    Ok(Ok(established)) => established,
                    Ok(Err(e)) => {
                        warn!(error = %e, "session establishment failed, retrying in {RECONNECT_BACKOFF:?}");
                        let _ = state.send(SessionState::Disconnected);
                        if backoff_or_shutdown(&mut shutdown_rx).await {
                            return;
                        }
                        continue;
                    }
                    Err(_) => {
                        warn!("session establishment timed out, retrying in {RECONNECT_BACKOFF:?}");
                        let _ = state.send(SessionState::Disconnected);
                        if backoff_or_shutdown(&mut shutdown_rx).await {
                            return;
                        }
                        continue;
                    }
                }
            }
        };

        info!(gateway = %established.gateway_uuid, "upstream session active");
        let _ = state.send(SessionState::Active(established.gateway_uuid));
        sink.gauge_set(names::CLIENT_CONNECTED, &[], 1.0);

        let reason = run_connected(
            established,
            &config,
            &state,
            &mut outbound_rx,
            &from_gateway,
            &mut shutdown_rx,
            shutdown.subscribe(),
        )
        .await;

        sink.gauge_set(names::CLIENT_CONNECTED, &[], 0.0);
        let _ = state.send(SessionState::Disconnected);

        match reason {
            ExitReason::Shutdown => return,
            ExitReason::ConnectionLost => {
                warn!("lost connection to gateway, reconnecting in {RECONNECT_BACKOFF:?}");
                if backoff_or_shutdown(&mut shutdown_rx).await {
                    return;
                }
            }
        }
    }
}

/// Sleep the reconnect backoff; true when shutdown fired meanwhile.
async fn backoff_or_shutdown(shutdown_rx: &mut broadcast::Receiver<()>) -> bool {
    tokio::select! {
        _ = shutdown_rx.recv() => true,
        () = tokio::time::sleep(RECONNECT_BACKOFF) => false,
    }
}

/// Single-writer loop of one established connection.
///
/// Owns the write half and the reference counter; forwards queued messages,
/// emits the keep-alive, and watches the reader task. The reference counter
/// only stamps session-originated messages — forwarded messages keep their
/// app's reference so confirms correlate in the app's own reference space.
#[allow(clippy::too_many_arguments)]
async fn run_connected(
    established: Established,
    config: &SessionConfig,
    state: &watch::Sender<SessionState>,
    outbound_rx: &mut mpsc::Receiver<Message>,
    from_gateway: &mpsc::Sender<Message>,
    shutdown_rx: &mut broadcast::Receiver<()>,
    reader_shutdown: broadcast::Receiver<()>,
) -> ExitReason {
    let Established {
        reader,
        mut writer,
        gateway_uuid,
        mut reference,
    } = established;

    let mut reader_task = tokio::spawn(read_loop(reader, from_gateway.clone(), reader_shutdown));

    let mut keepalive = interval_at(Instant::now() + KEEPALIVE_PERIOD, KEEPALIVE_PERIOD);

    let reason = loop {
        tokio::select! {
            _ = shutdown_rx.recv() => {
                let _ = state.send(SessionState::Closing);
                let close = Message::new(
                    config.local_uuid,
                    gateway_uuid,
                    OperationType::CloseSessionRequestType,
                    Some(reference.next()),
                    Payload::CloseSessionRequest(proto::CloseSessionRequest::default()),
                );
                // Best effort; the socket is going away either way.
                if let Err(e) = codec::write_message(&mut writer, &close).await {
                    debug!(error = %e, "failed to send CloseSessionRequest");
                }
                break ExitReason::Shutdown;
            }
            message = outbound_rx.recv() => {
                let Some(message) = message else {
                    // Router dropped its handle; treat as shutdown.
                    break ExitReason::Shutdown;
                };
                if let Err(e) = codec::write_message(&mut writer, &message).await {
                    warn!(error = %e, "write to gateway failed");
                    break ExitReason::ConnectionLost;
                }
            }
            _ = keepalive.tick() => {
                let ping = Message::new(
                    config.local_uuid,
                    gateway_uuid,
                    OperationType::CnTimeRequestType,
                    Some(reference.next()),
                    Payload::CnTimeRequest(proto::CnTimeRequest::default()),
                );
                if let Err(e) = codec::write_message(&mut writer, &ping).await {
                    warn!(error = %e, "keep-alive write failed");
                    break ExitReason::ConnectionLost;
                }
                debug!(reference = ping.reference(), "sent keep-alive");
            }
            _ = &mut reader_task => {
                break ExitReason::ConnectionLost;
            }
        }
    };

    reader_task.abort();
    reason
}

/// Receive loop of one established connection: pushes every decoded message
/// onto the `from_gateway` channel; ends on EOF or a fatal decode error.
async fn read_loop(
    mut reader: OwnedReadHalf,
    from_gateway: mpsc::Sender<Message>,
    mut shutdown_rx: broadcast::Receiver<()>,
) {
    loop {
        tokio::select! {
            _ = shutdown_rx.recv() => return,
            result = codec::read_message(&mut reader) => {
                match result {
                    Ok(message) => {
                        debug!(%message, "message from gateway");
                        if from_gateway.send(message).await.is_err() {
                            return;
                        }
                    }
                    Err(CodecError::PeerClosed) => {
                        warn!("gateway closed the connection");
                        return;
                    }
                    Err(e) => {
                        warn!(error = %e, "gateway receive failed");
                        return;
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_counter_starts_at_one() {
        let mut counter = ReferenceCounter::new();
        assert_eq!(counter.next(), 1);
        assert_eq!(counter.next(), 2);
    }

    #[test]
    fn test_reference_counter_wraps_at_1024() {
        let mut counter = ReferenceCounter::new();
        let mut last = 0;
        for _ in 0..MAX_REFERENCE {
            last = counter.next();
        }
        assert_eq!(last, MAX_REFERENCE);
        assert_eq!(counter.next(), 1);
    }

    #[test]
    fn test_reference_successor_invariant() {
        let mut counter = ReferenceCounter::new();
        let mut prev = counter.next();
        for _ in 0..3000 {
            let next = counter.next();
            assert!(next == prev + 1 || next == 1, "prev={prev} next={next}");
            prev = next;
        }
    }

    #[test]
    fn test_session_state_gateway_accessor() {
        let uuid = Uuid::from_suffix([1; 6]);
        assert_eq!(SessionState::Active(uuid).gateway(), Some(uuid));
        assert_eq!(SessionState::Disconnected.gateway(), None);
        assert_eq!(SessionState::Connecting.gateway(), None);
    }

    #[test]
    fn test_busy_is_not_recoverable_by_reconnect() {
        assert!(!SessionError::Busy.is_recoverable());
        assert!(SessionError::Disconnected.is_recoverable());
        assert!(SessionError::EstablishTimeout.is_recoverable());
    }
}
