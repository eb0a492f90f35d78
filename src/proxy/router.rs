//! The central coordinator between app connections and the gateway session.
//!
//! The router exclusively owns the app table. Handlers never hold back
//! references into the router; they announce themselves with
//! [`RouterEvent::Register`] and are keyed by peer address. The main loop
//! selects over cancellation, the `to_gateway` fan-in, the `from_gateway`
//! stream and the registration events.
//!
//! Masquerade rule: every frame leaving toward the gateway carries
//! `src = local_uuid, dst = gateway_uuid`; every frame leaving toward an app
//! carries `src = local_uuid, dst = that app's uuid`. The gateway sees one
//! registered client; multiplicity is re-expanded here by cloning each
//! gateway message for every registered app.

use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::Arc;

use tokio::sync::{broadcast, mpsc};
use tracing::{debug, info, warn};

use crate::proto::OperationType;
use crate::protocol::{rpdo, Message, Payload, Uuid};
use crate::session::{SessionError, UpstreamSession};
use crate::telemetry::{names, MetricsSink};

/// Bound of the `to_gateway` fan-in channel.
pub const TO_GATEWAY_QUEUE: usize = 100;

/// Bound of the `from_gateway` channel.
pub const FROM_GATEWAY_QUEUE: usize = 100;

/// Bound of the registration event channel.
pub const EVENT_QUEUE: usize = 16;

/// App-table mutations sent by connection handlers.
#[derive(Debug)]
pub enum RouterEvent {
    /// A handler observed its app's first message.
    Register {
        peer: SocketAddr,
        uuid: Uuid,
        outbound: mpsc::Sender<Message>,
    },
    /// A handler is going away.
    Deregister { peer: SocketAddr },
}

/// Channel endpoints handed to listeners and handlers.
#[derive(Debug, Clone)]
pub struct RouterHandle {
    /// Fan-in of app-originated messages.
    pub to_gateway: mpsc::Sender<Message>,
    /// Registration events.
    pub events: mpsc::Sender<RouterEvent>,
}

struct AppEntry {
    uuid: Uuid,
    outbound: mpsc::Sender<Message>,
}

/// The router task state.
pub struct Router {
    local_uuid: Uuid,
    session: UpstreamSession,
    apps: HashMap<SocketAddr, AppEntry>,
    to_gateway_rx: mpsc::Receiver<Message>,
    from_gateway_rx: mpsc::Receiver<Message>,
    events_rx: mpsc::Receiver<RouterEvent>,
    sink: Arc<dyn MetricsSink>,
}

impl Router {
    /// Create the router and its channel endpoints.
    ///
    /// `from_gateway` is the receiving end of the channel fed by the
    /// upstream session's receive loop.
    #[must_use]
    pub fn new(
        local_uuid: Uuid,
        session: UpstreamSession,
        from_gateway_rx: mpsc::Receiver<Message>,
        sink: Arc<dyn MetricsSink>,
    ) -> (Self, RouterHandle) {
        let (to_gateway_tx, to_gateway_rx) = mpsc::channel(TO_GATEWAY_QUEUE);
        let (events_tx, events_rx) = mpsc::channel(EVENT_QUEUE);

        (
            Self {
                local_uuid,
                session,
                apps: HashMap::new(),
                to_gateway_rx,
                from_gateway_rx,
                events_rx,
                sink,
            },
            RouterHandle {
                to_gateway: to_gateway_tx,
                events: events_tx,
            },
        )
    }

    /// Main loop; runs until the shutdown signal fires.
    pub async fn run(mut self, mut shutdown: broadcast::Receiver<()>) {
        info!("router running");
        loop {
            tokio::select! {
                _ = shutdown.recv() => {
                    info!("router shutting down");
                    return;
                }
                event = self.events_rx.recv() => {
                    match event {
                        Some(event) => self.handle_event(event),
                        None => return,
                    }
                }
                message = self.to_gateway_rx.recv() => {
                    match message {
                        Some(message) => self.handle_app_message(message),
                        None => return,
                    }
                }
                message = self.from_gateway_rx.recv() => {
                    match message {
                        Some(message) => self.handle_gateway_message(&message),
                        None => return,
                    }
                }
            }
        }
    }

    fn handle_event(&mut self, event: RouterEvent) {
        match event {
            RouterEvent::Register {
                peer,
                uuid,
                outbound,
            } => {
                info!(%peer, app = %uuid, "app registered");
                self.apps.insert(peer, AppEntry { uuid, outbound });
            }
            RouterEvent::Deregister { peer } => {
                if self.apps.remove(&peer).is_some() {
                    info!(%peer, "app deregistered");
                }
            }
        }
    }

    /// Forward an app-originated message to the gateway, masqueraded as the
    /// proxy. Never blocks: an unavailable or congested session drops the
    /// message.
    fn handle_app_message(&mut self, mut message: Message) {
        if message.op_type().is_none() {
            warn!(%message, "dropping message with unknown operation type");
            self.sink
                .counter_inc(names::DROPPED, &[("reason", "unknown_operation")]);
            return;
        }

        self.emit_metrics(names::PROXY_MESSAGE_TO_GATEWAY, &message);

        let Some(gateway) = self.session.state().gateway() else {
            warn!(%message, "session unavailable, dropping message for gateway");
            self.sink
                .counter_inc(names::DROPPED, &[("reason", "session_unavailable")]);
            return;
        };

        message.src = self.local_uuid;
        message.dst = gateway;
        match self.session.try_forward(message) {
            Ok(()) => {}
            Err(SessionError::Busy) => {
                warn!("session outbound queue full, dropping message");
                self.sink
                    .counter_inc(names::DROPPED, &[("reason", "session_busy")]);
            }
            Err(e) => {
                warn!(error = %e, "session unavailable, dropping message for gateway");
                self.sink
                    .counter_inc(names::DROPPED, &[("reason", "session_unavailable")]);
            }
        }
    }

    /// Fan a gateway-originated message out to every registered app, one
    /// copy per app, masqueraded so each app sees itself addressed.
    fn handle_gateway_message(&mut self, message: &Message) {
        // Apps run their own keep-alive against the proxy; the reply to the
        // session's keep-alive must never reach them.
        if message.op_type() == Some(OperationType::CnTimeConfirmType) {
            debug!("dropping keep-alive confirm from gateway");
            return;
        }

        self.emit_metrics(names::PROXY_MESSAGE_FROM_GATEWAY, message);

        if let Payload::CnAlarmNotification(alarm) = &message.payload {
            warn!(
                zone = alarm.zone,
                node_id = alarm.node_id,
                error_id = alarm.error_id,
                serial = alarm.serial_number.as_deref().unwrap_or(""),
                "alarm notification from gateway"
            );
        }

        for (peer, app) in &self.apps {
            let mut copy = message.clone();
            copy.src = self.local_uuid;
            copy.dst = app.uuid;
            match app.outbound.try_send(copy) {
                Ok(()) => {}
                Err(mpsc::error::TrySendError::Full(_)) => {
                    warn!(%peer, "app queue full, dropping copy");
                    self.sink
                        .counter_inc(names::DROPPED, &[("reason", "app_queue_full")]);
                }
                Err(mpsc::error::TrySendError::Closed(_)) => {
                    // Handler is going away; the deregister event follows.
                    debug!(%peer, "app channel closed");
                }
            }
        }
    }

    /// Per-message metrics: the direction counter, and for telemetry
    /// notifications the decoded gauge value.
    fn emit_metrics(&self, counter: &'static str, message: &Message) {
        self.sink
            .counter_inc(counter, &[("message_type", message.type_name())]);

        if let Payload::CnRpdoNotification(notification) = &message.payload {
            let ppid = notification.pdid.unwrap_or(0);
            let data = notification.data.as_deref().unwrap_or(&[]);
            let (value, known) = rpdo::decode(ppid, data);
            if !known {
                self.sink
                    .counter_inc(names::PDO_UNKNOWN, &[("ID", &ppid.to_string())]);
            }
            self.sink.gauge_set(
                names::PDO_VALUE,
                &[("ID", &value.ppid.to_string()), ("description", value.label)],
                value.value,
            );
        }
    }
}
