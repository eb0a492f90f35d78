//! End-to-end tests against a mock gateway over real sockets.
//!
//! The mock gateway binds TCP and UDP on the same ephemeral port, answers
//! discovery probes and the Register/StartSession handshake, records every
//! other message it receives, and can push messages or drop the connection
//! on command.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use prost::Message as _;
use tokio::net::{TcpListener, TcpStream, UdpSocket};
use tokio::sync::{broadcast, mpsc};
use tokio::time::timeout;

use comfo_proxy::discovery::{
    DiscoveryResponder, PROBE, RESPONSE_HEADER, SEARCH_GATEWAY_VERSION,
};
use comfo_proxy::proto::{self, GatewayResult, OperationType, SearchGatewayResponse};
use comfo_proxy::protocol::{codec, registry, Message, Payload, Uuid};
use comfo_proxy::proxy::{router, AppListener, Router};
use comfo_proxy::session::{SessionConfig, SessionState, UpstreamSession};
use comfo_proxy::telemetry::{names, RecordingSink};

const TICK: Duration = Duration::from_secs(5);

fn app_uuid(tag: u8) -> Uuid {
    let mut bytes = [0u8; 16];
    bytes[..10].copy_from_slice(&[0x00, 0x00, 0x00, 0x00, 0x00, 0x25, 0x10, 0x10, 0x80, 0x01]);
    bytes[10..].copy_from_slice(&[0x11, 0x11, 0x11, 0x11, 0x11, tag]);
    Uuid::from_bytes(bytes)
}

/// Commands accepted by the mock gateway's connection task.
enum GatewayCommand {
    /// Write this message to the connected proxy.
    Send(Message),
    /// Close the current connection; keep accepting new ones.
    DropConnection,
}

struct MockGateway {
    port: u16,
    uuid: Uuid,
    received: mpsc::UnboundedReceiver<Message>,
    commands: mpsc::UnboundedSender<GatewayCommand>,
}

impl MockGateway {
    async fn spawn() -> Self {
        let tcp = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let port = tcp.local_addr().unwrap().port();
        let udp = UdpSocket::bind(("127.0.0.1", port)).await.unwrap();
        let uuid = Uuid::from_suffix([0xde, 0xad, 0xbe, 0xef, 0x00, 0x01]);

        // Discovery side: answer every probe with the announcement.
        let announcement = {
            let response = SearchGatewayResponse {
                ipaddress: "127.0.0.1".to_string(),
                uuid: uuid.as_bytes().to_vec(),
                version: SEARCH_GATEWAY_VERSION,
            };
            let mut datagram = RESPONSE_HEADER.to_vec();
            datagram.extend_from_slice(&response.encode_to_vec());
            datagram
        };
        tokio::spawn(async move {
            let mut buf = [0u8; 64];
            while let Ok((_, peer)) = udp.recv_from(&mut buf).await {
                let _ = udp.send_to(&announcement, peer).await;
            }
        });

        let (received_tx, received) = mpsc::unbounded_channel();
        let (commands_tx, mut commands_rx) = mpsc::unbounded_channel::<GatewayCommand>();

        tokio::spawn(async move {
            loop {
                let Ok((stream, _)) = tcp.accept().await else {
                    return;
                };
                serve_gateway_connection(stream, &received_tx, &mut commands_rx).await;
            }
        });

        Self {
            port,
            uuid,
            received,
            commands: commands_tx,
        }
    }

    fn push(&self, message: Message) {
        self.commands.send(GatewayCommand::Send(message)).unwrap();
    }

    fn drop_connection(&self) {
        self.commands.send(GatewayCommand::DropConnection).unwrap();
    }

    async fn next_message(&mut self) -> Message {
        timeout(Duration::from_secs(10), self.received.recv())
            .await
            .expect("gateway expected a message")
            .expect("gateway channel closed")
    }

    /// All messages currently queued, excluding keep-alives.
    fn drain_non_keepalive(&mut self) -> Vec<Message> {
        let mut messages = Vec::new();
        while let Ok(message) = self.received.try_recv() {
            if message.op_type() != Some(OperationType::CnTimeRequestType) {
                messages.push(message);
            }
        }
        messages
    }
}

/// Serve one proxy connection: answer the handshake, record the rest.
///
/// A dedicated reader task keeps frame reads whole; handshake replies and
/// pushed messages funnel through one writer loop.
async fn serve_gateway_connection(
    stream: TcpStream,
    received: &mpsc::UnboundedSender<Message>,
    commands: &mut mpsc::UnboundedReceiver<GatewayCommand>,
) {
    let (mut read_half, mut write_half) = stream.into_split();
    let (reply_tx, mut reply_rx) = mpsc::unbounded_channel::<Message>();

    let received = received.clone();
    let reader = tokio::spawn(async move {
        while let Ok(message) = codec::read_message(&mut read_half).await {
            let reply = match message.op_type() {
                Some(OperationType::RegisterAppRequestType) => Some(message.reply(
                    OperationType::RegisterAppConfirmType,
                    Some(GatewayResult::Ok),
                    Payload::RegisterAppConfirm(proto::RegisterAppConfirm::default()),
                )),
                Some(OperationType::StartSessionRequestType) => Some(message.reply(
                    OperationType::StartSessionConfirmType,
                    Some(GatewayResult::Ok),
                    Payload::StartSessionConfirm(proto::StartSessionConfirm::default()),
                )),
                _ => {
                    let _ = received.send(message);
                    None
                }
            };
            if let Some(reply) = reply {
                if reply_tx.send(reply).is_err() {
                    return;
                }
            }
        }
    });

    loop {
        tokio::select! {
            reply = reply_rx.recv() => {
                let Some(reply) = reply else { break };
                if codec::write_message(&mut write_half, &reply).await.is_err() {
                    break;
                }
            }
            command = commands.recv() => match command {
                Some(GatewayCommand::Send(message)) => {
                    if codec::write_message(&mut write_half, &message).await.is_err() {
                        break;
                    }
                }
                Some(GatewayCommand::DropConnection) | None => break,
            },
        }
    }
    reader.abort();
}

struct TestProxy {
    app_addr: SocketAddr,
    udp_addr: SocketAddr,
    local_uuid: Uuid,
    session: UpstreamSession,
    sink: Arc<RecordingSink>,
    shutdown: broadcast::Sender<()>,
}

impl TestProxy {
    async fn start(gateway_port: u16) -> Self {
        let local_uuid = Uuid::from_suffix([0xb8, 0x27, 0xeb, 0x00, 0x00, 0x01]);
        let sink = Arc::new(RecordingSink::new());
        let (shutdown, _) = broadcast::channel(1);

        let responder = DiscoveryResponder::bind(
            "127.0.0.1:0".parse().unwrap(),
            "127.0.0.1",
            local_uuid,
        )
        .await
        .unwrap();
        let udp_addr = responder.local_addr().unwrap();
        tokio::spawn(responder.run(shutdown.subscribe()));

        let (from_gateway_tx, from_gateway_rx) = mpsc::channel(router::FROM_GATEWAY_QUEUE);
        let (session, _session_task) = UpstreamSession::start(
            SessionConfig {
                gateway_host: "127.0.0.1".to_string(),
                port: gateway_port,
                local_uuid,
                pin: 0,
                device_name: "Proxy".to_string(),
            },
            from_gateway_tx,
            sink.clone(),
            shutdown.clone(),
        );

        let (router, handle) = Router::new(local_uuid, session.clone(), from_gateway_rx, sink.clone());
        tokio::spawn(router.run(shutdown.subscribe()));

        let listener = AppListener::bind("127.0.0.1:0".parse().unwrap(), handle, sink.clone())
            .await
            .unwrap();
        let app_addr = listener.local_addr().unwrap();
        tokio::spawn(listener.run(shutdown.clone()));

        Self {
            app_addr,
            udp_addr,
            local_uuid,
            session,
            sink,
            shutdown,
        }
    }

    async fn wait_for_state(&self, want_active: bool) {
        let mut watch = self.session.watch_state();
        timeout(Duration::from_secs(15), async {
            loop {
                let is_active = matches!(*watch.borrow(), SessionState::Active(_));
                if is_active == want_active {
                    return;
                }
                watch.changed().await.expect("state channel closed");
            }
        })
        .await
        .expect("session did not reach the expected state");
    }
}

impl Drop for TestProxy {
    fn drop(&mut self) {
        let _ = self.shutdown.send(());
    }
}

/// An app connection speaking the framed protocol to the proxy.
struct TestApp {
    stream: TcpStream,
    uuid: Uuid,
    proxy_uuid: Uuid,
}

impl TestApp {
    async fn connect(proxy: &TestProxy, tag: u8) -> Self {
        Self {
            stream: TcpStream::connect(proxy.app_addr).await.unwrap(),
            uuid: app_uuid(tag),
            proxy_uuid: proxy.local_uuid,
        }
    }

    async fn send(&mut self, op: OperationType, reference: u32, payload: Payload) {
        let message = Message::new(self.uuid, self.proxy_uuid, op, Some(reference), payload);
        codec::write_message(&mut self.stream, &message).await.unwrap();
    }

    async fn recv(&mut self) -> Message {
        timeout(TICK, codec::read_message(&mut self.stream))
            .await
            .expect("app expected a message")
            .expect("read failed")
    }

    async fn expect_no_message(&mut self) {
        let result = timeout(Duration::from_millis(500), codec::read_message(&mut self.stream)).await;
        assert!(result.is_err(), "expected silence, got {:?}", result);
    }

    /// Run the Register + StartSession handshake and consume the two node
    /// notifications.
    async fn handshake(&mut self) {
        self.send(
            OperationType::RegisterAppRequestType,
            7,
            Payload::RegisterAppRequest(proto::RegisterAppRequest {
                uuid: Some(self.uuid.as_bytes().to_vec()),
                pin: Some(0),
                devicename: Some("test".to_string()),
            }),
        )
        .await;
        let confirm = self.recv().await;
        assert_eq!(confirm.op_type(), Some(OperationType::RegisterAppConfirmType));
        assert_eq!(confirm.reference(), Some(7));

        self.send(
            OperationType::StartSessionRequestType,
            8,
            Payload::StartSessionRequest(proto::StartSessionRequest::default()),
        )
        .await;
        let confirm = self.recv().await;
        assert_eq!(confirm.op_type(), Some(OperationType::StartSessionConfirmType));
        assert_eq!(confirm.reference(), Some(8));

        for _ in 0..2 {
            let notification = self.recv().await;
            assert_eq!(
                notification.op_type(),
                Some(OperationType::CnNodeNotificationType)
            );
        }
    }
}

// ============================================================================
// S1: Discovery
// ============================================================================

#[tokio::test]
async fn test_discovery_impersonation() {
    let gateway = MockGateway::spawn().await;
    let proxy = TestProxy::start(gateway.port).await;

    let socket = UdpSocket::bind("127.0.0.1:0").await.unwrap();
    socket.send_to(&PROBE, proxy.udp_addr).await.unwrap();

    let mut buf = [0u8; 1024];
    let (n, _) = timeout(TICK, socket.recv_from(&mut buf)).await.unwrap().unwrap();

    assert_eq!(&buf[..2], &RESPONSE_HEADER);
    let response = SearchGatewayResponse::decode(&buf[2..n]).unwrap();
    assert_eq!(response.ipaddress, "127.0.0.1");
    assert_eq!(response.uuid, proxy.local_uuid.as_bytes().to_vec());
    assert_eq!(response.version, 1);
}

#[tokio::test]
async fn test_discovery_client_reads_gateway_uuid() {
    let gateway = MockGateway::spawn().await;
    let uuid = comfo_proxy::discovery::discover_gateway("127.0.0.1", gateway.port)
        .await
        .unwrap();
    assert_eq!(uuid, gateway.uuid);
}

// ============================================================================
// S2: App handshake is terminated locally
// ============================================================================

#[tokio::test]
async fn test_app_handshake_never_reaches_gateway() {
    let mut gateway = MockGateway::spawn().await;
    let proxy = TestProxy::start(gateway.port).await;
    proxy.wait_for_state(true).await;

    let mut app = TestApp::connect(&proxy, 0x12).await;

    // Register
    app.send(
        OperationType::RegisterAppRequestType,
        7,
        Payload::RegisterAppRequest(proto::RegisterAppRequest {
            uuid: Some(app.uuid.as_bytes().to_vec()),
            pin: Some(0),
            devicename: Some("test".to_string()),
        }),
    )
    .await;
    let confirm = app.recv().await;
    assert_eq!(confirm.op_type(), Some(OperationType::RegisterAppConfirmType));
    assert_eq!(confirm.reference(), Some(7));
    assert_eq!(confirm.result(), Some(GatewayResult::Ok));
    // src/dst swapped relative to the request
    assert_eq!(confirm.src, proxy.local_uuid);
    assert_eq!(confirm.dst, app.uuid);

    // StartSession
    app.send(
        OperationType::StartSessionRequestType,
        8,
        Payload::StartSessionRequest(proto::StartSessionRequest::default()),
    )
    .await;
    let confirm = app.recv().await;
    assert_eq!(confirm.op_type(), Some(OperationType::StartSessionConfirmType));
    assert_eq!(confirm.reference(), Some(8));
    assert_eq!(confirm.result(), Some(GatewayResult::Ok));

    // Two synthetic node notifications
    let first = app.recv().await;
    assert_eq!(first.op_type(), Some(OperationType::CnNodeNotificationType));
    assert_eq!(first.reference(), None);
    let Payload::CnNodeNotification(node) = &first.payload else {
        panic!("unexpected payload: {:?}", first.payload);
    };
    assert_eq!((node.node_id, node.product_id, node.zone_id), (Some(1), Some(1), Some(1)));

    let second = app.recv().await;
    let Payload::CnNodeNotification(node) = &second.payload else {
        panic!("unexpected payload: {:?}", second.payload);
    };
    assert_eq!(
        (node.node_id, node.product_id, node.zone_id),
        (Some(48), Some(5), Some(255))
    );

    // Nothing of this reached the gateway.
    tokio::time::sleep(Duration::from_millis(200)).await;
    assert!(gateway.drain_non_keepalive().is_empty());
}

#[tokio::test]
async fn test_other_local_terminations() {
    let mut gateway = MockGateway::spawn().await;
    let proxy = TestProxy::start(gateway.port).await;
    proxy.wait_for_state(true).await;

    let mut app = TestApp::connect(&proxy, 0x13).await;
    app.handshake().await;

    // CnTime
    app.send(
        OperationType::CnTimeRequestType,
        9,
        Payload::CnTimeRequest(proto::CnTimeRequest::default()),
    )
    .await;
    let reply = app.recv().await;
    assert_eq!(reply.op_type(), Some(OperationType::CnTimeConfirmType));
    assert_eq!(reply.reference(), Some(9));
    let Payload::CnTimeConfirm(time) = &reply.payload else {
        panic!("unexpected payload");
    };
    // Seconds since 2000; anything after 2020 is > 630M.
    assert!(time.current_time.unwrap() > 630_000_000);

    // Version
    app.send(
        OperationType::VersionRequestType,
        10,
        Payload::VersionRequest(proto::VersionRequest::default()),
    )
    .await;
    let reply = app.recv().await;
    assert_eq!(reply.op_type(), Some(OperationType::VersionConfirmType));
    let Payload::VersionConfirm(version) = &reply.payload else {
        panic!("unexpected payload");
    };
    assert_eq!(version.gateway_version, Some(0x0010_0C0A));
    assert_eq!(version.comfo_net_version, Some(0x4000_1000));
    assert_eq!(version.serial_number.as_deref(), Some("DEM0116371204"));

    // GetRemoteAccessId
    app.send(
        OperationType::GetRemoteAccessIdRequestType,
        11,
        Payload::GetRemoteAccessIdRequest(proto::GetRemoteAccessIdRequest::default()),
    )
    .await;
    let reply = app.recv().await;
    assert_eq!(reply.op_type(), Some(OperationType::GetRemoteAccessIdConfirmType));
    let Payload::GetRemoteAccessIdConfirm(confirm) = &reply.payload else {
        panic!("unexpected payload");
    };
    assert_eq!(confirm.uuid.as_ref().unwrap().len(), 16);

    // CloseSession: confirm without result
    app.send(
        OperationType::CloseSessionRequestType,
        12,
        Payload::CloseSessionRequest(proto::CloseSessionRequest::default()),
    )
    .await;
    let reply = app.recv().await;
    assert_eq!(reply.op_type(), Some(OperationType::CloseSessionConfirmType));
    assert_eq!(reply.reference(), Some(12));
    assert_eq!(reply.operation.result, None);

    tokio::time::sleep(Duration::from_millis(200)).await;
    assert!(gateway.drain_non_keepalive().is_empty());
}

// ============================================================================
// S3: PDO forwarding and fan-out
// ============================================================================

#[tokio::test]
async fn test_pdo_fanout_and_gauge() {
    let gateway = MockGateway::spawn().await;
    let proxy = TestProxy::start(gateway.port).await;
    proxy.wait_for_state(true).await;

    let mut first = TestApp::connect(&proxy, 0x01).await;
    first.handshake().await;
    let mut second = TestApp::connect(&proxy, 0x02).await;
    second.handshake().await;
    tokio::time::sleep(Duration::from_millis(100)).await;

    gateway.push(Message::new(
        gateway.uuid,
        proxy.local_uuid,
        OperationType::CnRpdoNotificationType,
        None,
        Payload::CnRpdoNotification(proto::CnRpdoNotification {
            pdid: Some(128),
            data: Some(vec![0x00, 0x0A]),
        }),
    ));

    for app in [&mut first, &mut second] {
        let notification = app.recv().await;
        assert_eq!(
            notification.op_type(),
            Some(OperationType::CnRpdoNotificationType)
        );
        // Masquerade toward the app
        assert_eq!(notification.src, proxy.local_uuid);
        assert_eq!(notification.dst, app.uuid);
    }

    assert_eq!(
        proxy.sink.last_gauge_set(names::PDO_VALUE, ("ID", "128")),
        Some(10.0)
    );
    assert_eq!(
        proxy.sink.counter_with_label(
            names::PROXY_MESSAGE_FROM_GATEWAY,
            ("message_type", "CnRpdoNotificationType")
        ),
        1
    );
}

#[tokio::test]
async fn test_app_request_is_masqueraded_toward_gateway() {
    let mut gateway = MockGateway::spawn().await;
    let proxy = TestProxy::start(gateway.port).await;
    proxy.wait_for_state(true).await;

    let mut app = TestApp::connect(&proxy, 0x03).await;
    app.handshake().await;

    app.send(
        OperationType::CnRpdoRequestType,
        42,
        Payload::CnRpdoRequest(proto::CnRpdoRequest {
            pdid: Some(128),
            zone: Some(255),
            r#type: Some(2),
            timeout: None,
        }),
    )
    .await;

    let forwarded = gateway.next_message().await;
    assert_eq!(forwarded.op_type(), Some(OperationType::CnRpdoRequestType));
    // Masquerade toward the gateway; the app's reference is preserved.
    assert_eq!(forwarded.src, proxy.local_uuid);
    assert_eq!(forwarded.dst, gateway.uuid);
    assert_eq!(forwarded.reference(), Some(42));
}

// ============================================================================
// Keep-alive filter
// ============================================================================

#[tokio::test]
async fn test_cn_time_confirm_from_gateway_is_never_fanned_out() {
    let gateway = MockGateway::spawn().await;
    let proxy = TestProxy::start(gateway.port).await;
    proxy.wait_for_state(true).await;

    let mut app = TestApp::connect(&proxy, 0x04).await;
    app.handshake().await;
    tokio::time::sleep(Duration::from_millis(100)).await;

    gateway.push(Message::new(
        gateway.uuid,
        proxy.local_uuid,
        OperationType::CnTimeConfirmType,
        Some(3),
        Payload::CnTimeConfirm(proto::CnTimeConfirm {
            current_time: Some(1),
        }),
    ));
    gateway.push(Message::new(
        gateway.uuid,
        proxy.local_uuid,
        OperationType::CnRpdoConfirmType,
        Some(4),
        Payload::CnRpdoConfirm(proto::CnRpdoConfirm::default()),
    ));

    // The confirm following the filtered keep-alive arrives first.
    let message = app.recv().await;
    assert_eq!(message.op_type(), Some(OperationType::CnRpdoConfirmType));
    app.expect_no_message().await;
}

// ============================================================================
// S4: Upstream reconnect
// ============================================================================

#[tokio::test]
async fn test_upstream_reconnect_keeps_apps_alive() {
    let gateway = MockGateway::spawn().await;
    let proxy = TestProxy::start(gateway.port).await;
    proxy.wait_for_state(true).await;

    let mut app = TestApp::connect(&proxy, 0x05).await;
    app.handshake().await;

    gateway.drop_connection();
    proxy.wait_for_state(false).await;

    // App-originated requests are dropped while the session is away.
    app.send(
        OperationType::CnRpdoRequestType,
        50,
        Payload::CnRpdoRequest(proto::CnRpdoRequest {
            pdid: Some(128),
            zone: Some(255),
            r#type: Some(2),
            timeout: None,
        }),
    )
    .await;
    timeout(TICK, async {
        loop {
            if proxy
                .sink
                .counter_with_label(names::DROPPED, ("reason", "session_unavailable"))
                > 0
            {
                return;
            }
            tokio::time::sleep(Duration::from_millis(50)).await;
        }
    })
    .await
    .expect("drop was not recorded");

    // The app connection stays up: local termination still works.
    app.send(
        OperationType::CnTimeRequestType,
        51,
        Payload::CnTimeRequest(proto::CnTimeRequest::default()),
    )
    .await;
    let reply = app.recv().await;
    assert_eq!(reply.op_type(), Some(OperationType::CnTimeConfirmType));

    // Within the reconnect backoff plus handshake, the session is back.
    proxy.wait_for_state(true).await;
}

// ============================================================================
// S5: Malformed frames are contained to their connection
// ============================================================================

#[tokio::test]
async fn test_malformed_frame_closes_only_that_connection() {
    let gateway = MockGateway::spawn().await;
    let proxy = TestProxy::start(gateway.port).await;
    proxy.wait_for_state(true).await;

    let mut healthy = TestApp::connect(&proxy, 0x06).await;
    healthy.handshake().await;

    let mut broken = TestApp::connect(&proxy, 0x07).await;
    broken.handshake().await;
    {
        use tokio::io::AsyncWriteExt;
        let mut frame = vec![];
        frame.extend_from_slice(&99_999u32.to_be_bytes());
        frame.extend_from_slice(&[0u8; 34]);
        broken.stream.write_all(&frame).await.unwrap();
    }

    // The offending connection is closed...
    timeout(TICK, async {
        loop {
            match codec::read_message(&mut broken.stream).await {
                Ok(_) => {}
                Err(_) => return,
            }
        }
    })
    .await
    .expect("connection was not closed");

    // ...while the healthy one keeps working.
    healthy
        .send(
            OperationType::CnTimeRequestType,
            60,
            Payload::CnTimeRequest(proto::CnTimeRequest::default()),
        )
        .await;
    let reply = healthy.recv().await;
    assert_eq!(reply.op_type(), Some(OperationType::CnTimeConfirmType));

    drop(gateway);
}

// ============================================================================
// S6: Keep-alive toward the gateway
// ============================================================================

#[tokio::test]
async fn test_keepalive_references_increase() {
    let mut gateway = MockGateway::spawn().await;
    let proxy = TestProxy::start(gateway.port).await;
    proxy.wait_for_state(true).await;

    let mut references = Vec::new();
    let deadline = Duration::from_secs(13);
    timeout(deadline, async {
        while references.len() < 2 {
            let message = gateway.next_message().await;
            if message.op_type() == Some(OperationType::CnTimeRequestType) {
                references.push(message.reference().unwrap());
            }
        }
    })
    .await
    .expect("expected at least two keep-alives");

    // Handshake used references 1 and 2; keep-alives continue from there,
    // strictly increasing.
    assert!(references[0] >= 3);
    assert!(references.windows(2).all(|w| w[1] == w[0] + 1));

    assert!(proxy.session.is_active());
}

// ============================================================================
// Registry sanity used by local termination
// ============================================================================

#[test]
fn test_local_termination_set_is_request_only() {
    for op in [
        OperationType::RegisterAppRequestType,
        OperationType::StartSessionRequestType,
        OperationType::CloseSessionRequestType,
        OperationType::CnTimeRequestType,
        OperationType::VersionRequestType,
        OperationType::GetRemoteAccessIdRequestType,
    ] {
        assert!(registry::confirm_type(op).is_some(), "{op:?}");
    }
}
