//! TCP listener for inbound app connections.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tracing::{info, warn};

use crate::telemetry::{names, MetricsSink};

use super::handler::handle_connection;
use super::router::RouterHandle;

/// Accepts app connections on the protocol port and spawns one handler task
/// per connection.
pub struct AppListener {
    listener: TcpListener,
    router: RouterHandle,
    sink: Arc<dyn MetricsSink>,
}

impl AppListener {
    /// Bind the listener socket.
    ///
    /// # Errors
    ///
    /// Returns the bind error of the underlying socket.
    pub async fn bind(
        addr: SocketAddr,
        router: RouterHandle,
        sink: Arc<dyn MetricsSink>,
    ) -> std::io::Result<Self> {
        let listener = TcpListener::bind(addr).await?;
        info!(listen = %addr, "app listener ready");
        Ok(Self {
            listener,
            router,
            sink,
        })
    }

    /// Local address of the bound socket.
    ///
    /// # Errors
    ///
    /// Returns the socket's I/O error.
    pub fn local_addr(&self) -> std::io::Result<SocketAddr> {
        self.listener.local_addr()
    }

    /// Accept loop; runs until the shutdown signal fires. Handlers observe
    /// the same signal and finish their in-flight frame before exiting.
    pub async fn run(self, shutdown: broadcast::Sender<()>) {
        let mut shutdown_rx = shutdown.subscribe();
        loop {
            tokio::select! {
                _ = shutdown_rx.recv() => {
                    info!("app listener shutting down");
                    return;
                }
                accepted = self.listener.accept() => {
                    let (stream, peer) = match accepted {
                        Ok(accepted) => accepted,
                        Err(e) => {
                            warn!(error = %e, "accept failed");
                            tokio::time::sleep(Duration::from_millis(100)).await;
                            continue;
                        }
                    };

                    self.sink.gauge_add(names::LISTENER_CONNECTIONS, &[], 1.0);
                    let router = self.router.clone();
                    let sink = Arc::clone(&self.sink);
                    let handler_shutdown = shutdown.clone();
                    tokio::spawn(async move {
                        handle_connection(stream, peer, router, Arc::clone(&sink), handler_shutdown)
                            .await;
                        sink.gauge_add(names::LISTENER_CONNECTIONS, &[], -1.0);
                    });
                }
            }
        }
    }
}
