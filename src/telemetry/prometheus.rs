//! Prometheus implementation of the metrics sink.
//!
//! Registers the public metric names up front and serves the registry in
//! Prometheus text exposition format on `GET /metrics`.

use std::collections::HashMap;
use std::sync::atomic::AtomicU64;
use std::sync::Arc;

use axum::extract::State;
use axum::http::header;
use axum::response::IntoResponse;
use axum::routing::get;
use prometheus_client::encoding::text::encode;
use prometheus_client::metrics::counter::Counter;
use prometheus_client::metrics::family::Family;
use prometheus_client::metrics::gauge::Gauge;
use prometheus_client::registry::Registry;
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tracing::{error, info};

use super::{names, MetricsSink};

/// Content-Type header value for Prometheus text format.
pub const PROMETHEUS_CONTENT_TYPE: &str = "text/plain; version=0.0.4; charset=utf-8";

type Labels = Vec<(String, String)>;
type FloatGauge = Gauge<f64, AtomicU64>;

/// Counters of the public contract: exposition name and help text. The
/// `_total` suffix is appended by the encoder and therefore stripped from
/// the registered name.
const COUNTERS: &[(&str, &str)] = &[
    (
        names::LISTENER_MESSAGE_SENT,
        "Number of messages sent by the listener.",
    ),
    (
        names::LISTENER_MESSAGE_RECEIVED,
        "Number of messages received by the listener main loop.",
    ),
    (
        names::LISTENER_MESSAGE_RECEIVER,
        "Number of messages received by the listener reader task.",
    ),
    (
        names::PROXY_MESSAGE_TO_GATEWAY,
        "Number of messages sent to the gateway.",
    ),
    (
        names::PROXY_MESSAGE_FROM_GATEWAY,
        "Number of messages received from the gateway.",
    ),
    (
        names::DROPPED,
        "Number of messages dropped by the proxy.",
    ),
    (
        names::PDO_UNKNOWN,
        "Number of telemetry notifications with an unknown ppid.",
    ),
];

const GAUGES: &[(&str, &str)] = &[
    (
        names::PDO_VALUE,
        "Last decoded value per telemetry point.",
    ),
    (
        names::LISTENER_CONNECTIONS,
        "Number of connections to the listener.",
    ),
    (
        names::CLIENT_CONNECTED,
        "If the client is connected to the gateway.",
    ),
];

/// Metrics sink backed by a `prometheus_client` registry.
pub struct PrometheusSink {
    registry: Registry,
    counters: HashMap<&'static str, Family<Labels, Counter>>,
    gauges: HashMap<&'static str, Family<Labels, FloatGauge>>,
}

impl PrometheusSink {
    /// Create a sink with every metric of the public contract registered.
    #[must_use]
    pub fn new() -> Self {
        let mut registry = Registry::default();
        let mut counters = HashMap::new();
        let mut gauges = HashMap::new();

        for &(name, help) in COUNTERS {
            let family = Family::<Labels, Counter>::default();
            // The text encoder appends the `_total` suffix to counters.
            let registered = name.strip_suffix("_total").unwrap_or(name);
            registry.register(registered, help, family.clone());
            counters.insert(name, family);
        }
        for &(name, help) in GAUGES {
            let family = Family::<Labels, FloatGauge>::default();
            registry.register(name, help, family.clone());
            gauges.insert(name, family);
        }

        Self {
            registry,
            counters,
            gauges,
        }
    }

    /// Render the registry in Prometheus text exposition format.
    #[must_use]
    pub fn render(&self) -> String {
        let mut buffer = String::new();
        encode(&mut buffer, &self.registry).expect("encoding metrics should not fail");
        buffer
    }

    fn gauge(&self, name: &'static str, labels: &[(&'static str, &str)]) -> Option<FloatGauge> {
        let Some(family) = self.gauges.get(name) else {
            debug_assert!(false, "gauge {name} is not part of the metric contract");
            error!(metric = name, "unknown gauge name");
            return None;
        };
        Some(family.get_or_create(&owned(labels)).clone())
    }
}

impl Default for PrometheusSink {
    fn default() -> Self {
        Self::new()
    }
}

fn owned(labels: &[(&'static str, &str)]) -> Labels {
    labels
        .iter()
        .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
        .collect()
}

impl MetricsSink for PrometheusSink {
    fn counter_inc(&self, name: &'static str, labels: &[(&'static str, &str)]) {
        let Some(family) = self.counters.get(name) else {
            debug_assert!(false, "counter {name} is not part of the metric contract");
            error!(metric = name, "unknown counter name");
            return;
        };
        family.get_or_create(&owned(labels)).inc();
    }

    fn gauge_set(&self, name: &'static str, labels: &[(&'static str, &str)], value: f64) {
        if let Some(gauge) = self.gauge(name, labels) {
            gauge.set(value);
        }
    }

    fn gauge_add(&self, name: &'static str, labels: &[(&'static str, &str)], delta: f64) {
        if let Some(gauge) = self.gauge(name, labels) {
            if delta >= 0.0 {
                gauge.inc_by(delta);
            } else {
                gauge.dec_by(-delta);
            }
        }
    }
}

async fn metrics_handler(State(sink): State<Arc<PrometheusSink>>) -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, PROMETHEUS_CONTENT_TYPE)],
        sink.render(),
    )
}

/// Serve `GET /metrics` until the shutdown signal fires.
///
/// # Errors
///
/// Returns the I/O error of the HTTP server, if any.
pub async fn serve_metrics(
    listener: TcpListener,
    sink: Arc<PrometheusSink>,
    mut shutdown: broadcast::Receiver<()>,
) -> std::io::Result<()> {
    let app = axum::Router::new()
        .route("/metrics", get(metrics_handler))
        .with_state(sink);

    if let Ok(addr) = listener.local_addr() {
        info!(listen = %addr, "metrics endpoint ready");
    }

    axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            let _ = shutdown.recv().await;
        })
        .await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_contains_contract_names() {
        let sink = PrometheusSink::new();
        let output = sink.render();
        assert!(output.contains("comfoconnect_pdo_value"));
        assert!(output.contains("comfoconnect_proxy_listener_connections"));
    }

    #[test]
    fn test_counter_appears_with_total_suffix() {
        let sink = PrometheusSink::new();
        sink.counter_inc(
            names::PROXY_MESSAGE_TO_GATEWAY,
            &[("message_type", "CnRpdoRequestType")],
        );
        let output = sink.render();
        assert!(output.contains("comfoconnect_proxy_proxy_message_toGateway_total"));
        assert!(output.contains("message_type=\"CnRpdoRequestType\""));
    }

    #[test]
    fn test_gauge_set_and_add() {
        let sink = PrometheusSink::new();
        sink.gauge_set(
            names::PDO_VALUE,
            &[("ID", "128"), ("description", "Power Consumption: Current Ventilation")],
            10.0,
        );
        sink.gauge_add(names::LISTENER_CONNECTIONS, &[], 1.0);
        sink.gauge_add(names::LISTENER_CONNECTIONS, &[], -1.0);

        let output = sink.render();
        assert!(output.contains("ID=\"128\""));
        assert!(output.contains("comfoconnect_proxy_listener_connections"));
    }
}
