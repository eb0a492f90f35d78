//! Observability sink consumed by the protocol core.
//!
//! The core never touches a metrics registry directly; every component takes
//! an `Arc<dyn MetricsSink>` at construction. The host wires in the
//! Prometheus implementation from [`prometheus`]; tests inject
//! [`NoopSink`] or [`RecordingSink`]. Structured log events go through
//! `tracing`, which is already an injectable facade.

pub mod prometheus;

use std::fmt;

use parking_lot::Mutex;

pub use prometheus::{serve_metrics, PrometheusSink, PROMETHEUS_CONTENT_TYPE};

/// Metric names that form the public exposition contract.
pub mod names {
    /// Gauge: last decoded telemetry value, labelled `ID`/`description`.
    pub const PDO_VALUE: &str = "comfoconnect_pdo_value";
    /// Gauge: currently connected app connections.
    pub const LISTENER_CONNECTIONS: &str = "comfoconnect_proxy_listener_connections";
    /// Counter: frames written to apps, labelled `message_type`.
    pub const LISTENER_MESSAGE_SENT: &str = "comfoconnect_proxy_listener_message_sent_total";
    /// Counter: frames consumed by the app handler loop, labelled `message_type`.
    pub const LISTENER_MESSAGE_RECEIVED: &str =
        "comfoconnect_proxy_listener_message_received_total";
    /// Counter: frames read off app sockets, labelled `message_type`.
    pub const LISTENER_MESSAGE_RECEIVER: &str =
        "comfoconnect_proxy_listener_message_receiver_total";
    /// Counter: frames forwarded toward the gateway, labelled `message_type`.
    pub const PROXY_MESSAGE_TO_GATEWAY: &str =
        "comfoconnect_proxy_proxy_message_toGateway_total";
    /// Counter: frames received from the gateway, labelled `message_type`.
    pub const PROXY_MESSAGE_FROM_GATEWAY: &str =
        "comfoconnect_proxy_proxy_message_fromGateway_total";
    /// Gauge: 1 while the upstream session is active, 0 otherwise.
    pub const CLIENT_CONNECTED: &str = "comfoconnect_proxy_client_connected_bool";
    /// Counter: messages dropped by the proxy, labelled `reason`.
    pub const DROPPED: &str = "comfoconnect_proxy_drop_total";
    /// Counter: telemetry notifications with a ppid missing from the table.
    pub const PDO_UNKNOWN: &str = "comfoconnect_pdo_unknown_total";
}

/// Narrow metrics interface implemented by the host.
///
/// Implementations must be cheap and non-blocking; they are called from the
/// router's hot path.
pub trait MetricsSink: Send + Sync {
    /// Increment a counter by one.
    fn counter_inc(&self, name: &'static str, labels: &[(&'static str, &str)]);

    /// Set a gauge to an absolute value.
    fn gauge_set(&self, name: &'static str, labels: &[(&'static str, &str)], value: f64);

    /// Add a (possibly negative) delta to a gauge.
    fn gauge_add(&self, name: &'static str, labels: &[(&'static str, &str)], delta: f64);
}

/// Sink that discards every observation.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopSink;

impl MetricsSink for NoopSink {
    fn counter_inc(&self, _name: &'static str, _labels: &[(&'static str, &str)]) {}
    fn gauge_set(&self, _name: &'static str, _labels: &[(&'static str, &str)], _value: f64) {}
    fn gauge_add(&self, _name: &'static str, _labels: &[(&'static str, &str)], _delta: f64) {}
}

/// One recorded observation, for assertions in tests.
#[derive(Debug, Clone, PartialEq)]
pub enum MetricEvent {
    CounterInc {
        name: &'static str,
        labels: Vec<(String, String)>,
    },
    GaugeSet {
        name: &'static str,
        labels: Vec<(String, String)>,
        value: f64,
    },
    GaugeAdd {
        name: &'static str,
        labels: Vec<(String, String)>,
        delta: f64,
    },
}

/// Sink that records every observation in memory.
#[derive(Default)]
pub struct RecordingSink {
    events: Mutex<Vec<MetricEvent>>,
}

impl RecordingSink {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of all recorded events, in emission order.
    #[must_use]
    pub fn events(&self) -> Vec<MetricEvent> {
        self.events.lock().clone()
    }

    /// Total increments recorded for a counter, across all label sets.
    #[must_use]
    pub fn counter_total(&self, name: &str) -> u64 {
        self.events
            .lock()
            .iter()
            .filter(|e| matches!(e, MetricEvent::CounterInc { name: n, .. } if *n == name))
            .count() as u64
    }

    /// Increments recorded for a counter with a specific label value present.
    #[must_use]
    pub fn counter_with_label(&self, name: &str, label: (&str, &str)) -> u64 {
        self.events
            .lock()
            .iter()
            .filter(|e| match e {
                MetricEvent::CounterInc { name: n, labels } => {
                    *n == name && labels.iter().any(|(k, v)| k == label.0 && v == label.1)
                }
                _ => false,
            })
            .count() as u64
    }

    /// The last value set on a gauge with the given label present, if any.
    #[must_use]
    pub fn last_gauge_set(&self, name: &str, label: (&str, &str)) -> Option<f64> {
        self.events
            .lock()
            .iter()
            .rev()
            .find_map(|e| match e {
                MetricEvent::GaugeSet { name: n, labels, value }
                    if *n == name
                        && labels.iter().any(|(k, v)| k == label.0 && v == label.1) =>
                {
                    Some(*value)
                }
                _ => None,
            })
    }
}

impl fmt::Debug for RecordingSink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RecordingSink")
            .field("events", &self.events.lock().len())
            .finish()
    }
}

fn owned_labels(labels: &[(&'static str, &str)]) -> Vec<(String, String)> {
    labels
        .iter()
        .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
        .collect()
}

impl MetricsSink for RecordingSink {
    fn counter_inc(&self, name: &'static str, labels: &[(&'static str, &str)]) {
        self.events.lock().push(MetricEvent::CounterInc {
            name,
            labels: owned_labels(labels),
        });
    }

    fn gauge_set(&self, name: &'static str, labels: &[(&'static str, &str)], value: f64) {
        self.events.lock().push(MetricEvent::GaugeSet {
            name,
            labels: owned_labels(labels),
            value,
        });
    }

    fn gauge_add(&self, name: &'static str, labels: &[(&'static str, &str)], delta: f64) {
        self.events.lock().push(MetricEvent::GaugeAdd {
            name,
            labels: owned_labels(labels),
            delta,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recording_sink_counts() {
        let sink = RecordingSink::new();
        sink.counter_inc(names::PROXY_MESSAGE_TO_GATEWAY, &[("message_type", "CnRpdoRequestType")]);
        sink.counter_inc(names::PROXY_MESSAGE_TO_GATEWAY, &[("message_type", "CnTimeRequestType")]);
        sink.counter_inc(names::DROPPED, &[("reason", "session_unavailable")]);

        assert_eq!(sink.counter_total(names::PROXY_MESSAGE_TO_GATEWAY), 2);
        assert_eq!(
            sink.counter_with_label(
                names::PROXY_MESSAGE_TO_GATEWAY,
                ("message_type", "CnRpdoRequestType")
            ),
            1
        );
    }

    #[test]
    fn test_recording_sink_gauge_last_wins() {
        let sink = RecordingSink::new();
        sink.gauge_set(names::PDO_VALUE, &[("ID", "128")], 3.0);
        sink.gauge_set(names::PDO_VALUE, &[("ID", "128")], 10.0);
        assert_eq!(sink.last_gauge_set(names::PDO_VALUE, ("ID", "128")), Some(10.0));
        assert_eq!(sink.last_gauge_set(names::PDO_VALUE, ("ID", "129")), None);
    }

    #[test]
    fn test_noop_sink_is_silent() {
        // Only verifies the calls do not panic.
        let sink = NoopSink;
        sink.counter_inc(names::DROPPED, &[]);
        sink.gauge_set(names::PDO_VALUE, &[], 1.0);
        sink.gauge_add(names::LISTENER_CONNECTIONS, &[], -1.0);
    }
}
