//! Configuration types for the proxy.
//!
//! Configuration is loaded from a JSON file, validated at startup, and can
//! be overridden through `COMFO_PROXY_*` environment variables.

use std::net::{Ipv4Addr, SocketAddr};

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::protocol::Uuid;

fn default_device_name() -> String {
    "Proxy".to_string()
}

const fn default_port() -> u16 {
    56747
}

fn default_metrics_listen() -> SocketAddr {
    "0.0.0.0:8090".parse().expect("valid literal")
}

const fn default_metrics_enabled() -> bool {
    true
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "text".to_string()
}

/// Root configuration structure.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    /// IPv4 address of the real gateway.
    pub gateway_ip: String,

    /// IPv4 address returned in the impersonated discovery reply. Must be
    /// an address of this host that apps can reach.
    pub bind_ip: Ipv4Addr,

    /// The proxy's identity toward gateway and apps: either a full 16-byte
    /// identifier (32 hex digits) or a 6-byte MAC-like suffix appended to
    /// the fixed vendor prefix.
    pub local_uuid: String,

    /// PIN used when registering with the gateway.
    #[serde(default)]
    pub pin: u32,

    /// Device name announced to the gateway.
    #[serde(default = "default_device_name")]
    pub device_name: String,

    /// Protocol port for TCP and UDP. The gateway protocol fixes this to
    /// 56747; overriding it is meant for tests.
    #[serde(default = "default_port")]
    pub port: u16,

    /// Metrics endpoint configuration.
    #[serde(default)]
    pub metrics: MetricsConfig,

    /// Logging configuration.
    #[serde(default)]
    pub log: LogConfig,
}

impl Config {
    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ValidationError` when a field is malformed.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.gateway_ip.parse::<Ipv4Addr>().is_err() {
            return Err(ConfigError::ValidationError(format!(
                "gateway_ip is not an IPv4 address: {}",
                self.gateway_ip
            )));
        }
        self.parsed_uuid()?;
        if self.device_name.is_empty() {
            return Err(ConfigError::ValidationError(
                "device_name must not be empty".into(),
            ));
        }
        self.log.validate()?;
        Ok(())
    }

    /// The proxy's parsed identity.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ValidationError` when `local_uuid` is neither
    /// a full identifier nor a MAC-like suffix.
    pub fn parsed_uuid(&self) -> Result<Uuid, ConfigError> {
        self.local_uuid
            .parse()
            .map_err(|e| ConfigError::ValidationError(format!("local_uuid: {e}")))
    }

    /// Socket address for the TCP listener and UDP responder.
    #[must_use]
    pub fn listen_addr(&self) -> SocketAddr {
        SocketAddr::from((Ipv4Addr::UNSPECIFIED, self.port))
    }

    /// A configuration skeleton for `--generate-config`.
    #[must_use]
    pub fn example() -> Self {
        Self {
            gateway_ip: "192.168.1.2".into(),
            bind_ip: Ipv4Addr::new(192, 168, 1, 3),
            local_uuid: "b8:27:eb:f9:f9:12".into(),
            pin: 0,
            device_name: default_device_name(),
            port: default_port(),
            metrics: MetricsConfig::default(),
            log: LogConfig::default(),
        }
    }
}

/// Metrics endpoint configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct MetricsConfig {
    /// Whether to serve the Prometheus endpoint.
    #[serde(default = "default_metrics_enabled")]
    pub enabled: bool,

    /// Listen address of the `/metrics` endpoint.
    #[serde(default = "default_metrics_listen")]
    pub listen: SocketAddr,
}

impl Default for MetricsConfig {
    fn default() -> Self {
        Self {
            enabled: default_metrics_enabled(),
            listen: default_metrics_listen(),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LogConfig {
    /// Log level: trace, debug, info, warn, error.
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Output format: "text" or "json".
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl LogConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        match self.format.as_str() {
            "text" | "json" => Ok(()),
            other => Err(ConfigError::ValidationError(format!(
                "log.format must be 'text' or 'json', got '{other}'"
            ))),
        }
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}
