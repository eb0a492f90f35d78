//! Configuration loading and environment overrides.

use std::path::Path;

use tracing::{debug, info};

use crate::error::ConfigError;

use super::types::Config;

/// Load configuration from a JSON file.
///
/// # Errors
///
/// Returns `ConfigError` if the file cannot be read, parsed or validated.
pub fn load_config(path: impl AsRef<Path>) -> Result<Config, ConfigError> {
    let path = path.as_ref();

    debug!("loading configuration from {:?}", path);

    if !path.exists() {
        return Err(ConfigError::FileNotFound {
            path: path.display().to_string(),
        });
    }

    let contents = std::fs::read_to_string(path)?;
    let config: Config = serde_json::from_str(&contents)
        .map_err(|e| ConfigError::ParseError(format!("failed to parse JSON: {e} at {path:?}")))?;

    config.validate()?;

    info!(
        gateway = %config.gateway_ip,
        bind = %config.bind_ip,
        port = config.port,
        "configuration loaded"
    );

    Ok(config)
}

/// Load configuration from a JSON string.
///
/// # Errors
///
/// Returns `ConfigError` if parsing or validation fails.
pub fn load_config_str(json: &str) -> Result<Config, ConfigError> {
    let config: Config =
        serde_json::from_str(json).map_err(|e| ConfigError::ParseError(e.to_string()))?;
    config.validate()?;
    Ok(config)
}

/// Load configuration with environment variable overrides.
///
/// Environment variables:
/// - `COMFO_PROXY_GATEWAY_IP`: override the gateway address
/// - `COMFO_PROXY_BIND_IP`: override the announced bind address
/// - `COMFO_PROXY_LOCAL_UUID`: override the proxy identity
/// - `COMFO_PROXY_PIN`: override the registration PIN
/// - `COMFO_PROXY_LOG_LEVEL`: override the log level
///
/// # Errors
///
/// Returns `ConfigError` if loading, parsing or re-validation fails.
pub fn load_config_with_env(path: impl AsRef<Path>) -> Result<Config, ConfigError> {
    let mut config = load_config(path)?;

    if let Ok(gateway_ip) = std::env::var("COMFO_PROXY_GATEWAY_IP") {
        debug!("gateway_ip overridden to {gateway_ip}");
        config.gateway_ip = gateway_ip;
    }

    if let Ok(bind_ip) = std::env::var("COMFO_PROXY_BIND_IP") {
        config.bind_ip = bind_ip.parse().map_err(|_| ConfigError::EnvError {
            name: "COMFO_PROXY_BIND_IP".into(),
            reason: format!("invalid IPv4 address: {bind_ip}"),
        })?;
        debug!("bind_ip overridden to {}", config.bind_ip);
    }

    if let Ok(local_uuid) = std::env::var("COMFO_PROXY_LOCAL_UUID") {
        debug!("local_uuid overridden");
        config.local_uuid = local_uuid;
    }

    if let Ok(pin) = std::env::var("COMFO_PROXY_PIN") {
        config.pin = pin.parse().map_err(|_| ConfigError::EnvError {
            name: "COMFO_PROXY_PIN".into(),
            reason: format!("invalid number: {pin}"),
        })?;
    }

    if let Ok(level) = std::env::var("COMFO_PROXY_LOG_LEVEL") {
        debug!("log level overridden to {level}");
        config.log.level = level;
    }

    config.validate()?;

    Ok(config)
}
