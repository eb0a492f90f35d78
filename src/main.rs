//! comfo-proxy: transparent proxy for a ComfoConnect LAN C gateway.
//!
//! # Usage
//!
//! ```bash
//! # Run with default configuration
//! comfo-proxy
//!
//! # Run with custom configuration
//! comfo-proxy -c /path/to/config.json
//!
//! # Run with environment overrides
//! COMFO_PROXY_LOG_LEVEL=debug comfo-proxy
//! ```

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use tokio::sync::{broadcast, mpsc};
use tracing::{error, info, warn, Level};
use tracing_subscriber::EnvFilter;

use comfo_proxy::config::{load_config_with_env, Config};
use comfo_proxy::discovery::DiscoveryResponder;
use comfo_proxy::proxy::{router, AppListener, Router};
use comfo_proxy::session::{SessionConfig, UpstreamSession};
use comfo_proxy::telemetry::{serve_metrics, MetricsSink, PrometheusSink};

/// Command-line arguments
struct Args {
    /// Configuration file path
    config_path: PathBuf,
    /// Generate default configuration
    generate_config: bool,
    /// Check configuration only
    check_config: bool,
}

impl Args {
    fn parse() -> Self {
        let mut args = std::env::args().skip(1);
        let mut config_path = PathBuf::from("/etc/comfo-proxy/config.json");
        let mut generate_config = false;
        let mut check_config = false;

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "-c" | "--config" => {
                    if let Some(path) = args.next() {
                        config_path = PathBuf::from(path);
                    }
                }
                "-g" | "--generate-config" => {
                    generate_config = true;
                }
                "--check" => {
                    check_config = true;
                }
                "-h" | "--help" => {
                    print_help();
                    std::process::exit(0);
                }
                "-v" | "--version" => {
                    println!("comfo-proxy v{}", comfo_proxy::VERSION);
                    std::process::exit(0);
                }
                _ => {
                    eprintln!("Unknown argument: {arg}");
                    print_help();
                    std::process::exit(1);
                }
            }
        }

        Self {
            config_path,
            generate_config,
            check_config,
        }
    }
}

fn print_help() {
    println!(
        r"comfo-proxy v{}

Transparent proxy for a ComfoConnect LAN C ventilation gateway.

USAGE:
    comfo-proxy [OPTIONS]

OPTIONS:
    -c, --config <PATH>     Configuration file path [default: /etc/comfo-proxy/config.json]
    -g, --generate-config   Print a default configuration and exit
    --check                 Check configuration and exit
    -h, --help              Print help information
    -v, --version           Print version information

ENVIRONMENT:
    COMFO_PROXY_GATEWAY_IP   Override the gateway address
    COMFO_PROXY_BIND_IP      Override the announced bind address
    COMFO_PROXY_LOCAL_UUID   Override the proxy identity
    COMFO_PROXY_PIN          Override the registration PIN
    COMFO_PROXY_LOG_LEVEL    Override log level (trace, debug, info, warn, error)

The proxy listens on TCP and UDP port 56747 (configurable for tests) and
serves Prometheus metrics on the configured metrics address.
",
        comfo_proxy::VERSION
    );
}

/// Initialize logging.
///
/// Log level priority (highest to lowest):
/// 1. `RUST_LOG` environment variable
/// 2. `COMFO_PROXY_LOG_LEVEL` environment variable (applied by the loader)
/// 3. Config file `log.level` setting
fn init_logging(config: &Config) {
    let level = match config.log.level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let filter = EnvFilter::from_default_env()
        .add_directive(level.into())
        // Reduce noise from dependencies
        .add_directive("hyper=warn".parse().expect("valid directive"))
        .add_directive("tokio=warn".parse().expect("valid directive"));

    let subscriber = tracing_subscriber::fmt().with_env_filter(filter);

    if config.log.format == "json" {
        subscriber.json().init();
    } else {
        subscriber.init();
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    if args.generate_config {
        let example = Config::example();
        println!(
            "{}",
            serde_json::to_string_pretty(&example).expect("example config serializes")
        );
        return Ok(());
    }

    let config = load_config_with_env(&args.config_path)
        .with_context(|| format!("loading configuration from {:?}", args.config_path))?;

    if args.check_config {
        println!("Configuration OK: {:?}", args.config_path);
        return Ok(());
    }

    init_logging(&config);
    info!(version = comfo_proxy::VERSION, "starting comfo-proxy");

    run(config).await
}

async fn run(config: Config) -> Result<()> {
    let local_uuid = config.parsed_uuid().context("parsing local_uuid")?;
    let prometheus = Arc::new(PrometheusSink::new());
    let sink: Arc<dyn MetricsSink> = prometheus.clone();

    let (shutdown_tx, _) = broadcast::channel(1);
    let mut tasks = Vec::new();

    // Discovery responder: answers probes with the impersonation reply.
    let responder = DiscoveryResponder::bind(
        config.listen_addr(),
        &config.bind_ip.to_string(),
        local_uuid,
    )
    .await
    .context("binding discovery responder")?;
    tasks.push(tokio::spawn(responder.run(shutdown_tx.subscribe())));

    // Upstream session: the single connection to the real gateway.
    let (from_gateway_tx, from_gateway_rx) = mpsc::channel(router::FROM_GATEWAY_QUEUE);
    let (session, session_task) = UpstreamSession::start(
        SessionConfig {
            gateway_host: config.gateway_ip.clone(),
            port: config.port,
            local_uuid,
            pin: config.pin,
            device_name: config.device_name.clone(),
        },
        from_gateway_tx,
        Arc::clone(&sink),
        shutdown_tx.clone(),
    );
    tasks.push(session_task);

    // Router: fan-in from apps, fan-out from the gateway.
    let (router, router_handle) = Router::new(
        local_uuid,
        session,
        from_gateway_rx,
        Arc::clone(&sink),
    );
    tasks.push(tokio::spawn(router.run(shutdown_tx.subscribe())));

    // App listener: one handler task per inbound connection.
    let listener = AppListener::bind(config.listen_addr(), router_handle, Arc::clone(&sink))
        .await
        .context("binding app listener")?;
    tasks.push(tokio::spawn(listener.run(shutdown_tx.clone())));

    // Metrics endpoint.
    if config.metrics.enabled {
        let metrics_listener = tokio::net::TcpListener::bind(config.metrics.listen)
            .await
            .context("binding metrics listener")?;
        let metrics_shutdown = shutdown_tx.subscribe();
        tasks.push(tokio::spawn(async move {
            if let Err(e) = serve_metrics(metrics_listener, prometheus, metrics_shutdown).await {
                error!(error = %e, "metrics endpoint failed");
            }
        }));
    }

    info!("comfo-proxy running, press ctrl-c to stop");
    tokio::signal::ctrl_c()
        .await
        .context("waiting for shutdown signal")?;

    info!("shutting down");
    let _ = shutdown_tx.send(());
    for task in tasks {
        if let Err(e) = task.await {
            if !e.is_cancelled() {
                warn!(error = %e, "task ended abnormally");
            }
        }
    }
    info!("bye");

    Ok(())
}
