//! Nucleyes Identity Server
//!
//! Run with: cargo run --bin nucleyes-server
//!
//! # Configuration
//!
//! Read from `--config`, or the first of
//! `~/.config/nucleyes/config.toml`, `/etc/nucleyes/config.toml`,
//! `./config.toml`. Environment variables override file values:
//! - `NUCLEYES_API_HOST`, `NUCLEYES_API_PORT`
//! - `NUCLEYES_AUTH_ENABLED`: require a session (default: false)
//! - `NUCLEYES_LOG_LEVEL`, `NUCLEYES_LOG_FORMAT` (pretty or json)
//! - `RUST_LOG`: takes precedence over the configured level

use anyhow::Context;
use clap::Parser;
use nucleyes::api::{serve, AppState};
use nucleyes::config::{generate_default_config, Config, LoggingConfig};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "nucleyes-server")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Identity API for the Nucleyes dashboard")]
struct Cli {
    /// Path to a TOML config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Host to bind to (overrides config)
    #[arg(long)]
    host: Option<String>,

    /// Port to listen on (overrides config)
    #[arg(short, long)]
    port: Option<u16>,

    /// Print a default config file and exit
    #[arg(long)]
    print_config: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.print_config {
        print!("{}", generate_default_config());
        return Ok(());
    }

    let mut config = match &cli.config {
        Some(path) => Config::load_with_env(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => Config::load_default(),
    };

    if let Some(host) = cli.host {
        config.api.host = host;
    }
    if let Some(port) = cli.port {
        config.api.port = port;
    }

    init_tracing(&config.logging);

    tracing::info!("Starting Nucleyes identity server v{}", env!("CARGO_PKG_VERSION"));

    let policy = config
        .identity
        .guest_policy()
        .context("building guest policy")?;

    if config.identity.auth_enabled {
        tracing::info!("Authentication enabled: requests without a session get 401");
    } else {
        tracing::warn!(
            username = %config.identity.guest.username,
            "Authentication disabled: requests without a session see the guest profile"
        );
    }

    let state = AppState::new(policy, config.api.clone());
    serve(state, &config.api).await?;

    tracing::info!("Nucleyes identity server stopped");
    Ok(())
}

fn init_tracing(logging: &LoggingConfig) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| format!("nucleyes={},tower_http=debug", logging.level).into());

    let registry = tracing_subscriber::registry().with(filter);

    if logging.is_json() {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}
