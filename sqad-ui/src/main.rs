//! sqad-ui - Sound Quality Assessment Dashboard
//!
//! Browser dashboard for comparing AI audio model runs across versions
//! and result sets, backed by an external evaluation service.

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use tracing::info;

use sqad_common::config::{self, ConfigOverrides};
use sqad_ui::backend::BackendClient;
use sqad_ui::{build_router, AppState};

/// Command-line overrides; everything falls back to ENV, then the TOML
/// config file, then compiled defaults.
#[derive(Debug, Parser)]
#[command(name = "sqad-ui", about = "Sound Quality Assessment Dashboard")]
struct Cli {
    /// Listen address, e.g. 127.0.0.1:5740
    #[arg(long)]
    listen: Option<String>,

    /// Base URL of the evaluation backend
    #[arg(long)]
    backend_url: Option<String>,

    /// Bearer token for privileged backend operations
    #[arg(long)]
    admin_token: Option<String>,

    /// Per-request timeout in seconds
    #[arg(long)]
    timeout_secs: Option<u64>,

    /// Explicit config file path (skips platform discovery)
    #[arg(long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing subscriber before anything else
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    // Log build identification immediately after tracing init
    info!(
        "Starting SQAD Dashboard (sqad-ui) v{} [{}] built {} ({})",
        env!("CARGO_PKG_VERSION"),
        env!("GIT_HASH"),
        env!("BUILD_TIMESTAMP"),
        env!("BUILD_PROFILE")
    );

    let cli = Cli::parse();
    let config = config::resolve(ConfigOverrides {
        listen: cli.listen,
        backend_url: cli.backend_url,
        admin_token: cli.admin_token,
        timeout_secs: cli.timeout_secs,
        config_file: cli.config,
    })?;

    info!("Evaluation backend: {}", config.backend_url);
    if config.admin_token.is_none() {
        info!("No admin token configured; project deletion disabled");
    }

    let backend = BackendClient::new(&config)?;
    let listen_addr = config.listen_addr;

    let state = AppState::new(backend, config);
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(listen_addr).await?;
    info!("sqad-ui listening on http://{}", listen_addr);
    info!("Health check: http://{}/health", listen_addr);

    axum::serve(listener, app).await?;

    Ok(())
}
