//! Severance Engine HTTP server.

use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use severance_engine::api::{AppState, create_router};
use severance_engine::config::ConfigLoader;

/// Serve severance calculations over HTTP.
#[derive(Debug, Parser)]
#[command(name = "severance-engine", version, about)]
struct Args {
    /// Path to the engine configuration file
    #[arg(long, default_value = "config/severance.yaml")]
    config: PathBuf,

    /// Address to listen on
    #[arg(long, default_value = "127.0.0.1:3000")]
    bind: SocketAddr,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();

    let config = ConfigLoader::load(&args.config)
        .with_context(|| format!("loading {}", args.config.display()))?;
    info!(
        config = %args.config.display(),
        policy = config.policy().as_str(),
        locale = ?config.locale(),
        "Loaded configuration"
    );

    let router = create_router(AppState::new(config));
    let listener = tokio::net::TcpListener::bind(args.bind)
        .await
        .with_context(|| format!("binding {}", args.bind))?;

    info!(addr = %args.bind, version = env!("CARGO_PKG_VERSION"), "Listening");
    axum::serve(listener, router).await?;

    Ok(())
}
