use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use hostinfo_server::{api, collectors::SysinfoSource, config};
use tracing::info;

/// hostinfo — reports host CPU, memory, disk and uptime as JSON.
#[derive(Parser, Debug)]
#[command(name = "hostinfo-server", version, about)]
struct Cli {
    /// Address and port to listen on.
    #[arg(short, long, default_value = "0.0.0.0:8080")]
    listen: String,

    /// Path to a TOML configuration file (optional).
    #[arg(short, long)]
    config: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "hostinfo_server=info".into()),
        )
        .init();

    let cli = Cli::parse();

    info!(
        version = env!("CARGO_PKG_VERSION"),
        "Starting hostinfo server"
    );

    let app_config = if let Some(ref path) = cli.config {
        config::AppConfig::from_file(path)?
    } else {
        config::AppConfig::default()
    };
    info!(disk_mount = %app_config.disk_mount.display(), "Configuration loaded");

    let state = api::AppState::new(Arc::new(SysinfoSource), app_config);
    let app = api::router(state);

    let listener = tokio::net::TcpListener::bind(&cli.listen).await?;
    info!(addr = %cli.listen, path = api::INFO_PATH, "Listening");

    axum::serve(listener, app).await?;

    Ok(())
}
