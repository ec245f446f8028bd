use anyhow::Context;
use pressroom_admin::{app, Config, Shell};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    info!("pressroom-admin starting...");

    let config = Config::load_default()
        .unwrap_or_else(|e| {
            warn!("Failed to load config: {:#}, using defaults", e);
            Config::default()
        })
        .with_env_overrides()?;

    let shell = Shell::from_config(&config).context("Failed to build the route table")?;
    info!(
        port = config.server.port,
        base = %config.routing.base_path,
        configured = shell.is_configured(),
        "shell ready"
    );

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    info!("Server running at http://{}", addr);

    axum::serve(listener, app(shell))
        .await
        .context("Server error")?;

    Ok(())
}
