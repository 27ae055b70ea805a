use anyhow::Context;
use order_desk::app_system::{setup_tracing, StoreSystem};
use order_desk::config::AppConfig;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::load().context("loading configuration")?;

    // Setup tracing once for the entire application
    setup_tracing(&config.log_filter);

    let Some(seed) = config.administrator_seed() else {
        anyhow::bail!("no seed_administrator configured (set default_administrator: true for the development account)");
    };
    if config.seed_administrator.is_none() {
        warn!("Seeding the well-known development administrator account");
    }

    info!(mailbox_size = config.mailbox_size, "Starting order desk");
    let system = StoreSystem::new(&config);
    system.seed_administrator(&seed).await?;

    let address = config.http.bind_address();
    let listener = tokio::net::TcpListener::bind(&address)
        .await
        .with_context(|| format!("binding {address}"))?;
    info!(%address, "HTTP server listening");

    order_desk::http::serve(system.services.clone(), listener, shutdown_signal()).await?;

    // Shutdown system gracefully
    system.shutdown().await?;

    info!("Application completed successfully");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "Could not listen for ctrl-c");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
