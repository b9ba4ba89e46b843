// Personal Finance Tracker - Web Server

use anyhow::{Context, Result};
use clap::Parser;
use log::{error, info};
use std::sync::Arc;

use finance_tracker::{router, AppState, Config, SheetConnector};

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = Config::parse();
    info!("Personal Finance Tracker v{}", finance_tracker::VERSION);
    info!(
        "Spreadsheet '{}' via credentials {}",
        config.spreadsheet,
        config.credentials.display()
    );

    let connector: Arc<dyn SheetConnector> = Arc::new(config.connector());

    if config.check_connection {
        let probe = Arc::clone(&connector);
        let outcome = tokio::task::spawn_blocking(move || probe.open().map(|sheet| sheet.title().to_string()))
            .await
            .context("Connection check did not complete")?;

        match outcome {
            Ok(title) => info!("Connection check passed (worksheet '{}')", title),
            Err(e) => error!("Connection check failed: {}", e),
        }
    }

    let state = AppState::new(connector, config.dashboard_url.clone());
    let app = router(state);

    let listener = tokio::net::TcpListener::bind(config.bind)
        .await
        .with_context(|| format!("Failed to bind to {}", config.bind))?;

    info!("Server running on http://{}", config.bind);
    info!("API: http://{}/api/health", config.bind);

    axum::serve(listener, app)
        .await
        .context("Server stopped unexpectedly")?;

    Ok(())
}
