//! Dashboard HTTP Server Binary
//!
//! This is the main entry point for the dashboard REST API server. It loads
//! the dataset into the record store, sets up the HTTP router, and starts
//! serving requests.
//!
//! # Usage
//!
//! ```bash
//! BIKE_DATA_PATH=data/bike_all_data.csv cargo run --bin dashboard-server
//! ```
//!
//! # Environment Variables
//!
//! - `BIKE_DATA_PATH`: Dataset CSV path (default: data/bike_all_data.csv)
//! - `HOST`: Server host (default: 0.0.0.0)
//! - `PORT`: Server port (default: 8080)
//! - `RUST_LOG`: Log level (default: info)

use std::env;
use std::net::SocketAddr;
use std::sync::Arc;

use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use bikeshare_dashboard::config::ServerConfig;
use bikeshare_dashboard::http::{create_router, AppState};
use bikeshare_dashboard::store::RecordStore;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    FmtSubscriber::builder()
        .with_max_level(
            env::var("RUST_LOG")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(Level::INFO),
        )
        .with_target(true)
        .init();

    info!("Starting dashboard HTTP server");

    let config = ServerConfig::from_env().map_err(|e| anyhow::anyhow!(e))?;

    // Load the dataset once; the store is read-only for the session
    let store = Arc::new(RecordStore::from_csv_path(&config.data_path)?);
    info!(
        "Loaded {} records spanning {} from {}",
        store.len(),
        store.bounds(),
        config.data_path
    );

    // Create application state
    let state = AppState::new(store);

    // Create router with all endpoints
    let app = create_router(state);

    let addr: SocketAddr = format!("{}:{}", config.host, config.port).parse()?;
    info!("Server listening on http://{}", addr);

    // Start the server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
