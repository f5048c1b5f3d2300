//! wlpurge Server
//!
//! HTTP boundary for the worklist purge service: receives stored-record
//! events and exposes the enable/disable/status administration endpoints.

#![warn(missing_docs)]

pub mod config;
pub mod handlers;

use config::ServerConfig;
use handlers::{create_router, AppState};
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;
use wlpurge_engine::{PurgeEngine, PurgeGate};
use wlpurge_worklist::PassthroughDecoder;

/// Server error
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// Server binding error
    #[error("Failed to bind server: {0}")]
    Bind(#[from] std::io::Error),

    /// Server error
    #[error("Server error: {0}")]
    Server(String),
}

/// Start the purge HTTP server
///
/// Builds the gate and engine from the configuration and starts the
/// axum server.
pub async fn start_server(config: ServerConfig) -> Result<(), ServerError> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    info!("Starting wlpurge server");
    info!("Bind address: {}", config.bind_addr());
    info!(
        "Worklist purger initially {}",
        if config.purger.enabled {
            "enabled"
        } else {
            "disabled"
        }
    );
    if let Some(dir) = &config.purger.worklist_dir {
        info!("Watching worklist directory: {}", dir.display());
    }

    let gate = PurgeGate::new(config.purger.enabled);
    let engine = PurgeEngine::new(config.purge_config(), gate, PassthroughDecoder::new());

    let state = AppState {
        engine: Arc::new(engine),
    };

    let app = create_router(state);

    // Bind and serve
    let listener = TcpListener::bind(&config.bind_addr()).await?;
    info!("wlpurge server listening on {}", config.bind_addr());

    axum::serve(listener, app)
        .await
        .map_err(|e| ServerError::Server(e.to_string()))?;

    Ok(())
}
