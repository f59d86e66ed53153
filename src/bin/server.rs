//! Arlo Board API server.
//!
//! Reads configuration from the environment, wires the production
//! adapters, and serves the `/api/*` surface until terminated. Set
//! `RUST_LOG` to adjust log verbosity (defaults to `info`).

use arlo_board::config::AppConfig;
use arlo_board::http::{AppState, router};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = AppConfig::from_env()?;
    let state = AppState::from_config(&config);
    let app = router(state);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    tracing::info!(addr = %config.bind_addr, "serving the board API");
    axum::serve(listener, app).await?;
    Ok(())
}
