//! Word-of-the-day HTTP server.

use std::sync::Arc;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use mot_du_jour::cache::SystemClock;
use mot_du_jour::config::ServerConfig;
use mot_du_jour::service::{self, AppState, SharedClock};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = ServerConfig::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.log_level)),
        )
        .init();

    let source = config.page_source()?;
    let clock: SharedClock = Arc::new(SystemClock);
    let cache = config.tier_cache(clock)?;

    tracing::info!(source = %source.url(), language = %config.language, "configured word source");

    let state = Arc::new(AppState::new(Arc::new(source), cache, config.options()));
    let app = service::routes(state);

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on http://{}", addr);
    axum::serve(listener, app).await?;

    Ok(())
}
