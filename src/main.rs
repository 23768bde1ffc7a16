use std::sync::Arc;

use book_recs_api::{
    config::Config,
    routes::{create_router, AppState},
    services::{CatalogLinks, OpenLibraryClient, Recommender},
};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("book_recs_api=info,tower_http=debug")),
        )
        .init();

    let config = Config::from_env()?;

    let catalog = OpenLibraryClient::new(&config)?;
    let links = CatalogLinks::new(&config.catalog_url, &config.covers_url);
    let state = Arc::new(AppState::new(Recommender::new(Arc::new(catalog), links)));

    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(config.bind_addr()).await?;
    tracing::info!(
        addr = %listener.local_addr()?,
        catalog = %config.catalog_url,
        "Server running"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
    }
    tracing::info!("Shutdown signal received");
}
