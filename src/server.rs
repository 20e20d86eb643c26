//! HTTP server initialization and runtime setup.
//!
//! Handles catalog loading, resolver construction and Axum server lifecycle.

use crate::application::services::LinkResolver;
use crate::config::Config;
use crate::domain::repositories::GiftCardCatalog;
use crate::infrastructure::catalog::{EmptyCatalog, InMemoryCatalog};
use crate::infrastructure::routing::PatternRouteTable;
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::Result;
use axum::ServiceExt;
use axum::extract::Request;
use std::net::SocketAddr;
use std::sync::Arc;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - Gift-card catalog (or an empty catalog fallback)
/// - Route table and link resolver
/// - Axum HTTP server
///
/// # Errors
///
/// Returns an error if:
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let state = build_state(&config).await;

    let app = app_router(state);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(
        listener,
        ServiceExt::<Request>::into_make_service(app),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    Ok(())
}

/// Builds the shared state from configuration.
pub async fn build_state(config: &Config) -> AppState {
    let catalog = load_catalog(config.catalog_path.as_deref()).await;

    let route_table = Arc::new(PatternRouteTable::default());
    let resolver = Arc::new(LinkResolver::new(
        config.deeplink_prefix.clone(),
        route_table,
    ));

    AppState::new(resolver, catalog)
}

/// Loads the catalog file.
///
/// Without a file the catalog starts empty but can be replaced over the API.
/// An unreadable file degrades to the read-only [`EmptyCatalog`] so startup
/// never fails on catalog problems.
pub async fn load_catalog(path: Option<&str>) -> Arc<dyn GiftCardCatalog> {
    let Some(path) = path else {
        tracing::info!("No gift-card catalog configured, starting empty");
        return Arc::new(InMemoryCatalog::empty());
    };

    match InMemoryCatalog::from_json_file(path).await {
        Ok(catalog) => {
            tracing::info!("Gift-card catalog loaded from {}", path);
            Arc::new(catalog)
        }
        Err(e) => {
            tracing::warn!("Failed to load gift-card catalog: {}. Using EmptyCatalog.", e);
            Arc::new(EmptyCatalog::new())
        }
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
    }
    tracing::info!("Shutting down");
}
