//! API route configuration.

use crate::api::handlers::{
    catalog_handler, replace_catalog_handler, resolve_handler, resolve_offer_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// All API routes.
///
/// # Endpoints
///
/// - `POST /resolve`         - Resolve a link against the catalog
/// - `POST /offers/resolve`  - Resolve the link of a pressed offer card
/// - `GET  /catalog`         - Current gift-card catalog
/// - `PUT  /catalog`         - Replace the gift-card catalog
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/resolve", post(resolve_handler))
        .route("/offers/resolve", post(resolve_offer_handler))
        .route(
            "/catalog",
            get(catalog_handler).put(replace_catalog_handler),
        )
}
