//! Handlers for the gift-card catalog.

use axum::{Json, extract::State};
use validator::Validate;

use crate::api::dto::catalog::{CatalogResponse, ReplaceCatalogRequest};
use crate::domain::entities::GiftCardConfig;
use crate::error::AppError;
use crate::state::AppState;

/// Returns the current catalog snapshot.
///
/// # Endpoint
///
/// `GET /api/catalog`
///
/// # Errors
///
/// Returns 500 Internal Server Error if the catalog cannot be read.
pub async fn catalog_handler(
    State(state): State<AppState>,
) -> Result<Json<CatalogResponse>, AppError> {
    let snapshot = state.catalog.snapshot().await?;
    Ok(Json(snapshot.into()))
}

/// Replaces the whole catalog.
///
/// # Endpoint
///
/// `PUT /api/catalog`
///
/// Resolutions already in flight keep the snapshot they started with.
///
/// # Errors
///
/// Returns 400 Bad Request if validation fails, names collide
/// case-insensitively, or the catalog is read-only.
pub async fn replace_catalog_handler(
    State(state): State<AppState>,
    Json(payload): Json<ReplaceCatalogRequest>,
) -> Result<Json<CatalogResponse>, AppError> {
    payload.validate()?;

    let cards: Vec<GiftCardConfig> = payload.cards.into_iter().map(Into::into).collect();
    let snapshot = state.catalog.replace(cards).await?;

    Ok(Json(snapshot.into()))
}
