//! Handlers for link resolution.

use axum::{Json, extract::State};
use tracing::{debug, warn};
use validator::Validate;

use crate::api::dto::resolve::{OfferResolveResponse, ResolveOfferRequest, ResolveRequest};
use crate::domain::entities::{GiftCardConfig, InboundLink, OfferCardView, Resolution};
use crate::domain::ports::{DiagnosticsSink, TracingDiagnostics};
use crate::error::AppError;
use crate::state::AppState;

/// Resolves a link against the current gift-card catalog.
///
/// # Endpoint
///
/// `POST /api/resolve`
///
/// # Request Body
///
/// ```json
/// {
///   "url": "app://open/giftcard?merchant=Amazon",
///   "open_in_web_view": false
/// }
/// ```
///
/// # Response
///
/// ```json
/// {
///   "outcome": {
///     "action": "navigate_to_domain",
///     "record": { "name": "Amazon", "currency": "USD" },
///     "screen": "BuyGiftCard"
///   }
/// }
/// ```
///
/// Malformed links still return 200 with an `open_external` outcome and a
/// `diagnostic` object.
///
/// # Errors
///
/// Returns 400 Bad Request if validation fails.
pub async fn resolve_handler(
    State(state): State<AppState>,
    Json(payload): Json<ResolveRequest>,
) -> Result<Json<Resolution>, AppError> {
    payload.validate()?;

    let link = InboundLink::from(payload);
    Ok(Json(resolve_link(&state, &link).await))
}

/// Resolves the link carried by a pressed offer card.
///
/// # Endpoint
///
/// `POST /api/offers/resolve`
///
/// The body is a content card; the response carries the card's presentation
/// data next to the resolution. Cards without a URL resolve to `no_action`.
///
/// # Errors
///
/// Returns 400 Bad Request if the card's URL is too long.
pub async fn resolve_offer_handler(
    State(state): State<AppState>,
    Json(payload): Json<ResolveOfferRequest>,
) -> Result<Json<OfferResolveResponse>, AppError> {
    payload.validate()?;

    let card = payload.card;
    let resolution = resolve_link(&state, &card.inbound_link()).await;

    Ok(Json(OfferResolveResponse {
        card: OfferCardView::from_card(&card),
        resolution,
    }))
}

/// Resolves against a catalog snapshot and logs any parse diagnostic.
///
/// A failing catalog degrades to an empty candidate set.
async fn resolve_link(state: &AppState, link: &InboundLink) -> Resolution {
    let resolution = match state.catalog.snapshot().await {
        Ok(snapshot) => state.resolver.resolve(link, &snapshot.cards),
        Err(e) => {
            warn!("Catalog unavailable, resolving without gift cards: {}", e);
            let no_cards: &[GiftCardConfig] = &[];
            state.resolver.resolve(link, no_cards)
        }
    };

    if let Some(diagnostic) = &resolution.diagnostic {
        TracingDiagnostics.debug(&diagnostic.log_line());
    }
    debug!("Resolved offer link as {}", resolution.outcome.kind());

    resolution
}
