//! DTOs for link resolution endpoints.

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::domain::entities::{ContentCard, InboundLink, OfferCardView, Resolution};

/// Longest link accepted by the resolve endpoints.
pub const MAX_URL_LENGTH: u64 = 8192;

/// Request to resolve a single link.
///
/// An empty or missing `url` is valid and resolves to `no_action`.
#[derive(Debug, Deserialize, Validate)]
pub struct ResolveRequest {
    #[serde(default)]
    #[validate(length(max = MAX_URL_LENGTH))]
    pub url: String,

    /// Open external URLs in the embedded browser.
    #[serde(default)]
    pub open_in_web_view: bool,
}

impl From<ResolveRequest> for InboundLink {
    fn from(request: ResolveRequest) -> Self {
        InboundLink::new(request.url, request.open_in_web_view)
    }
}

/// A pressed offer card, sent as the card itself.
#[derive(Debug, Deserialize, Validate)]
pub struct ResolveOfferRequest {
    #[serde(flatten)]
    #[validate(custom(function = "validate_card_url"))]
    pub card: ContentCard,
}

fn validate_card_url(card: &ContentCard) -> Result<(), ValidationError> {
    match &card.url {
        Some(url) if url.len() as u64 > MAX_URL_LENGTH => {
            Err(ValidationError::new("length").with_message("url is too long".into()))
        }
        _ => Ok(()),
    }
}

/// Resolution of a pressed offer card.
#[derive(Debug, Serialize)]
pub struct OfferResolveResponse {
    pub card: OfferCardView,
    #[serde(flatten)]
    pub resolution: Resolution,
}
