//! DTOs for gift-card catalog endpoints.

use chrono::{DateTime, Utc};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use validator::{Validate, ValidationError};

use crate::domain::entities::GiftCardConfig;
use crate::domain::repositories::CatalogSnapshot;

/// ISO 4217 style currency code.
static CURRENCY_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[A-Z]{3}$").unwrap());

/// Current catalog contents.
#[derive(Debug, Serialize)]
pub struct CatalogResponse {
    pub refreshed_at: DateTime<Utc>,
    pub count: usize,
    pub cards: Vec<GiftCardConfig>,
}

impl From<CatalogSnapshot> for CatalogResponse {
    fn from(snapshot: CatalogSnapshot) -> Self {
        Self {
            refreshed_at: snapshot.refreshed_at,
            count: snapshot.len(),
            cards: snapshot.cards.to_vec(),
        }
    }
}

/// Request replacing the whole catalog.
#[derive(Debug, Deserialize, Validate)]
pub struct ReplaceCatalogRequest {
    #[validate(nested)]
    pub cards: Vec<GiftCardItem>,
}

/// A gift card as submitted by the host.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
#[validate(schema(function = "validate_amount_range"))]
pub struct GiftCardItem {
    #[validate(length(min = 1, max = 100))]
    pub name: String,

    #[validate(length(max = 100))]
    pub display_name: Option<String>,

    #[validate(regex(path = "*CURRENCY_REGEX", message = "Currency must be a 3-letter code"))]
    pub currency: String,

    #[validate(range(min = 0.0))]
    pub min_amount: Option<f64>,

    #[validate(range(min = 0.0))]
    pub max_amount: Option<f64>,

    pub supported_amounts: Option<Vec<f64>>,

    #[validate(url)]
    pub logo_uri: Option<String>,

    #[validate(url)]
    pub website: Option<String>,
}

fn validate_amount_range(item: &GiftCardItem) -> Result<(), ValidationError> {
    if let (Some(min), Some(max)) = (item.min_amount, item.max_amount)
        && min > max
    {
        return Err(ValidationError::new("min_amount_exceeds_max_amount"));
    }
    Ok(())
}

impl From<GiftCardItem> for GiftCardConfig {
    fn from(item: GiftCardItem) -> Self {
        Self {
            name: item.name,
            display_name: item.display_name,
            currency: item.currency,
            min_amount: item.min_amount,
            max_amount: item.max_amount,
            supported_amounts: item.supported_amounts,
            logo_uri: item.logo_uri,
            website: item.website,
        }
    }
}
