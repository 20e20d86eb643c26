//! Domain entity representing a purchasable merchant gift card.

use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

/// Gift-card configuration for a single merchant.
///
/// Records are addressed by [`GiftCardConfig::name`], compared
/// case-insensitively. The catalog hands them out as immutable snapshots, so
/// the resolver never mutates or re-sorts them.
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GiftCardConfig {
    pub name: String,
    pub display_name: Option<String>,
    pub currency: String,
    pub min_amount: Option<f64>,
    pub max_amount: Option<f64>,
    pub supported_amounts: Option<Vec<f64>>,
    pub logo_uri: Option<String>,
    pub website: Option<String>,
}

impl GiftCardConfig {
    /// Creates a config with only the required fields set.
    ///
    /// # Examples
    ///
    /// ```ignore
    /// let card = GiftCardConfig::new("Amazon", "USD");
    /// assert!(card.matches_name("amazon"));
    /// ```
    pub fn new(name: impl Into<String>, currency: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            display_name: None,
            currency: currency.into(),
            min_amount: None,
            max_amount: None,
            supported_amounts: None,
            logo_uri: None,
            website: None,
        }
    }

    /// Lower-cased merchant name used as the lookup key.
    pub fn name_key(&self) -> String {
        self.name.to_lowercase()
    }

    /// Returns true when `key` (already lower-cased) addresses this card.
    pub fn matches_name(&self, key: &str) -> bool {
        self.name_key() == key
    }

    /// Name shown to users, falling back to the merchant name.
    pub fn label(&self) -> &str {
        self.display_name.as_deref().unwrap_or(&self.name)
    }
}
