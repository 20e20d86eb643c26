//! In-memory gift-card catalog.

use std::collections::HashSet;
use std::path::Path;

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::info;

use crate::domain::entities::GiftCardConfig;
use crate::domain::repositories::{CatalogError, CatalogSnapshot, GiftCardCatalog};

/// Catalog held in memory behind a read-write lock.
///
/// Readers clone the current [`CatalogSnapshot`]; [`GiftCardCatalog::replace`]
/// swaps in a new snapshot without touching the ones already handed out.
pub struct InMemoryCatalog {
    current: RwLock<CatalogSnapshot>,
}

impl InMemoryCatalog {
    /// Creates a catalog seeded with `cards`.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Invalid`] if names are blank or collide
    /// case-insensitively.
    pub fn new(cards: Vec<GiftCardConfig>) -> Result<Self, CatalogError> {
        validate_cards(&cards)?;
        Ok(Self {
            current: RwLock::new(CatalogSnapshot::new(cards)),
        })
    }

    /// Creates a catalog with no gift cards.
    pub fn empty() -> Self {
        Self {
            current: RwLock::new(CatalogSnapshot::empty()),
        }
    }

    /// Loads the catalog from a JSON array of gift-card configs.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Io`] if the file cannot be read,
    /// [`CatalogError::Parse`] for malformed JSON and
    /// [`CatalogError::Invalid`] if the cards break catalog rules.
    pub async fn from_json_file(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let raw = tokio::fs::read_to_string(path)
            .await
            .map_err(|source| CatalogError::Io {
                path: path.display().to_string(),
                source,
            })?;

        let cards: Vec<GiftCardConfig> = serde_json::from_str(&raw)?;
        let catalog = Self::new(cards)?;

        info!(
            "Loaded {} gift cards from {}",
            catalog.current.read().await.len(),
            path.display()
        );

        Ok(catalog)
    }
}

#[async_trait]
impl GiftCardCatalog for InMemoryCatalog {
    async fn snapshot(&self) -> Result<CatalogSnapshot, CatalogError> {
        Ok(self.current.read().await.clone())
    }

    async fn replace(&self, cards: Vec<GiftCardConfig>) -> Result<CatalogSnapshot, CatalogError> {
        validate_cards(&cards)?;

        let snapshot = CatalogSnapshot::new(cards);
        *self.current.write().await = snapshot.clone();

        info!("Gift-card catalog replaced ({} cards)", snapshot.len());
        Ok(snapshot)
    }

    async fn health_check(&self) -> bool {
        true
    }
}

/// Enforces non-blank names, unique case-insensitively.
fn validate_cards(cards: &[GiftCardConfig]) -> Result<(), CatalogError> {
    let mut seen = HashSet::with_capacity(cards.len());

    for card in cards {
        if card.name.trim().is_empty() {
            return Err(CatalogError::Invalid(
                "gift card name must not be blank".to_string(),
            ));
        }
        if !seen.insert(card.name_key()) {
            return Err(CatalogError::Invalid(format!(
                "duplicate gift card name '{}'",
                card.name
            )));
        }
    }

    Ok(())
}
