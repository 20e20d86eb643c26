//! Always-empty catalog used when no gift cards are configured.

use async_trait::async_trait;
use tracing::debug;

use crate::domain::entities::GiftCardConfig;
use crate::domain::repositories::{CatalogError, CatalogSnapshot, GiftCardCatalog};

/// A catalog that never holds any gift cards.
///
/// Every gift-card link resolves to the shop listing. Used when no catalog
/// file is configured or loading it failed at startup.
pub struct EmptyCatalog;

impl EmptyCatalog {
    pub fn new() -> Self {
        debug!("Using EmptyCatalog (no gift cards configured)");
        Self
    }
}

impl Default for EmptyCatalog {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl GiftCardCatalog for EmptyCatalog {
    async fn snapshot(&self) -> Result<CatalogSnapshot, CatalogError> {
        Ok(CatalogSnapshot::empty())
    }

    async fn replace(&self, _cards: Vec<GiftCardConfig>) -> Result<CatalogSnapshot, CatalogError> {
        Err(CatalogError::Invalid(
            "catalog is read-only (no catalog configured)".to_string(),
        ))
    }

    async fn health_check(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_empty_catalog_snapshot() {
        let catalog = EmptyCatalog::new();
        assert!(catalog.snapshot().await.unwrap().is_empty());
        assert!(catalog.health_check().await);
    }

    #[tokio::test]
    async fn test_empty_catalog_rejects_replace() {
        let catalog = EmptyCatalog::new();

        let result = catalog
            .replace(vec![GiftCardConfig::new("Amazon", "USD")])
            .await;

        assert!(matches!(result, Err(CatalogError::Invalid(_))));
    }
}
