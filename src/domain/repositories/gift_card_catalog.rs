//! Repository trait for the gift-card candidate source.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::domain::entities::GiftCardConfig;

/// Errors raised while loading or replacing the catalog.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("Failed to read catalog file '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse catalog: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid catalog: {0}")]
    Invalid(String),
}

/// Immutable view of the catalog at one point in time.
///
/// Cloning is cheap; a later refresh never mutates a snapshot already handed
/// out.
#[derive(Debug, Clone)]
pub struct CatalogSnapshot {
    pub cards: Arc<[GiftCardConfig]>,
    pub refreshed_at: DateTime<Utc>,
}

impl CatalogSnapshot {
    pub fn new(cards: Vec<GiftCardConfig>) -> Self {
        Self {
            cards: cards.into(),
            refreshed_at: Utc::now(),
        }
    }

    pub fn empty() -> Self {
        Self::new(Vec::new())
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

/// Read-mostly source of gift cards available for lookup.
///
/// # Implementations
///
/// - [`crate::infrastructure::catalog::InMemoryCatalog`] - Lock-guarded in-memory catalog
/// - [`crate::infrastructure::catalog::EmptyCatalog`] - Always-empty fallback
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait GiftCardCatalog: Send + Sync {
    /// Returns the current snapshot of available gift cards.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError`] if the backing store cannot be read.
    async fn snapshot(&self) -> Result<CatalogSnapshot, CatalogError>;

    /// Replaces the whole catalog and returns the new snapshot.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Invalid`] if the catalog is read-only or the
    /// cards violate catalog rules.
    async fn replace(&self, cards: Vec<GiftCardConfig>) -> Result<CatalogSnapshot, CatalogError>;

    /// Reports whether the catalog can serve snapshots.
    async fn health_check(&self) -> bool;
}
