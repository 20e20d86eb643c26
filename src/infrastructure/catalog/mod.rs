//! Gift-card catalog implementations.
//!
//! Provides two [`GiftCardCatalog`](crate::domain::repositories::GiftCardCatalog)
//! implementations:
//! - [`InMemoryCatalog`] - Lock-guarded catalog, optionally seeded from a JSON file
//! - [`EmptyCatalog`] - Always-empty fallback when no catalog is configured

mod empty_catalog;
mod in_memory;

pub use empty_catalog::EmptyCatalog;
pub use in_memory::InMemoryCatalog;
