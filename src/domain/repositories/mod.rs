//! Repository trait definitions for the domain layer.
//!
//! Traits define the contract for data the resolver reads; implementations
//! live in `crate::infrastructure`. Mock implementations are generated via
//! `mockall` for testing.
//!
//! # Available Repositories
//!
//! - [`GiftCardCatalog`] - Gift cards available for merchant lookup

pub mod gift_card_catalog;

pub use gift_card_catalog::{CatalogError, CatalogSnapshot, GiftCardCatalog};

#[cfg(test)]
pub use gift_card_catalog::MockGiftCardCatalog;
