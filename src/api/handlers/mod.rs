//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod catalog;
pub mod health;
pub mod resolve;

pub use catalog::{catalog_handler, replace_catalog_handler};
pub use health::health_handler;
pub use resolve::{resolve_handler, resolve_offer_handler};
