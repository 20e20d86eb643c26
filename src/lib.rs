//! # Offer Link Resolver
//!
//! Deep-link resolution and dispatch for wallet promotional offers.
//!
//! An offer card carries a URL. Pressing it must either open an in-app screen
//! (a gift card purchase flow, or the gift-card listing) or hand the URL to a
//! browser. This crate makes that decision and drives the side effects.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - Entities, typed routes, catalog and port traits
//! - **Application Layer** ([`application`]) - [`LinkResolver`] and [`OfferDispatcher`]
//! - **Infrastructure Layer** ([`infrastructure`]) - Route table, catalogs, console ports
//! - **API Layer** ([`api`]) - REST handlers, DTOs and middleware
//!
//! ## Resolution Rules
//!
//! - Empty links do nothing
//! - `<prefix>/giftcard?merchant=<Name>` opens the matching gift card, or the
//!   gift-card listing when no card matches
//! - `<prefix>/shop` opens the gift-card listing
//! - Everything else, including unparseable links, opens in a browser
//!
//! ## Quick Start
//!
//! ```bash
//! export APP_DEEPLINK_PREFIX="app://open"
//! export GIFT_CARD_CATALOG_PATH="./catalog.json"  # Optional
//!
//! cargo run
//! cargo run --bin resolve-link -- resolve "app://open/giftcard?merchant=Amazon"
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;

pub mod config;
pub mod server;

pub mod routes;

pub use application::services::{LinkResolver, OfferDispatcher};
pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{LinkResolver, OfferDispatcher};
    pub use crate::domain::entities::{
        ContentCard, GiftCardConfig, InboundLink, Resolution, ResolutionOutcome, Screen,
    };
    pub use crate::domain::routing::RouteTable;
    pub use crate::error::AppError;
    pub use crate::infrastructure::routing::PatternRouteTable;
    pub use crate::state::AppState;
}
