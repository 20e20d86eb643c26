//! Application layer services implementing link resolution.
//!
//! Services consume domain traits and provide a clean API for HTTP handlers,
//! the CLI and host shells.
//!
//! # Available Services
//!
//! - [`services::link_resolver::LinkResolver`] - Pure link-to-outcome resolution
//! - [`services::offer_dispatcher::OfferDispatcher`] - Performs the outcome's side effects

pub mod services;
