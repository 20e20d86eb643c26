//! Core domain entities for link resolution.
//!
//! Entities are plain data structures built per resolution and discarded once
//! the caller has acted on the outcome.
//!
//! # Entity Types
//!
//! - [`InboundLink`] - A raw link plus the card's browser preference
//! - [`GiftCardConfig`] - A merchant gift card addressable by name
//! - [`ResolutionOutcome`] - The decision returned to the caller
//! - [`ContentCard`] / [`OfferCardView`] - The offer card carrying the link

pub mod content_card;
pub mod gift_card;
pub mod inbound_link;
pub mod outcome;

pub use content_card::{ContentCard, ContentCardKind, OfferCardView};
pub use gift_card::GiftCardConfig;
pub use inbound_link::InboundLink;
pub use outcome::{LinkDiagnostic, Resolution, ResolutionOutcome, Screen};
