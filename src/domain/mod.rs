//! Domain layer containing link-resolution entities and contracts.
//!
//! # Architecture
//!
//! - [`entities`] - Links, gift cards, content cards and resolution outcomes
//! - [`routing`] - Typed in-app routes and the route table contract
//! - [`repositories`] - Gift-card catalog contract
//! - [`ports`] - Side-effect ports driven by the dispatcher
//!
//! # Design Principles
//!
//! - Domain layer has no dependencies on infrastructure or presentation layers
//! - Collaborators are traits implemented by the infrastructure layer or the host
//! - Resolution logic lives in [`crate::application::services`]

pub mod entities;
pub mod ports;
pub mod repositories;
pub mod routing;
