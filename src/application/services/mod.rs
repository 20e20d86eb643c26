//! Business logic services for the application layer.

pub mod link_resolver;
pub mod offer_dispatcher;

pub use link_resolver::LinkResolver;
pub use offer_dispatcher::OfferDispatcher;
