#![allow(dead_code)]

use std::sync::Arc;

use offer_link_resolver::application::services::LinkResolver;
use offer_link_resolver::domain::entities::GiftCardConfig;
use offer_link_resolver::domain::repositories::GiftCardCatalog;
use offer_link_resolver::infrastructure::catalog::{EmptyCatalog, InMemoryCatalog};
use offer_link_resolver::infrastructure::routing::PatternRouteTable;
use offer_link_resolver::state::AppState;

pub const PREFIX: &str = "app://open";

pub fn test_cards() -> Vec<GiftCardConfig> {
    let mut amazon = GiftCardConfig::new("Amazon", "USD");
    amazon.display_name = Some("Amazon.com".to_string());
    amazon.min_amount = Some(1.0);
    amazon.max_amount = Some(2000.0);

    vec![
        amazon,
        GiftCardConfig::new("Home Depot", "USD"),
        GiftCardConfig::new("Uber", "USD"),
    ]
}

pub fn test_resolver() -> LinkResolver<PatternRouteTable> {
    LinkResolver::new(PREFIX, Arc::new(PatternRouteTable::default()))
}

pub fn create_test_state_with(catalog: Arc<dyn GiftCardCatalog>) -> AppState {
    AppState::new(Arc::new(test_resolver()), catalog)
}

pub fn create_test_state() -> AppState {
    let catalog = InMemoryCatalog::new(test_cards()).unwrap();
    create_test_state_with(Arc::new(catalog))
}

pub fn create_empty_state() -> AppState {
    create_test_state_with(Arc::new(EmptyCatalog::new()))
}
